//! Mock extractor for testing.
//!
//! Provides [`MockExtractor`] for exercising the pipeline without parsing HTML.

use url::Url;

use crate::{ContentExtractor, ExtractError, ExtractedArticle};

/// Extractor returning a preconfigured result regardless of input.
///
/// # Example
///
/// ```ignore
/// use pagegram_extract::MockExtractor;
///
/// let ok = MockExtractor::with_text("Article body");
/// let failing = MockExtractor::failing();
/// ```
#[derive(Debug, Clone)]
pub struct MockExtractor {
    result: Result<ExtractedArticle, ExtractError>,
}

impl MockExtractor {
    /// Always extract `text` as the article body.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            result: Ok(ExtractedArticle {
                title: None,
                text_content: text.into(),
            }),
        }
    }

    /// Always fail with [`ExtractError::NoContent`].
    #[must_use]
    pub fn failing() -> Self {
        Self {
            result: Err(ExtractError::NoContent),
        }
    }
}

impl ContentExtractor for MockExtractor {
    fn extract(&self, _html: &str, _url: &Url) -> Result<ExtractedArticle, ExtractError> {
        self.result.clone()
    }
}
