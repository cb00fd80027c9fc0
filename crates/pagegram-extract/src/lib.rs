//! Readable article extraction for Pagegram.
//!
//! Turns raw page markup into the main readable text of the page, with
//! navigation and boilerplate stripped. Two pieces form the API:
//!
//! - [`ContentExtractor`]: the extraction seam, injected into the pipeline
//! - [`excerpt`]: character-safe truncation applied before generation
//!
//! # Implementations
//!
//! - [`ReadabilityExtractor`]: Mozilla Readability port via the `readability` crate
//! - `MockExtractor` (feature `mock`): fixed result for tests
//!
//! # Example
//!
//! ```ignore
//! use pagegram_extract::{ContentExtractor, ReadabilityExtractor, excerpt, MAX_EXCERPT_CHARS};
//!
//! let url = url::Url::parse("https://example.com/post")?;
//! let article = ReadabilityExtractor::new().extract(html, &url)?;
//! let prompt_input = excerpt(&article.text_content, MAX_EXCERPT_CHARS);
//! ```

mod article;
#[cfg(feature = "mock")]
mod mock;
mod readable;

pub use article::{ExtractedArticle, MAX_EXCERPT_CHARS, excerpt};
#[cfg(feature = "mock")]
pub use mock::MockExtractor;
pub use readable::ReadabilityExtractor;

use url::Url;

/// Error extracting readable content from a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The page parsed but held no article-like text.
    #[error("Failed to extract content from the webpage")]
    NoContent,

    /// The extraction library rejected the document.
    #[error("Failed to extract content from the webpage: {0}")]
    Parse(String),
}

/// Extracts the main readable text from page markup.
///
/// Implementations are pure: the same markup and URL give the same article.
pub trait ContentExtractor: Send + Sync {
    /// Extract the article from `html`.
    ///
    /// `url` is the address the markup was fetched from and is used to
    /// resolve relative references inside the document.
    fn extract(&self, html: &str, url: &Url) -> Result<ExtractedArticle, ExtractError>;
}
