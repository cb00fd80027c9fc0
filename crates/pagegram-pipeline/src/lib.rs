//! Generation pipeline for Pagegram.
//!
//! Orchestrates the linear flow behind the generation endpoint:
//!
//! ```text
//! url ──► PageFetcher ──► ContentExtractor ──► excerpt(2000) ──► DiagramGenerator ──► code
//! ```
//!
//! Each stage is an injected trait object, constructed once per process and
//! shared by every request. Stages run sequentially and fail fast; there is
//! no retry and no partial result.

mod fetch;

use std::sync::Arc;
use std::time::Duration;

use pagegram_extract::{
    ContentExtractor, ExtractError, MAX_EXCERPT_CHARS, ReadabilityExtractor, excerpt,
};
use pagegram_generate::{
    CompletionClient, CompletionSettings, DiagramGenerator, GenerateError, GeneratedDiagram,
};
use url::Url;

pub use fetch::{FetchError, HttpFetcher, PageFetcher};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockFetcher;

/// Error from any pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The submitted URL does not parse.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Retrieving the page failed.
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    /// No readable content in the page.
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// The model produced no usable diagram.
    #[error("{0}")]
    Generate(#[from] GenerateError),
}

/// Settings for the production pipeline stages.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// `User-Agent` sent when fetching pages.
    pub user_agent: String,
    /// Page fetch timeout (`None` waits indefinitely).
    pub fetch_timeout: Option<Duration>,
    /// Completion service connection.
    pub completion: CompletionSettings,
}

/// Fetch → extract → truncate → generate.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    generator: Arc<dyn DiagramGenerator>,
}

impl Pipeline {
    /// Create a pipeline from its stages.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn ContentExtractor>,
        generator: Arc<dyn DiagramGenerator>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            generator,
        }
    }

    /// Create a pipeline from the HTTP fetcher, readability extractor and
    /// completion client.
    pub fn from_settings(settings: PipelineSettings) -> Self {
        Self::new(
            Arc::new(HttpFetcher::new(&settings.user_agent, settings.fetch_timeout)),
            Arc::new(ReadabilityExtractor::new()),
            Arc::new(CompletionClient::new(settings.completion)),
        )
    }

    /// Run the whole pipeline for `url`.
    ///
    /// Blocks on two network calls (page fetch and completion); call it from
    /// a blocking context.
    pub fn run(&self, url: &str) -> Result<GeneratedDiagram, PipelineError> {
        let url = Url::parse(url.trim()).map_err(|e| PipelineError::InvalidUrl {
            url: url.to_owned(),
            message: e.to_string(),
        })?;

        let html = self.fetcher.fetch(&url)?;
        let article = self.extractor.extract(&html, &url)?;

        let text = excerpt(&article.text_content, MAX_EXCERPT_CHARS);
        tracing::info!(
            url = %url,
            title = article.title.as_deref().unwrap_or("(untitled)"),
            extracted_chars = article.text_content.chars().count(),
            excerpt_chars = text.chars().count(),
            "Generating diagram from article"
        );

        let diagram = self.generator.generate(text)?;
        Ok(diagram)
    }
}

#[cfg(test)]
mod tests {
    use pagegram_extract::MockExtractor;
    use pagegram_generate::MockGenerator;
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(Pipeline: Send, Sync, Clone);

    fn pipeline(
        fetcher: MockFetcher,
        extractor: MockExtractor,
        generator: Arc<MockGenerator>,
    ) -> Pipeline {
        Pipeline::new(Arc::new(fetcher), Arc::new(extractor), generator)
    }

    #[test]
    fn test_from_settings_builds() {
        let pipeline = Pipeline::from_settings(PipelineSettings {
            user_agent: "pagegram-test".to_owned(),
            fetch_timeout: None,
            completion: CompletionSettings {
                api_key: None,
                model: "gpt-3.5-turbo-instruct".to_owned(),
                base_url: "http://127.0.0.1:9".to_owned(),
                timeout: None,
            },
        });

        let err = pipeline.run("not a url").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidUrl { .. }));
    }

    #[test]
    fn test_run_returns_generated_code() {
        let generator = Arc::new(MockGenerator::with_code("graph TD\nA-->B"));
        let pipeline = pipeline(
            MockFetcher::with_html("<html></html>"),
            MockExtractor::with_text("An article."),
            Arc::clone(&generator),
        );

        let diagram = pipeline.run("https://example.com/post").unwrap();

        assert_eq!(diagram.code, "graph TD\nA-->B");
        assert_eq!(generator.excerpts(), vec!["An article.".to_owned()]);
    }

    #[test]
    fn test_run_truncates_to_first_2000_chars() {
        let long_text: String = (0..2600)
            .map(|i| char::from(b'a' + u8::try_from(i % 26).unwrap()))
            .collect();
        let generator = Arc::new(MockGenerator::with_code("graph TD\nA-->B"));
        let pipeline = pipeline(
            MockFetcher::with_html("<html></html>"),
            MockExtractor::with_text(long_text.clone()),
            Arc::clone(&generator),
        );

        pipeline.run("https://example.com/post").unwrap();

        let excerpts = generator.excerpts();
        assert_eq!(excerpts.len(), 1);
        assert_eq!(excerpts[0].chars().count(), 2000);
        assert_eq!(excerpts[0], long_text[..2000]);
    }

    #[test]
    fn test_run_invalid_url() {
        let generator = Arc::new(MockGenerator::with_code("graph TD"));
        let pipeline = pipeline(
            MockFetcher::with_html(""),
            MockExtractor::with_text("text"),
            Arc::clone(&generator),
        );

        let err = pipeline.run("not a url").unwrap_err();

        assert!(matches!(err, PipelineError::InvalidUrl { .. }));
        assert!(generator.excerpts().is_empty());
    }

    #[test]
    fn test_run_fetch_failure_stops_pipeline() {
        let generator = Arc::new(MockGenerator::with_code("graph TD"));
        let pipeline = pipeline(
            MockFetcher::failing(404),
            MockExtractor::with_text("text"),
            Arc::clone(&generator),
        );

        let err = pipeline.run("https://example.com/missing").unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Fetch(FetchError::Http { status: 404, .. })
        ));
        assert!(generator.excerpts().is_empty());
    }

    #[test]
    fn test_run_extraction_failure() {
        let generator = Arc::new(MockGenerator::with_code("graph TD"));
        let pipeline = pipeline(
            MockFetcher::with_html("<html></html>"),
            MockExtractor::failing(),
            Arc::clone(&generator),
        );

        let err = pipeline.run("https://example.com/").unwrap_err();

        assert_eq!(err.to_string(), "Failed to extract content from the webpage");
        assert!(generator.excerpts().is_empty());
    }

    #[test]
    fn test_run_generation_failure() {
        let generator = Arc::new(MockGenerator::failing(GenerateError::Empty));
        let pipeline = pipeline(
            MockFetcher::with_html("<html></html>"),
            MockExtractor::with_text("text"),
            generator,
        );

        let err = pipeline.run("https://example.com/").unwrap_err();

        assert_eq!(err.to_string(), "Failed to generate Mermaid code");
    }
}
