//! Mermaid diagram generation for Pagegram.
//!
//! Sends an article excerpt to a generative text model and returns the
//! Mermaid syntax it produces. One completion request per call, no retry.
//!
//! # Implementations
//!
//! - [`CompletionClient`]: OpenAI-compatible `/completions` endpoint over `ureq`
//! - `MockGenerator` (feature `mock`): fixed output for tests

mod client;
#[cfg(feature = "mock")]
mod mock;
mod parse;
mod prompt;

pub use client::{CompletionClient, CompletionSettings, MAX_TOKENS, TEMPERATURE};
#[cfg(feature = "mock")]
pub use mock::MockGenerator;
pub use prompt::build_prompt;

/// Mermaid code produced by the model, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDiagram {
    /// Diagram-description text.
    pub code: String,
}

/// Error generating a diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The model answered without usable text.
    #[error("Failed to generate Mermaid code")]
    Empty,

    /// No credential configured for the completion service.
    #[error("No API key configured for the completion service")]
    MissingApiKey,

    /// HTTP or transport failure (status 0 for transport errors).
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// Response body was not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for GenerateError {
    fn from(e: serde_json::Error) -> Self {
        GenerateError::Json(e.to_string())
    }
}

impl From<ureq::Error> for GenerateError {
    fn from(e: ureq::Error) -> Self {
        GenerateError::Http {
            status: 0,
            body: e.to_string(),
        }
    }
}

/// Produces Mermaid code describing a text excerpt.
pub trait DiagramGenerator: Send + Sync {
    /// Generate a diagram for `excerpt`.
    ///
    /// Callers cap the excerpt length before calling.
    fn generate(&self, excerpt: &str) -> Result<GeneratedDiagram, GenerateError>;
}
