//! Where generated diagram code comes from.

use std::time::Duration;

use pagegram_pipeline::Pipeline;
use serde::{Deserialize, Serialize};
use ureq::Agent;

/// Message shown when the generation request never produced a response.
const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Error obtaining diagram code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The server answered with an error message.
    #[error("{0}")]
    Rejected(String),

    /// The server answered with a non-2xx status and no message.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Transport or decoding failure.
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Transport(String),

    /// The in-process pipeline failed.
    #[error("{0}")]
    Pipeline(String),
}

/// Produces Mermaid code for a page URL.
pub trait DiagramSource {
    /// Generate diagram code for `url`.
    fn generate(&self, url: &str) -> Result<String, SourceError>;
}

impl DiagramSource for Pipeline {
    fn generate(&self, url: &str) -> Result<String, SourceError> {
        self.run(url)
            .map(|diagram| diagram.code)
            .map_err(|e| SourceError::Pipeline(e.to_string()))
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(rename = "mermaidCode")]
    mermaid_code: Option<String>,
    error: Option<String>,
}

/// [`DiagramSource`] calling a running server's generation endpoint.
pub struct RemoteSource {
    agent: Agent,
    server_url: String,
}

impl RemoteSource {
    /// Create a client for the server at `server_url`.
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            server_url: server_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Endpoint URL requests are posted to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}/api/generate-mermaid", self.server_url)
    }
}

impl DiagramSource for RemoteSource {
    fn generate(&self, url: &str) -> Result<String, SourceError> {
        let endpoint = self.endpoint_url();
        let body = serde_json::to_vec(&GenerateRequest { url })
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        tracing::debug!(endpoint = %endpoint, url, "Requesting diagram");

        let response = self
            .agent
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .send(&body[..])
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        interpret_response(status, &text)
    }
}

fn interpret_response(status: u16, text: &str) -> Result<String, SourceError> {
    let parsed: Option<GenerateResponse> = serde_json::from_str(text).ok();

    if !(200..300).contains(&status) {
        return Err(match parsed.and_then(|r| r.error) {
            Some(message) => SourceError::Rejected(message),
            None => SourceError::Status(status),
        });
    }

    match parsed.and_then(|r| r.mermaid_code) {
        Some(code) => Ok(code),
        None => Err(SourceError::Transport(format!(
            "response without mermaidCode: {text}"
        ))),
    }
}
