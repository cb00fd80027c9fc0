//! Completion service client.
//!
//! Sync HTTP client for an OpenAI-compatible `/completions` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::parse::diagram_code;
use crate::prompt::build_prompt;
use crate::{DiagramGenerator, GenerateError, GeneratedDiagram};

/// Token ceiling for one completion.
pub const MAX_TOKENS: u32 = 500;

/// Sampling temperature.
pub const TEMPERATURE: f64 = 0.7;

/// Connection settings for [`CompletionClient`].
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    /// Bearer credential (`None` makes every call fail).
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API base URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Global request timeout (`None` waits indefinitely).
    pub timeout: Option<Duration>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

/// Completion service client.
///
/// Constructed once per process and shared; holds a pooled `ureq` agent.
pub struct CompletionClient {
    agent: Agent,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl CompletionClient {
    /// Create a client from settings.
    pub fn new(settings: CompletionSettings) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(settings.timeout)
            .http_status_as_error(false)
            .build()
            .into();

        if settings.api_key.is_none() {
            tracing::warn!("No completion API key configured; diagram generation will fail");
        }

        Self {
            agent,
            api_key: settings.api_key,
            model: settings.model,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

impl DiagramGenerator for CompletionClient {
    fn generate(&self, excerpt: &str) -> Result<GeneratedDiagram, GenerateError> {
        let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

        let prompt = build_prompt(excerpt);
        let payload = serde_json::to_vec(&CompletionRequest {
            model: &self.model,
            prompt: &prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        })?;

        tracing::info!(
            model = %self.model,
            excerpt_chars = excerpt.chars().count(),
            "Requesting completion"
        );

        let response = self
            .agent
            .post(&self.completions_url())
            .header("Authorization", &format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GenerateError::Http {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        let completion: CompletionResponse = serde_json::from_str(&body)?;

        let code = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .as_deref()
            .and_then(diagram_code)
            .ok_or(GenerateError::Empty)?;

        tracing::info!(code_chars = code.len(), "Completion returned diagram code");
        Ok(GeneratedDiagram { code })
    }
}
