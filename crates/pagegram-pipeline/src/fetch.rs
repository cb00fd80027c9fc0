//! Page fetching.

use std::time::Duration;

use ureq::Agent;
use url::Url;

/// Error fetching a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// HTTP or transport failure (status 0 for transport errors).
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// The body could not be read as text.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Retrieves raw page markup.
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url` as text.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// [`PageFetcher`] using a pooled `ureq` agent.
pub struct HttpFetcher {
    agent: Agent,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher.
    ///
    /// `timeout` bounds each request; `None` waits indefinitely.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            user_agent: user_agent.to_owned(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        tracing::info!(url = %url, "Fetching page");

        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", &self.user_agent)
            .header("Accept", "text/html,application/xhtml+xml")
            .call()
            .map_err(|e| FetchError::Http {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FetchError::Http {
                status,
                body: error_body,
            });
        }

        let html = body_reader
            .read_to_string()
            .map_err(|e| FetchError::Io(e.to_string()))?;
        tracing::debug!(url = %url, bytes = html.len(), "Fetched page");
        Ok(html)
    }
}

/// Mock fetcher for testing.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone)]
pub struct MockFetcher {
    result: Result<String, FetchError>,
}

#[cfg(any(test, feature = "mock"))]
impl MockFetcher {
    /// Always return `html`.
    #[must_use]
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            result: Ok(html.into()),
        }
    }

    /// Always fail with an HTTP error of `status`.
    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(FetchError::Http {
                status,
                body: String::new(),
            }),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl PageFetcher for MockFetcher {
    fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
        self.result.clone()
    }
}
