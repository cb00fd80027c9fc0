//! Kroki-backed Mermaid rendering.
//!
//! Posts the diagram source as `text/plain` to `{server}/mermaid/svg`.
//! Kroki answers 400 with a plain-text explanation when the source does not
//! parse, which is surfaced as [`RenderError::Syntax`].

use std::time::Duration;

use ureq::Agent;

use crate::consts::KROKI_MERMAID_ENDPOINT;
use crate::kind::DiagramKind;
use crate::{DiagramRenderer, RenderError, RenderedGraphic};

/// Renderer talking to a Kroki server.
///
/// Built once per process. Renders happen only on explicit [`render`] calls.
///
/// [`render`]: DiagramRenderer::render
pub struct KrokiRenderer {
    agent: Agent,
    server_url: String,
}

impl KrokiRenderer {
    /// Create a renderer for the Kroki server at `server_url`.
    ///
    /// `timeout` bounds each request; `None` waits indefinitely.
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

    fn endpoint_url(&self) -> String {
        format!("{}/{KROKI_MERMAID_ENDPOINT}/svg", self.server_url)
    }

    /// Send the source to Kroki and return the response body.
    fn send(&self, source: &str) -> Result<String, RenderError> {
        let response = self
            .agent
            .post(&self.endpoint_url())
            .header("Content-Type", "text/plain")
            .header("Accept", "image/svg+xml")
            .send(source.as_bytes())
            .map_err(|e| RenderError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(classify_failure(status, error_body));
        }

        let bytes = body
            .read_to_vec()
            .map_err(|e| RenderError::Http(e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| RenderError::InvalidSvg(format!("invalid UTF-8 in SVG: {e}")))
    }
}

impl DiagramRenderer for KrokiRenderer {
    fn render(&self, source: &str) -> Result<RenderedGraphic, RenderError> {
        let kind = DiagramKind::detect(source);
        tracing::debug!(
            kind = kind.map_or("unknown", DiagramKind::as_str),
            bytes = source.len(),
            "Rendering diagram via Kroki"
        );

        let markup = self.send(source)?;
        ensure_svg(&markup)?;

        Ok(RenderedGraphic { markup })
    }
}

/// Map a Kroki error status to a render error.
///
/// 400 means Kroki could not parse the diagram; anything else is a
/// service failure.
fn classify_failure(status: u16, body: String) -> RenderError {
    if status == 400 {
        let message = body.trim();
        RenderError::Syntax(if message.is_empty() {
            "invalid diagram syntax".to_owned()
        } else {
            message.to_owned()
        })
    } else {
        RenderError::Http(format!("HTTP {status}: {body}"))
    }
}

/// Reject bodies that are not an SVG document.
fn ensure_svg(markup: &str) -> Result<(), RenderError> {
    let head = markup.trim_start();
    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        Ok(())
    } else {
        let preview: String = head.chars().take(40).collect();
        Err(RenderError::InvalidSvg(format!(
            "expected <svg> document, got {preview:?}"
        )))
    }
}
