//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagegram_diagrams::{RENDER_ERROR_MESSAGE, RenderError};
use pagegram_pipeline::PipelineError;
use serde_json::json;

/// Body of every generation failure past request validation.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request has no usable `url`.
    #[error("URL is required")]
    MissingUrl,

    /// Request body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Fetch, extraction or generation failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(String),

    /// No renderer is configured.
    #[error("Diagram rendering is disabled")]
    RenderingDisabled,

    /// The renderer rejected the diagram or could not be reached.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingUrl => (
                StatusCode::BAD_REQUEST,
                json!({"error": "URL is required"}),
            ),
            Self::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid request body"}),
            ),
            Self::Pipeline(_) | Self::Task(_) => {
                tracing::error!(error = %self, "Diagram generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": GENERIC_ERROR_MESSAGE}),
                )
            }
            Self::RenderingDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": "Diagram rendering is disabled"}),
            ),
            Self::Render(e) => {
                let status = if e.is_syntax() {
                    StatusCode::UNPROCESSABLE_ENTITY
                } else {
                    tracing::error!(error = %e, "Diagram renderer failed");
                    StatusCode::BAD_GATEWAY
                };
                (
                    status,
                    json!({"error": RENDER_ERROR_MESSAGE, "detail": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pagegram_extract::ExtractError;

    use super::*;

    #[test]
    fn test_missing_url_is_bad_request() {
        let response = ServerError::MissingUrl.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pipeline_errors_are_internal() {
        let err = ServerError::Pipeline(PipelineError::Extract(ExtractError::NoContent));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_render_syntax_error_is_unprocessable() {
        let err = ServerError::Render(RenderError::Syntax("bad".to_owned()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_render_transport_error_is_bad_gateway() {
        let err = ServerError::Render(RenderError::Http("connection refused".to_owned()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
