//! Generation API endpoint.
//!
//! Turns a page URL into Mermaid code by running the pipeline on the
//! blocking thread pool.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Body of POST /api/generate-mermaid.
#[derive(Debug, Deserialize)]
pub(crate) struct DiagramRequest {
    /// Page to diagram; absence is reported as a 400.
    #[serde(default)]
    url: Option<String>,
}

/// Response for POST /api/generate-mermaid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiagramResponse {
    /// Generated Mermaid code.
    mermaid_code: String,
}

/// Handle POST /api/generate-mermaid.
pub(crate) async fn generate_mermaid(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiagramRequest>, JsonRejection>,
) -> Result<Json<DiagramResponse>, ServerError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // A body sent without a JSON content type is read as empty.
        Err(JsonRejection::MissingJsonContentType(_)) => DiagramRequest { url: None },
        Err(e) => return Err(ServerError::InvalidBody(e.body_text())),
    };

    let url = request
        .url
        .filter(|url| !url.is_empty())
        .ok_or(ServerError::MissingUrl)?;

    let pipeline = state.pipeline.clone();
    let diagram = tokio::task::spawn_blocking(move || pipeline.run(&url))
        .await
        .map_err(|e| ServerError::Task(e.to_string()))??;

    Ok(Json(DiagramResponse {
        mermaid_code: diagram.code,
    }))
}
