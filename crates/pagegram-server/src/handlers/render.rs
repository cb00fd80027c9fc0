//! Render API endpoint.
//!
//! Renders Mermaid code to SVG for the browser shell.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Body of POST /api/render.
#[derive(Debug, Deserialize)]
pub(crate) struct RenderRequest {
    /// Mermaid code.
    code: String,
}

/// Response for POST /api/render.
#[derive(Debug, Serialize)]
pub(crate) struct RenderResponse {
    /// SVG markup.
    svg: String,
}

/// Handle POST /api/render.
pub(crate) async fn render_diagram(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, ServerError> {
    let Json(request) = payload.map_err(|e| ServerError::InvalidBody(e.body_text()))?;
    let renderer = state
        .renderer
        .as_ref()
        .map(Arc::clone)
        .ok_or(ServerError::RenderingDisabled)?;

    let graphic = tokio::task::spawn_blocking(move || renderer.render(&request.code))
        .await
        .map_err(|e| ServerError::Task(e.to_string()))??;

    Ok(Json(RenderResponse {
        svg: graphic.markup,
    }))
}
