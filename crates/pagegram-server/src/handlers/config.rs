//! Configuration API endpoint.
//!
//! Returns client-side configuration for the browser shell.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Server version.
    version: String,
    /// Whether `/api/render` is available.
    rendering_enabled: bool,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        version: state.version.clone(),
        rendering_enabled: state.rendering_enabled(),
    })
}
