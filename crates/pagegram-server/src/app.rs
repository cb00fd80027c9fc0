//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route(
            "/api/generate-mermaid",
            post(handlers::generate::generate_mermaid),
        )
        .route("/api/render", post(handlers::render::render_diagram));

    let router = Router::new()
        .merge(api_routes)
        .merge(static_files::static_router());

    security::with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
