//! Static file serving.
//!
//! Serves the browser shell from `pagegram-assets`, falling back to
//! `index.html` for extensionless paths.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Create router for static file serving with `index.html` fallback.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

async fn serve_asset(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = pagegram_assets::get(file_path) {
        let mime = pagegram_assets::mime_for(file_path);
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime)],
            content.into_owned(),
        )
            .into_response();
    }

    let is_shell_route = !path.starts_with("api/") && !path.contains('.');
    if is_shell_route && let Some(index) = pagegram_assets::get("index.html") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            index.into_owned(),
        )
            .into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
