//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use pagegram_diagrams::DiagramRenderer;
use pagegram_pipeline::Pipeline;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Fetch, extract and generate pipeline.
    pub(crate) pipeline: Pipeline,
    /// Diagram renderer (`None` disables the render proxy).
    pub(crate) renderer: Option<Arc<dyn DiagramRenderer>>,
    /// Application version.
    pub(crate) version: String,
}

impl AppState {
    /// Check if diagram rendering is available.
    #[must_use]
    pub(crate) fn rendering_enabled(&self) -> bool {
        self.renderer.is_some()
    }
}
