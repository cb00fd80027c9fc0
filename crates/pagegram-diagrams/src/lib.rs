//! Mermaid diagram rendering for Pagegram.
//!
//! This crate turns diagram-description text into SVG markup:
//! - [`DiagramRenderer`] is the rendering seam used by the editor and server
//! - [`KrokiRenderer`] renders Mermaid through a Kroki service
//! - [`SvgExport`] packages rendered markup as a downloadable file
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`kind`]: Mermaid diagram type detection from the header line
//! - [`kroki`]: HTTP rendering via Kroki
//! - [`export`]: SVG file export
//!
//! # Example
//!
//! ```ignore
//! use pagegram_diagrams::{DiagramRenderer, KrokiRenderer};
//!
//! let renderer = KrokiRenderer::new("https://kroki.io", None);
//! let graphic = renderer.render("graph TD\n  A-->B")?;
//! assert!(graphic.markup.starts_with("<svg"));
//! ```

mod consts;
mod export;
mod kind;
mod kroki;
#[cfg(feature = "mock")]
mod mock;

pub use consts::{RENDER_ERROR_MESSAGE, SVG_FILE_NAME, SVG_MIME};
pub use export::SvgExport;
pub use kind::DiagramKind;
pub use kroki::KrokiRenderer;
#[cfg(feature = "mock")]
pub use mock::MockRenderer;

/// SVG markup rendered from diagram-description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGraphic {
    /// SVG document.
    pub markup: String,
}

/// Error rendering a diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The diagram source is not valid Mermaid.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// HTTP or transport failure talking to the renderer.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The renderer answered with something that is not SVG.
    #[error("invalid SVG output: {0}")]
    InvalidSvg(String),
}

impl RenderError {
    /// Whether the failure is caused by the diagram text itself.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

/// Renders diagram-description text to SVG.
///
/// Rendering is a pure function of `source`: the same input yields the
/// same markup.
pub trait DiagramRenderer: Send + Sync {
    /// Render `source` to SVG.
    fn render(&self, source: &str) -> Result<RenderedGraphic, RenderError>;
}
