//! Diagram editor for Pagegram.
//!
//! [`Editor`] is the session state behind both the browser shell and the
//! `generate`/`render` CLI commands: the page URL, the Mermaid text, the last
//! rendered SVG and the view state (zoom, tab, request status).
//!
//! Diagram code is obtained through a [`DiagramSource`]: either the
//! in-process [`Pipeline`](pagegram_pipeline::Pipeline) or a
//! [`RemoteSource`] talking to a running server.
//!
//! # Example
//!
//! ```ignore
//! use pagegram_diagrams::KrokiRenderer;
//! use pagegram_editor::{Editor, RemoteSource};
//!
//! let mut editor = Editor::new(KrokiRenderer::new("https://kroki.io", None));
//! editor.set_url("https://example.com/article");
//! editor.generate(&RemoteSource::new("http://127.0.0.1:7979", None))?;
//! let export = editor.export()?;
//! ```

mod editor;
mod source;
mod zoom;

pub use editor::{Editor, EditorError, Preview, Status, Tab};
pub use source::{DiagramSource, RemoteSource, SourceError};
pub use zoom::Zoom;
