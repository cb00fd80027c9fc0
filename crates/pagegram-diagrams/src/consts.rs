//! Constants shared by renderers and exporters.

/// File name used when exporting a rendered diagram.
pub const SVG_FILE_NAME: &str = "mermaid-diagram.svg";

/// MIME type of exported diagrams.
pub const SVG_MIME: &str = "image/svg+xml";

/// User-facing message shown when a diagram fails to render.
pub const RENDER_ERROR_MESSAGE: &str =
    "Error rendering the diagram. Please check your Mermaid syntax.";

/// Kroki endpoint for Mermaid sources.
pub(crate) const KROKI_MERMAID_ENDPOINT: &str = "mermaid";
