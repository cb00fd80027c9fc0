//! Mock renderer for testing.

use crate::kind::DiagramKind;
use crate::{DiagramRenderer, RenderError, RenderedGraphic};

/// Deterministic in-process renderer.
///
/// Accepts any source whose header names a known Mermaid diagram type and
/// wraps the source in an `<svg>` element; everything else is a syntax error.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockRenderer;

impl DiagramRenderer for MockRenderer {
    fn render(&self, source: &str) -> Result<RenderedGraphic, RenderError> {
        let kind = DiagramKind::detect(source)
            .ok_or_else(|| RenderError::Syntax("No diagram type detected".to_owned()))?;

        Ok(RenderedGraphic {
            markup: format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" data-kind=\"{}\"><text>{}</text></svg>",
                kind.as_str(),
                escape(source)
            ),
        })
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
