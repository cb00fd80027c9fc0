//! SVG export.

use std::path::{Path, PathBuf};

use crate::RenderedGraphic;
use crate::consts::{SVG_FILE_NAME, SVG_MIME};

/// A rendered diagram packaged as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgExport {
    /// Suggested file name (`mermaid-diagram.svg`).
    pub file_name: &'static str,
    /// MIME type (`image/svg+xml`).
    pub mime: &'static str,
    /// SVG markup, unchanged from the rendered graphic.
    pub contents: String,
}

impl SvgExport {
    /// Package the markup of `graphic`.
    #[must_use]
    pub fn from_graphic(graphic: &RenderedGraphic) -> Self {
        Self {
            file_name: SVG_FILE_NAME,
            mime: SVG_MIME,
            contents: graphic.markup.clone(),
        }
    }

    /// Write the export into `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(self.file_name);
        std::fs::write(&path, self.contents.as_bytes())?;
        Ok(path)
    }
}
