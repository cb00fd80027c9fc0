//! Browser shell assets for Pagegram.
//!
//! The shell is plain HTML, CSS and JavaScript under `frontend/`, with no
//! build step. Assets are served in one of two modes:
//!
//! - **`embed` feature on**: compiled into the binary via `rust-embed`
//! - **`embed` feature off**: read from `frontend/` at runtime

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

/// Embedded shell assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../frontend"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = "frontend";

/// Get a shell asset by path (relative to `frontend/`).
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get a shell asset by path (relative to `frontend/`).
///
/// Paths containing `..` are rejected.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }
    let full_path = Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("style.css"), "text/css");
        assert_eq!(mime_for("index.html"), "text/html");
        assert_eq!(mime_for("mermaid-diagram.svg"), "image/svg+xml");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[cfg(not(feature = "embed"))]
    #[test]
    fn test_get_rejects_parent_segments() {
        assert!(get("../Cargo.toml").is_none());
    }
}
