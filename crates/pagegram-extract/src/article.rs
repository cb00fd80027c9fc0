//! Extracted article type and excerpt truncation.

/// Maximum number of characters forwarded to the diagram generator.
pub const MAX_EXCERPT_CHARS: usize = 2000;

/// Readable content extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Article title, when the page exposes one.
    pub title: Option<String>,
    /// Whitespace-normalised article text. Never empty.
    pub text_content: String,
}

/// Return the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
/// Text shorter than the limit is returned whole.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
