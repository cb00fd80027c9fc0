//! Readability-based extractor.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::article::ExtractedArticle;
use crate::{ContentExtractor, ExtractError};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// [`ContentExtractor`] backed by the `readability` crate.
///
/// Scores candidate nodes by content density and keeps the best subtree,
/// which drops navigation, sidebars and footers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityExtractor;

impl ReadabilityExtractor {
    /// Create a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for ReadabilityExtractor {
    fn extract(&self, html: &str, url: &Url) -> Result<ExtractedArticle, ExtractError> {
        let mut input = html.as_bytes();
        let product = readability::extractor::extract(&mut input, url)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let text_content = normalize_text(&product.text);
        if text_content.is_empty() {
            tracing::debug!(url = %url, "No readable text found");
            return Err(ExtractError::NoContent);
        }

        let title = normalize_text(&product.title);
        tracing::debug!(
            url = %url,
            chars = text_content.chars().count(),
            "Extracted article text"
        );

        Ok(ExtractedArticle {
            title: (!title.is_empty()).then_some(title),
            text_content,
        })
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn normalize_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head><title>How Rivers Shape Valleys</title></head>
<body>
  <nav><a href="/">Home</a> | <a href="/about">About</a> | <a href="/contact">Contact</a></nav>
  <article>
    <h1>How Rivers Shape Valleys</h1>
    <p>Rivers carve valleys over thousands of years, cutting through rock layers,
       carrying sediment downstream, and depositing it where the current slows.</p>
    <p>In the upper course, the river is steep and fast, so vertical erosion dominates,
       producing narrow V-shaped valleys, waterfalls, and gorges along the way.</p>
    <p>In the middle course, lateral erosion widens the valley floor, meanders form,
       and the river begins to build floodplains from the sediment it deposits.</p>
    <p>In the lower course, the gradient is gentle, the channel is wide and deep,
       and deltas or estuaries form where the river finally meets the sea.</p>
  </article>
  <footer>Copyright 2024, All rights reserved.</footer>
</body>
</html>"#;

    fn base_url() -> Url {
        Url::parse("https://example.com/geography/rivers").unwrap()
    }

    #[test]
    fn test_extract_article_text() {
        let article = ReadabilityExtractor::new()
            .extract(ARTICLE, &base_url())
            .unwrap();

        assert!(article.text_content.contains("Rivers carve valleys"));
        assert!(article.text_content.contains("deltas or estuaries"));
    }

    #[test]
    fn test_extract_article_title() {
        let article = ReadabilityExtractor::new()
            .extract(ARTICLE, &base_url())
            .unwrap();

        let title = article.title.unwrap();
        assert!(title.contains("How Rivers Shape Valleys"));
    }

    #[test]
    fn test_extract_normalizes_whitespace() {
        let article = ReadabilityExtractor::new()
            .extract(ARTICLE, &base_url())
            .unwrap();

        assert!(!article.text_content.contains('\n'));
        assert!(!article.text_content.contains("  "));
        assert_eq!(article.text_content, article.text_content.trim());
    }

    #[test]
    fn test_extract_empty_body_fails() {
        let result =
            ReadabilityExtractor::new().extract("<html><body></body></html>", &base_url());
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_error_messages() {
        assert_eq!(
            ExtractError::NoContent.to_string(),
            "Failed to extract content from the webpage"
        );
        assert!(
            ExtractError::Parse("bad markup".to_owned())
                .to_string()
                .starts_with("Failed to extract content from the webpage")
        );
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  a\n\n b\t c  "), "a b c");
        assert_eq!(normalize_text("\n \t"), "");
    }
}
