/// Turn raw completion text into diagram code.
///
/// Trims surrounding whitespace and unwraps a single Markdown code fence
/// (```` ```mermaid ... ``` ````) when the model wraps its answer in one.
/// Returns `None` when nothing usable remains.
pub(crate) fn diagram_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let code = strip_code_fence(trimmed).unwrap_or(trimmed).trim();

    (!code.is_empty()).then(|| code.to_owned())
}

fn strip_code_fence(text: &str) -> Option<&str> {
    let body = text.strip_prefix("```")?.strip_suffix("```")?;
    // Drop the info string (e.g. "mermaid") on the opening line.
    let (_, rest) = body.split_once('\n')?;
    Some(rest)
}
