/// Build the completion prompt embedding `excerpt`.
pub fn build_prompt(excerpt: &str) -> String {
    let mut out = String::with_capacity(excerpt.len() + 160);
    out.push_str(
        "Convert the following webpage content into a Mermaid diagram \
         that represents the main structure and flow of information:\n\n",
    );
    out.push_str(excerpt);
    out.push_str("\n\nMermaid syntax:");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_excerpt() {
        let prompt = build_prompt("Rivers carve valleys.");
        assert_eq!(
            prompt,
            "Convert the following webpage content into a Mermaid diagram that represents \
             the main structure and flow of information:\n\nRivers carve valleys.\n\nMermaid syntax:"
        );
    }

    #[test]
    fn test_build_prompt_ends_with_cue() {
        assert!(build_prompt("").ends_with("Mermaid syntax:"));
    }
}
