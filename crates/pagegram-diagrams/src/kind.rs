//! Mermaid diagram types.
//!
//! Detects the diagram type from the header keyword that opens every
//! Mermaid source (`graph TD`, `sequenceDiagram`, `pie title ...`).

/// Mermaid diagram types recognised by their header keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    EntityRelationship,
    Journey,
    Gantt,
    Pie,
    Mindmap,
    Timeline,
    GitGraph,
    Quadrant,
    Requirement,
    C4,
    Sankey,
    XyChart,
    Block,
}

impl DiagramKind {
    /// Parse a header keyword.
    ///
    /// Returns None if the keyword does not open a known Mermaid diagram.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "graph" | "flowchart" | "flowchart-elk" => Some(Self::Flowchart),
            "sequenceDiagram" => Some(Self::Sequence),
            "classDiagram" | "classDiagram-v2" => Some(Self::Class),
            "stateDiagram" | "stateDiagram-v2" => Some(Self::State),
            "erDiagram" => Some(Self::EntityRelationship),
            "journey" => Some(Self::Journey),
            "gantt" => Some(Self::Gantt),
            "pie" => Some(Self::Pie),
            "mindmap" => Some(Self::Mindmap),
            "timeline" => Some(Self::Timeline),
            "gitGraph" => Some(Self::GitGraph),
            "quadrantChart" => Some(Self::Quadrant),
            "requirementDiagram" => Some(Self::Requirement),
            "C4Context" | "C4Container" | "C4Component" | "C4Dynamic" | "C4Deployment" => {
                Some(Self::C4)
            }
            "sankey-beta" => Some(Self::Sankey),
            "xychart-beta" => Some(Self::XyChart),
            "block-beta" => Some(Self::Block),
            _ => None,
        }
    }

    /// Detect the diagram type of a Mermaid source.
    ///
    /// Skips blank lines, `%%` comments and directives, and a leading
    /// `---` front matter block before reading the header keyword.
    #[must_use]
    pub fn detect(source: &str) -> Option<Self> {
        let mut lines = source
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .peekable();

        if lines.next_if_eq(&"---").is_some() {
            for line in lines.by_ref() {
                if line == "---" {
                    break;
                }
            }
        }

        for line in lines {
            if line.is_empty() || line.starts_with("%%") {
                continue;
            }

            let keyword = line
                .split(|c: char| c.is_whitespace() || c == ':' || c == ';')
                .next()
                .unwrap_or_default();
            return Self::parse(keyword);
        }

        None
    }

    /// Short name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::EntityRelationship => "er",
            Self::Journey => "journey",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
            Self::Mindmap => "mindmap",
            Self::Timeline => "timeline",
            Self::GitGraph => "gitgraph",
            Self::Quadrant => "quadrant",
            Self::Requirement => "requirement",
            Self::C4 => "c4",
            Self::Sankey => "sankey",
            Self::XyChart => "xychart",
            Self::Block => "block",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_flowchart() {
        assert_eq!(
            DiagramKind::detect("graph TD\n  A-->B"),
            Some(DiagramKind::Flowchart)
        );
        assert_eq!(
            DiagramKind::detect("flowchart LR\n  A-->B"),
            Some(DiagramKind::Flowchart)
        );
    }

    #[test]
    fn test_detect_keyword_with_title() {
        assert_eq!(
            DiagramKind::detect("pie title Pets\n  \"Dogs\" : 386"),
            Some(DiagramKind::Pie)
        );
    }

    #[test]
    fn test_detect_skips_comments_and_directives() {
        let source = "\n%% generated\n%%{init: {\"theme\": \"dark\"}}%%\nsequenceDiagram\n  A->>B: hi";
        assert_eq!(DiagramKind::detect(source), Some(DiagramKind::Sequence));
    }

    #[test]
    fn test_detect_skips_front_matter() {
        let source = "---\ntitle: Flow\n---\nstateDiagram-v2\n  [*] --> A";
        assert_eq!(DiagramKind::detect(source), Some(DiagramKind::State));
    }

    #[test]
    fn test_detect_header_with_semicolon() {
        assert_eq!(
            DiagramKind::detect("graph;A-->B"),
            Some(DiagramKind::Flowchart)
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(DiagramKind::detect("this is not mermaid"), None);
        assert_eq!(DiagramKind::detect(""), None);
        assert_eq!(DiagramKind::detect("%% only a comment"), None);
    }

    #[test]
    fn test_all_keywords() {
        let keywords = [
            ("graph", DiagramKind::Flowchart),
            ("flowchart", DiagramKind::Flowchart),
            ("sequenceDiagram", DiagramKind::Sequence),
            ("classDiagram", DiagramKind::Class),
            ("classDiagram-v2", DiagramKind::Class),
            ("stateDiagram", DiagramKind::State),
            ("erDiagram", DiagramKind::EntityRelationship),
            ("journey", DiagramKind::Journey),
            ("gantt", DiagramKind::Gantt),
            ("pie", DiagramKind::Pie),
            ("mindmap", DiagramKind::Mindmap),
            ("timeline", DiagramKind::Timeline),
            ("gitGraph", DiagramKind::GitGraph),
            ("quadrantChart", DiagramKind::Quadrant),
            ("requirementDiagram", DiagramKind::Requirement),
            ("C4Context", DiagramKind::C4),
            ("sankey-beta", DiagramKind::Sankey),
            ("xychart-beta", DiagramKind::XyChart),
            ("block-beta", DiagramKind::Block),
        ];

        for (keyword, expected) in keywords {
            assert_eq!(
                DiagramKind::parse(keyword),
                Some(expected),
                "Failed to parse: {keyword}"
            );
        }
    }
}
