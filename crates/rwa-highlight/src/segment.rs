use rwa_lexer::{Span, TokenKind};
use serde::Serialize;

/// One display unit: a token's text, its classification, and whether it
/// contains an active highlight. Segments of one call concatenate back to
/// the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSegment {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    #[serde(rename = "isActiveHighlight")]
    pub active: bool,
}

impl StyledSegment {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, active: bool) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            active,
        }
    }
}

/// Index of the first active segment, the scroll target for a renderer.
pub fn first_active(segments: &[StyledSegment]) -> Option<usize> {
    segments.iter().position(|s| s.active)
}

/// Concatenate segment texts.
pub fn reconstruct(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_field_names() {
        let span = Span::new(9, 13, 1, 10);
        let segment = StyledSegment::new(TokenKind::FunctionName, "mint", span, true);
        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(value["kind"], "declared-function-name");
        assert_eq!(value["text"], "mint");
        assert_eq!(value["span"]["start"], 9);
        assert_eq!(value["isActiveHighlight"], true);
        assert!(value.get("active").is_none());
    }

    #[test]
    fn test_first_active_and_reconstruct() {
        let segments = vec![
            StyledSegment::new(TokenKind::Keyword, "uint", Span::new(0, 4, 1, 1), false),
            StyledSegment::new(TokenKind::Whitespace, " ", Span::new(4, 5, 1, 5), true),
        ];
        assert_eq!(first_active(&segments), Some(1));
        assert_eq!(reconstruct(&segments), "uint ");
    }
}
