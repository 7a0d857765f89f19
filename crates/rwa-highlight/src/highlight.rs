use crate::segment::StyledSegment;
use rwa_lexer::lex;

/// Literal substrings currently flagged for emphasis.
///
/// Entries are matched by plain substring containment, so characters such
/// as `*` or `(` carry no pattern meaning. An empty entry is contained in
/// every token and so marks all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet<'h> {
    entries: Vec<&'h str>,
}

impl<'h> HighlightSet<'h> {
    pub fn new<S: AsRef<str>>(entries: &'h [S]) -> Self {
        Self {
            entries: entries.iter().map(|e| e.as_ref()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any entry occurs inside `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| text.contains(entry))
    }
}

/// Split, classify and highlight `source`.
///
/// Total over all inputs: empty source gives an empty vector, malformed
/// quoting degrades to a literal run, and an empty `active` list marks
/// nothing.
pub fn highlight<S: AsRef<str>>(source: &str, active: &[S]) -> Vec<StyledSegment> {
    let set = HighlightSet::new(active);

    let segments: Vec<StyledSegment> = lex(source)
        .into_iter()
        .map(|token| {
            let text = token.text(source);
            StyledSegment::new(token.kind, text, token.span, set.matches(text))
        })
        .collect();

    tracing::debug!(
        bytes = source.len(),
        segments = segments.len(),
        highlights = set.len(),
        active = segments.iter().filter(|s| s.active).count(),
        "highlighted source"
    );

    segments
}
