//! CSS classes per token kind.

use rwa_lexer::TokenKind;
use serde::{Deserialize, Serialize};

/// Class names the HTML renderer puts on each segment.
///
/// Missing fields in a config file fall back to the defaults, so a theme
/// file only needs to name the classes it changes. An empty class leaves
/// the segment unwrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    /// Class of the surrounding `<pre>`.
    pub container: String,
    /// Added to every segment that contains an active highlight.
    pub active: String,
    pub comment: String,
    pub string_literal: String,
    pub numeric_literal: String,
    pub keyword: String,
    pub type_name: String,
    pub constant: String,
    pub function_name: String,
    pub contract_name: String,
    pub identifier: String,
    pub punctuation: String,
    pub whitespace: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            container: "whitespace-pre-wrap font-mono leading-relaxed text-sm".into(),
            active: "bg-yellow-200 dark:bg-yellow-900 px-1 rounded animate-pulse".into(),
            comment: "text-green-500 italic".into(),
            string_literal: "text-yellow-400".into(),
            numeric_literal: "text-purple-400".into(),
            keyword: "text-blue-400 font-semibold".into(),
            type_name: "text-cyan-400 font-medium".into(),
            constant: "text-orange-400".into(),
            function_name: "text-amber-300".into(),
            contract_name: "text-emerald-300 font-semibold".into(),
            identifier: String::new(),
            punctuation: String::new(),
            whitespace: String::new(),
        }
    }
}

impl Theme {
    pub fn class_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Whitespace => &self.whitespace,
            TokenKind::Comment => &self.comment,
            TokenKind::StringLiteral => &self.string_literal,
            TokenKind::NumericLiteral => &self.numeric_literal,
            TokenKind::Keyword => &self.keyword,
            TokenKind::TypeName => &self.type_name,
            TokenKind::Constant => &self.constant,
            TokenKind::FunctionName => &self.function_name,
            TokenKind::ContractName => &self.contract_name,
            TokenKind::Identifier => &self.identifier,
            TokenKind::Punctuation => &self.punctuation,
        }
    }
}
