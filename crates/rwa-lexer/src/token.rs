use serde::Serialize;

/// A position in source text. `start..end` are byte offsets; `line` and
/// `column` locate the first character (both 1-based, column in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Delimiter class assigned by the scanner, before word classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Whitespace,
    Comment,
    StringLiteral,
    NumericLiteral,
    Punctuation,
    /// Any run of characters between delimiters.
    Word,
}

/// A scanner token: a shape and the slice of source it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub shape: Shape,
    pub span: Span,
}

impl RawToken {
    pub fn new(shape: Shape, span: Span) -> Self {
        Self { shape, span }
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// Final classification of a token. Every token gets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    Comment,
    StringLiteral,
    NumericLiteral,
    Keyword,
    TypeName,
    Constant,
    /// Name directly after the `function` keyword.
    #[serde(rename = "declared-function-name")]
    FunctionName,
    /// Name directly after the `contract` keyword.
    #[serde(rename = "declared-contract-name")]
    ContractName,
    Identifier,
    Punctuation,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::StringLiteral,
        TokenKind::NumericLiteral,
        TokenKind::Keyword,
        TokenKind::TypeName,
        TokenKind::Constant,
        TokenKind::FunctionName,
        TokenKind::ContractName,
        TokenKind::Identifier,
        TokenKind::Punctuation,
    ];

    /// Stable external name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::StringLiteral => "string-literal",
            TokenKind::NumericLiteral => "numeric-literal",
            TokenKind::Keyword => "keyword",
            TokenKind::TypeName => "type-name",
            TokenKind::Constant => "constant",
            TokenKind::FunctionName => "declared-function-name",
            TokenKind::ContractName => "declared-contract-name",
            TokenKind::Identifier => "identifier",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// Solidity keywords. Checked before type names and constants.
pub const KEYWORDS: &[&str] = &[
    "pragma", "solidity", "contract", "function", "modifier", "event", "struct", "enum",
    "mapping", "address", "uint256", "uint8", "bool", "string", "bytes32", "memory",
    "public", "private", "internal", "external", "view", "pure", "payable", "constant",
    "returns", "return", "if", "else", "for", "while", "require", "import", "constructor",
    "override", "virtual", "abstract", "interface", "library", "using", "is", "super",
];

/// Elementary Solidity type names.
pub const TYPE_NAMES: &[&str] = &[
    "address", "bool", "string", "bytes", "uint", "int", "fixed", "ufixed", "uint8",
    "uint16", "uint32", "uint64", "uint128", "uint256", "int8", "int16", "int32", "int64",
    "int128", "int256", "bytes1", "bytes2", "bytes4", "bytes8", "bytes16", "bytes32",
];

/// Literal constants.
pub const CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "this", "super"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_type_name(word: &str) -> bool {
    TYPE_NAMES.contains(&word)
}

pub fn is_constant(word: &str) -> bool {
    CONSTANTS.contains(&word)
}
