use crate::token::{is_constant, is_keyword, is_type_name, RawToken, Shape, Token, TokenKind};

/// Declaration keyword seen as the previous significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declarator {
    Function,
    Contract,
}

/// Assigns a [`TokenKind`] to each raw token.
///
/// Delimiter shapes map directly. Words are looked up in the keyword, type
/// name and constant sets, in that order; the first hit wins. A word that
/// matches nothing is an identifier, unless the previous non-whitespace token
/// was the `function` or `contract` keyword, in which case it names the
/// declared function or contract.
pub struct Classifier<'a> {
    source: &'a str,
    declarator: Option<Declarator>,
}

impl<'a> Classifier<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            declarator: None,
        }
    }

    /// Classify a full raw token stream produced from `source`.
    pub fn classify(source: &str, raw: &[RawToken]) -> Vec<Token> {
        let mut classifier = Classifier::new(source);
        raw.iter().map(|t| classifier.next_token(t)).collect()
    }

    /// Classify one token, updating the lookback window.
    pub fn next_token(&mut self, raw: &RawToken) -> Token {
        let text = raw.text(self.source);

        let kind = match raw.shape {
            Shape::Whitespace => TokenKind::Whitespace,
            Shape::Comment => TokenKind::Comment,
            Shape::StringLiteral => TokenKind::StringLiteral,
            Shape::NumericLiteral => TokenKind::NumericLiteral,
            Shape::Punctuation => TokenKind::Punctuation,
            Shape::Word => match (classify_word(text), self.declarator) {
                (TokenKind::Identifier, Some(Declarator::Function)) => TokenKind::FunctionName,
                (TokenKind::Identifier, Some(Declarator::Contract)) => TokenKind::ContractName,
                (kind, _) => kind,
            },
        };

        // Whitespace does not break the `function name` window
        if kind != TokenKind::Whitespace {
            self.declarator = match (kind, text) {
                (TokenKind::Keyword, "function") => Some(Declarator::Function),
                (TokenKind::Keyword, "contract") => Some(Declarator::Contract),
                _ => None,
            };
        }

        Token::new(kind, raw.span)
    }
}

/// Classify a bare word by lookup-set membership alone.
pub fn classify_word(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else if is_type_name(word) {
        TokenKind::TypeName
    } else if is_constant(word) {
        TokenKind::Constant
    } else {
        TokenKind::Identifier
    }
}
