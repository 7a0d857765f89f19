//! RWA Studio Lexer
//!
//! Tokenizes Solidity source into a strict partition of classified tokens.
//! Scanning splits the text on delimiters (comments, strings, numbers,
//! punctuation, whitespace); classification then names every word by
//! lookup-set membership, with a one-token lookback for declared function
//! and contract names.
//!
//! ```text
//! &str → Scanner::tokenize() → Vec<RawToken> → Classifier::classify() → Vec<Token>
//! ```
//!
//! # Example
//!
//! ```
//! use rwa_lexer::{lex, TokenKind};
//!
//! let source = "contract Note {}";
//! let tokens = lex(source);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].kind, TokenKind::ContractName);
//! ```

pub mod classifier;
pub mod scanner;
pub mod token;

pub use classifier::{classify_word, Classifier};
pub use scanner::Scanner;
pub use token::{RawToken, Shape, Span, Token, TokenKind};

/// Scan and classify `source` in one pass. Never fails.
pub fn lex(source: &str) -> Vec<Token> {
    let raw = Scanner::tokenize(source);
    Classifier::classify(source, &raw)
}
