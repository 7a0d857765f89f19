//! RWA Studio Highlighter
//!
//! Turns a Solidity source text and a set of "active" substrings into an
//! ordered list of [`StyledSegment`]s. The text is split into a strict
//! partition of tokens, each token is classified once, and active
//! highlighting is layered on top as a flag. Renderers decide presentation
//! per kind; no markup is produced here.
//!
//! ```text
//! (&str, &[S]) → highlight() → Vec<StyledSegment { kind, text, span, active }>
//! ```
//!
//! # Example
//!
//! ```
//! use rwa_highlight::{first_active, highlight, TokenKind};
//!
//! let segments = highlight("uint256 public maxSupply = 1000000;", &["1000000"]);
//! let idx = first_active(&segments).unwrap();
//! assert_eq!(segments[idx].text, "1000000");
//! assert_eq!(segments[idx].kind, TokenKind::NumericLiteral);
//! ```

pub mod highlight;
pub mod segment;

pub use highlight::{highlight, HighlightSet};
pub use rwa_lexer::{Span, TokenKind};
pub use segment::{first_active, reconstruct, StyledSegment};
