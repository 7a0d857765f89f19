use crate::token::{RawToken, Shape, Span};

/// Solidity source scanner.
///
/// Splits source text into a strict partition of [`RawToken`]s: every byte
/// of the input belongs to exactly one token and no token is empty.
/// Delimiters (comments, strings, numbers, punctuation, whitespace) are
/// recognized first; whatever lies between them becomes a [`Shape::Word`].
///
/// Scanning is total. Unterminated strings and block comments run to the
/// end of input instead of producing an error.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<RawToken>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into raw tokens.
    pub fn tokenize(source: &str) -> Vec<RawToken> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    /// Scan the next token, in delimiter priority order.
    fn scan_token(&mut self) {
        let start = (self.pos, self.line, self.column);

        let shape = match self.peek() {
            '/' if self.peek_next() == '/' => {
                self.scan_line_comment();
                Shape::Comment
            }
            '/' if self.peek_next() == '*' => {
                self.scan_block_comment();
                Shape::Comment
            }
            '"' | '\'' => {
                self.scan_string();
                Shape::StringLiteral
            }
            c if c.is_ascii_digit() && self.number_len().is_some() => {
                self.scan_number();
                Shape::NumericLiteral
            }
            '{' | '}' | '(' | ')' | ';' | ',' | '[' | ']' => {
                self.advance();
                Shape::Punctuation
            }
            c if c.is_whitespace() => {
                while !self.is_at_end() && self.peek().is_whitespace() {
                    self.advance();
                }
                Shape::Whitespace
            }
            _ => {
                self.scan_word();
                Shape::Word
            }
        };

        self.emit(shape, start);
    }

    // --- Scanners ---

    /// `//` up to, not including, the line break.
    fn scan_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' && self.peek() != '\r' {
            self.advance();
        }
    }

    /// `/*` through the first `*/`, or to end of input.
    fn scan_block_comment(&mut self) {
        self.advance();
        self.advance();

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    /// Quoted string with backslash escapes. The closing quote is optional.
    fn scan_string(&mut self) {
        let quote = self.peek();
        self.advance();

        while !self.is_at_end() {
            match self.peek() {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                c if c == quote => {
                    self.advance();
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    fn scan_number(&mut self) {
        let len = self.number_len().unwrap_or(1);
        for _ in 0..len {
            self.advance();
        }
    }

    /// Everything up to the next delimiter. Always consumes at least one char.
    fn scan_word(&mut self) {
        self.advance();
        while !self.is_at_end() && !self.at_delimiter() {
            self.advance();
        }
    }

    // --- Lookahead ---

    /// Length in chars of a `digits(.digits)?` literal at the current
    /// position, honoring word boundaries on both sides.
    fn number_len(&self) -> Option<usize> {
        if !self.peek().is_ascii_digit() || self.prev().is_some_and(is_word_char) {
            return None;
        }

        let digits_from = |mut i: usize| {
            while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
            i
        };

        let int_end = digits_from(self.pos);

        if self.char_at(int_end) == Some('.')
            && self.char_at(int_end + 1).is_some_and(|c| c.is_ascii_digit())
        {
            let frac_end = digits_from(int_end + 1);
            if !self.char_at(frac_end).is_some_and(is_word_char) {
                return Some(frac_end - self.pos);
            }
        }

        if self.char_at(int_end).is_some_and(is_word_char) {
            None
        } else {
            Some(int_end - self.pos)
        }
    }

    /// Whether a delimiter token would start at the current position.
    fn at_delimiter(&self) -> bool {
        match self.peek() {
            '/' => matches!(self.peek_next(), '/' | '*'),
            '"' | '\'' | '{' | '}' | '(' | ')' | ';' | ',' | '[' | ']' => true,
            c if c.is_whitespace() => true,
            c if c.is_ascii_digit() => self.number_len().is_some(),
            _ => false,
        }
    }

    // --- Helpers ---

    fn emit(&mut self, shape: Shape, (start_pos, line, column): (usize, usize, usize)) {
        let span = Span::new(self.offset(start_pos), self.offset(self.pos), line, column);
        if !span.is_empty() {
            self.tokens.push(RawToken::new(shape, span));
        }
    }

    /// Byte offset of the char at `pos`, or the source length past the end.
    fn offset(&self, pos: usize) -> usize {
        self.chars
            .get(pos)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).map(|&(_, c)| c)
    }

    fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|p| self.char_at(p))
    }

    fn peek(&self) -> char {
        self.char_at(self.pos).unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.char_at(self.pos + 1).unwrap_or('\0')
    }

    fn advance(&mut self) {
        let Some(c) = self.char_at(self.pos) else {
            return;
        };
        self.pos += 1;
        // \r\n counts as one line break, on the \n
        if c == '\n' || (c == '\r' && self.peek() != '\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
