//! Tokens, spans and the literal scanners shared by the extractor and parser.
//!
//! [`tokenize`] produces a full structural token stream, which balanced block
//! extraction walks with a brace-depth counter. The property parser instead
//! drives a [`Scanner`] directly so it can test every literal form at an
//! arbitrary offset and fall back one character at a time.

/// Identifier that opens a card block.
pub const CALL_KEYWORD: &str = "flash";

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers. Spans produced by this module always fall on
    /// char boundaries of the text they were scanned from.
    #[must_use]
    pub fn slice<'a>(&self, src: &'a str) -> &'a str {
        src.get(self.start..self.end).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The `flash` identifier.
    CallKeyword,
    Ident,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Comma,
    /// Double-quoted literal; the span includes both quotes.
    Str,
    /// Backtick literal; the span includes both backticks.
    Backtick,
    /// Run of digits and dots starting with a digit.
    Number,
    /// Any other non-whitespace character, including an unterminated quote.
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Whitespace as understood by the script's original pattern syntax (`\s`).
#[must_use]
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// ASCII word character (`\w`).
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Cursor over source text. Every scan method either consumes a complete
/// match and returns it, or leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Scanner positioned at byte offset `pos`, which must be a char boundary.
    #[must_use]
    pub fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos: pos.min(src.len()) }
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        self.src
    }

    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.src.len());
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[must_use]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> Option<Span> {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        (self.pos > start).then(|| Span::new(start, self.pos))
    }

    /// One or more word characters.
    pub fn word(&mut self) -> Option<Span> {
        self.take_while(is_word_char)
    }

    /// Digits and dots, in any order.
    pub fn number(&mut self) -> Option<Span> {
        self.take_while(|c| c.is_ascii_digit() || c == '.')
    }

    /// A backtick literal closed by the next backtick. Returns the content
    /// span, which may cover raw newlines.
    pub fn backtick(&mut self) -> Option<Span> {
        let start = self.pos;
        if !self.eat('`') {
            return None;
        }
        let content_start = self.pos;
        let Some(len) = self.rest().find('`') else {
            self.pos = start;
            return None;
        };
        self.pos = content_start + len + 1;
        Some(Span::new(content_start, content_start + len))
    }

    /// A double-quoted literal. A backslash escapes the next character unless
    /// it is a line terminator. Returns the content span, escapes undecoded.
    pub fn quoted(&mut self) -> Option<Span> {
        let start = self.pos;
        if !self.eat('"') {
            return None;
        }
        let content_start = self.pos;
        loop {
            match self.bump() {
                Some('"') => return Some(Span::new(content_start, self.pos - 1)),
                Some('\\') => match self.bump() {
                    Some(c) if !is_line_terminator(c) => {}
                    _ => break,
                },
                Some(_) => {}
                None => break,
            }
        }
        self.pos = start;
        None
    }
}

/// Split the whole source into structural tokens, skipping whitespace.
#[must_use]
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut sc = Scanner::new(src);

    loop {
        sc.skip_space();
        let start = sc.pos();
        let Some(c) = sc.peek() else {
            break;
        };

        let kind = match c {
            '`' => {
                if sc.backtick().is_some() {
                    TokenKind::Backtick
                } else {
                    sc.bump();
                    TokenKind::Punct(c)
                }
            }
            '"' => {
                if sc.quoted().is_some() {
                    TokenKind::Str
                } else {
                    sc.bump();
                    TokenKind::Punct(c)
                }
            }
            c if c.is_ascii_digit() => {
                sc.number();
                TokenKind::Number
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let word = sc.word().unwrap_or(Span::new(start, start));
                if word.slice(src) == CALL_KEYWORD {
                    TokenKind::CallKeyword
                } else {
                    TokenKind::Ident
                }
            }
            _ => {
                sc.bump();
                match c {
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    ':' => TokenKind::Colon,
                    ',' => TokenKind::Comma,
                    other => TokenKind::Punct(other),
                }
            }
        };

        tokens.push(Token { kind, span: Span::new(start, sc.pos()) });
    }

    tokens
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
