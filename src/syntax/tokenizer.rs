//! Row tokenizer
//!
//! A pull-based scanner over the glyphs of a single row. Every language
//! shares this scanner; only the [`RuleSet`] changes. The tokens it returns
//! partition the row: concatenating their text reproduces the row, unless an
//! unrecognized character cuts the stream short with an early EOF.

use crate::row::{Glyph, Row};

use super::rules::{self, RuleSet};
use super::tokens::{Token, TokenKind};

/// Scanner state for one pass over one row
pub struct Tokenizer<'a> {
    glyphs: &'a [Glyph],
    rules: &'a RuleSet,
    /// Read cursor
    pos: usize,
    /// The row above ended inside a block comment
    continues_open_comment: bool,
    /// Sticky once the row is recognized as a preprocessor line
    directive: bool,
    /// Set when a block comment reaches the end of the row unterminated
    open: bool,
    /// Set once EOF has been returned
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a row
    pub fn new(row: &'a Row, rules: &'a RuleSet, continues_open_comment: bool) -> Self {
        Self::from_glyphs(row.glyphs(), rules, continues_open_comment)
    }

    /// Create a tokenizer over a glyph slice
    pub fn from_glyphs(glyphs: &'a [Glyph], rules: &'a RuleSet, continues_open_comment: bool) -> Self {
        Self {
            glyphs,
            rules,
            pos: 0,
            continues_open_comment,
            directive: false,
            open: false,
            finished: false,
        }
    }

    /// Whether the row ended inside an unterminated block comment
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current read position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the next token
    ///
    /// Returns an EOF token once the row is exhausted, and keeps returning it.
    pub fn next_token(&mut self) -> Token {
        if self.finished || self.at_end() {
            self.finished = true;
            return Token::eof();
        }

        if self.pos == 0 {
            // Continue a block comment left open by the row above
            if self.continues_open_comment {
                return self.read_block_comment(Vec::new());
            }

            if let Some(token) = self.read_directive() {
                return token;
            }
        }

        if self.directive {
            return Token::new(TokenKind::Macro, self.read_while(|_| true));
        }

        let Some(c) = self.peek() else {
            self.finished = true;
            return Token::eof();
        };

        if rules::is_space(c) {
            return Token::new(TokenKind::Whitespace, self.read_while(rules::is_space));
        }

        if self.starts_with(self.rules.line_comment) {
            return Token::new(TokenKind::Comment, self.read_while(|_| true));
        }

        if self.starts_with(self.rules.block_open) {
            // Only the first opener byte is taken, so `/*/` closes itself
            let opener = self.read_exact(1);
            return self.read_block_comment(opener);
        }

        if rules::is_quote(c) {
            return self.read_string(c);
        }

        if rules::is_ident_start(c) {
            return self.read_identifier();
        }

        if rules::is_special(c) {
            return Token::new(TokenKind::Special, self.read_exact(1));
        }

        if rules::is_operator(c) {
            return Token::new(TokenKind::Operator, self.read_while(rules::is_operator));
        }

        if rules::is_digit(c) {
            return Token::new(TokenKind::Constant, self.read_while(rules::is_number));
        }

        tracing::debug!(
            code = c,
            pos = self.pos,
            rules = self.rules.name,
            "unrecognized character, ending token stream"
        );
        self.finished = true;
        Token::eof()
    }

    fn peek(&self) -> Option<u8> {
        self.glyphs.get(self.pos).map(|g| g.code)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.glyphs.len()
    }

    fn starts_with(&self, pattern: &[u8]) -> bool {
        !pattern.is_empty()
            && self.glyphs[self.pos.min(self.glyphs.len())..]
                .iter()
                .map(|g| g.code)
                .take(pattern.len())
                .eq(pattern.iter().copied())
    }

    fn consume(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume up to `n` characters
    fn read_exact(&mut self, n: usize) -> Vec<u8> {
        let mut text = Vec::with_capacity(n);
        for _ in 0..n {
            match self.consume() {
                Some(c) => text.push(c),
                None => break,
            }
        }
        text
    }

    /// Consume while the predicate holds
    fn read_while(&mut self, predicate: impl Fn(u8) -> bool) -> Vec<u8> {
        let mut text = Vec::new();
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            text.push(c);
            self.pos += 1;
        }
        text
    }

    /// Recognize `#name` at the start of the row, rewinding if absent
    fn read_directive(&mut self) -> Option<Token> {
        let start = self.pos;
        let mut text = self.read_while(rules::is_space);
        if self.peek() != Some(self.rules.directive_marker) {
            self.pos = start;
            return None;
        }

        self.directive = true;
        text.extend(self.read_exact(1));
        text.extend(self.read_while(rules::is_space));
        text.extend(self.read_while(rules::is_ident));
        Some(Token::new(TokenKind::Directive, text))
    }

    /// Consume the body of a block comment, up to and including its closer
    fn read_block_comment(&mut self, mut text: Vec<u8>) -> Token {
        let close = self.rules.block_close;
        let mut closed = false;
        while !self.at_end() {
            if self.starts_with(close) {
                text.extend(self.read_exact(close.len()));
                closed = true;
                break;
            }
            text.extend(self.consume());
        }
        if !closed {
            self.open = true;
        }
        Token::new(TokenKind::Comment, text)
    }

    /// Consume a quoted literal; a backslash escapes whatever follows it
    fn read_string(&mut self, quote: u8) -> Token {
        let mut text = self.read_exact(1);
        let mut escaped = false;
        while let Some(c) = self.consume() {
            text.push(c);
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == quote {
                break;
            }
        }
        Token::new(TokenKind::String, text)
    }

    fn read_identifier(&mut self) -> Token {
        let ident = self.read_while(rules::is_ident);
        let kind = if self.rules.is_keyword(&ident) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, ident)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the EOF token
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole row, returning its tokens and whether it ends open
pub fn tokenize(row: &Row, rules: &RuleSet, continues_open_comment: bool) -> (Vec<Token>, bool) {
    let mut tokenizer = Tokenizer::new(row, rules, continues_open_comment);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    (tokens, tokenizer.is_open())
}
