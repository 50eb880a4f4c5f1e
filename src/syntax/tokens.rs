//! Token types for syntax highlighting
//!
//! This module defines the lexical categories produced by the tokenizer
//! and the fixed palette color each one is painted with.

use super::style::Color;

/// Lexical categories recognized by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the row, or an unrecognized character
    Eof,
    /// Reserved word of the active rule-set
    Keyword,
    /// Any other identifier
    Identifier,
    /// Numeric literal
    Constant,
    /// String or character literal
    String,
    /// Brackets, braces, parens, semicolons and commas
    Special,
    /// Run of operator characters
    Operator,
    /// Line or block comment
    Comment,
    /// Preprocessor directive keyword (`#include`, `#define`)
    Directive,
    /// Everything after a directive keyword
    Macro,
    /// Run of blanks
    Whitespace,
}

impl TokenKind {
    /// Get the foreground color for this token kind
    pub fn color(self) -> Color {
        match self {
            TokenKind::Eof => Color::Gray,
            TokenKind::Keyword => Color::White,
            TokenKind::Identifier => Color::Gray,
            TokenKind::Constant => Color::Blue,
            TokenKind::String => Color::Blue,
            TokenKind::Special => Color::DarkGreen,
            TokenKind::Operator => Color::DarkCyan,
            TokenKind::Comment => Color::Red,
            TokenKind::Directive => Color::Cyan,
            TokenKind::Macro => Color::DarkCyan,
            TokenKind::Whitespace => Color::Gray,
        }
    }

    /// Get a human-readable name for this token kind
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Constant => "Constant",
            TokenKind::String => "String",
            TokenKind::Special => "Special",
            TokenKind::Operator => "Operator",
            TokenKind::Comment => "Comment",
            TokenKind::Directive => "Directive",
            TokenKind::Macro => "Macro",
            TokenKind::Whitespace => "Whitespace",
        }
    }
}

/// A classified run of characters from one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Vec<u8>,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, text: Vec<u8>) -> Self {
        Self { kind, text }
    }

    /// The end-of-row token
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, Vec::new())
    }

    /// Check if this token ends the stream
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Number of characters covered by this token
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token covers no characters
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Token text as a string, for diagnostics and tests
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}
