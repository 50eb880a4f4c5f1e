//! Rule-sets for syntax highlighting
//!
//! A rule-set is the only thing that differs between languages: the keyword
//! list and the comment and directive delimiters. Character classes are
//! shared by every rule-set.

/// Lexical rules for one language
#[derive(Debug)]
pub struct RuleSet {
    /// Language name for status display and logging
    pub name: &'static str,
    /// Reserved words, matched against whole identifiers only
    pub keywords: &'static [&'static str],
    /// Opens a comment running to the end of the row
    pub line_comment: &'static [u8],
    /// Opens a comment that may span rows
    pub block_open: &'static [u8],
    /// Closes a block comment
    pub block_close: &'static [u8],
    /// Introduces a preprocessor line when it is the first non-blank character
    pub directive_marker: u8,
}

impl RuleSet {
    /// Check if an identifier is a reserved word
    pub fn is_keyword(&self, ident: &[u8]) -> bool {
        self.keywords.iter().any(|k| k.as_bytes() == ident)
    }
}

/// Blank characters
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n')
}

/// First character of an identifier
pub fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Non-initial identifier character
pub fn is_ident(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Single-character punctuation
pub fn is_special(c: u8) -> bool {
    matches!(c, b'[' | b']' | b'{' | b'}' | b'(' | b')' | b';' | b',')
}

/// Operator character
pub fn is_operator(c: u8) -> bool {
    matches!(
        c,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'>' | b'<' | b'&' | b'|' | b'^' | b'~'
            | b'?' | b':' | b'.'
    )
}

/// First character of a numeric literal
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

/// Character allowed anywhere in a numeric literal
pub fn is_number(c: u8) -> bool {
    c.is_ascii_hexdigit() || matches!(c, b'u' | b'U' | b'l' | b'L' | b'x' | b'X' | b'+' | b'-' | b'.')
}

/// Opening quote of a string or character literal
pub fn is_quote(c: u8) -> bool {
    c == b'"' || c == b'\''
}
