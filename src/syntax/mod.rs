//! Syntax and styling module
//!
//! This module provides the highlighting machinery:
//! - Palette colors and style pairs
//! - Token kinds and the per-row tokenizer
//! - Built-in C and C++ rule-sets
//! - The incremental highlighter that keeps rows consistent across edits

mod builtin;
mod highlighter;
mod language;
mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use builtin::{CPP_RULES, C_RULES};
pub use highlighter::Highlighter;
pub use language::Language;
pub use rules::RuleSet;
pub use style::{Color, Style};
pub use tokenizer::{tokenize, Tokenizer};
pub use tokens::{Token, TokenKind};
