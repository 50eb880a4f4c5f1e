//! BOSS - a line-oriented text buffer with incremental C/C++ highlighting
//!
//! The crate is the editing core of the `boss` editor: rows of styled
//! characters, a tokenizer per language rule-set, and a highlighter that
//! keeps colors consistent across edits spanning several rows.
//!
//! ```
//! use boss::{Buffer, EditCommand, Language};
//!
//! let mut buffer = Buffer::from_text("int x;\nint y;");
//! buffer.set_language(Some(Language::C));
//! buffer.apply(EditCommand::insert_str("/* "));
//! assert!(buffer.rows().iter().all(|row| row.is_open()));
//! ```

pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod row;
pub mod syntax;

pub use buffer::{Buffer, Cursor, Scroll};
pub use command::{Direction, EditCommand};
pub use config::Config;
pub use error::{EditorError, Result};
pub use row::{Glyph, Row};
pub use syntax::{Color, Highlighter, Language, Style, Token, TokenKind, Tokenizer};
