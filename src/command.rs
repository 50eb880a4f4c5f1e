//! Edit commands
//!
//! Every change to a [`Buffer`](crate::buffer::Buffer) goes through
//! [`Buffer::apply`](crate::buffer::Buffer::apply) with one of these.

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A single mutation of the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert one character at the cursor
    InsertChar(u8),
    /// Insert a run of characters at the cursor
    InsertString(Vec<u8>),
    /// Delete before the cursor, joining rows at column 0
    Backspace,
    /// Break the row at the cursor
    Newline,
    /// Insert a tab character
    Tab,
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Insert text that may span several rows
    PasteLines(String),
}

impl EditCommand {
    /// Build an insert command from text
    pub fn insert_str(text: &str) -> Self {
        EditCommand::InsertString(text.as_bytes().to_vec())
    }

    /// Whether this command can change the text (as opposed to the cursor)
    pub fn modifies_text(&self) -> bool {
        !matches!(self, EditCommand::MoveCursor(_))
    }
}
