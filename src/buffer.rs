//! Buffer representation - rows of styled text with a cursor
//!
//! The buffer owns its rows and keeps their highlighting consistent: every
//! edit made through [`Buffer::apply`] re-runs the highlighter on the rows
//! whose tokenizer input could have changed.

use std::path::{Path, PathBuf};

use crate::command::{Direction, EditCommand};
use crate::error::{EditorError, Result};
use crate::row::Row;
use crate::syntax::{Highlighter, Language};

/// Cursor position; `y` is the row index, `x` the glyph slot within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// Scroll offsets of the visible window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    pub x: usize,
    pub y: usize,
}

/// A buffer containing rows and editing state
#[derive(Debug)]
pub struct Buffer {
    /// Rows of text, never empty
    rows: Vec<Row>,
    cursor: Cursor,
    scroll: Scroll,
    highlighter: Highlighter,
    /// Associated file path (None for unnamed buffers)
    filename: Option<PathBuf>,
    /// Whether buffer has unsaved changes
    modified: bool,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_rows(vec![Row::new()])
    }

    fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            cursor: Cursor::default(),
            scroll: Scroll::default(),
            highlighter: Highlighter::default(),
            filename: None,
            modified: false,
        }
    }

    /// Create a buffer from newline-separated text
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a buffer from newline-separated raw bytes
    ///
    /// A trailing newline does not produce an extra empty row and `\r\n`
    /// line endings are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
        if bytes.ends_with(b"\n") {
            lines.pop();
        }
        Self::from_lines(lines.into_iter().map(|l| l.strip_suffix(b"\r").unwrap_or(l)))
    }

    /// Create a buffer from individual lines
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut rows: Vec<Row> = lines.into_iter().map(|l| Row::from_bytes(l.as_ref())).collect();
        // Ensure at least one row
        if rows.is_empty() {
            rows.push(Row::new());
        }
        Self::from_rows(rows)
    }

    /// Create a buffer from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read(path)?;
        let mut buffer = Self::from_bytes(&content);
        buffer.filename = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), rows = buffer.line_count(), "loaded file");
        Ok(buffer)
    }

    /// Get filename if set
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Set the filename
    pub fn set_filename(&mut self, path: PathBuf) {
        self.filename = Some(path);
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Get number of rows
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Get all rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor, clamped to the document
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor = Cursor { x, y };
        self.clamp_cursor();
    }

    /// Get the scroll offsets
    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    /// Set the scroll offsets; keeping the cursor visible is up to the caller
    pub fn set_scroll(&mut self, x: usize, y: usize) {
        self.scroll = Scroll { x, y };
    }

    /// Adjust the scroll offsets so the cursor lies inside a window of
    /// `view_rows` rows by `view_cols` glyph slots
    pub fn scroll_to_cursor(&mut self, view_rows: usize, view_cols: usize) {
        let Cursor { x, y } = self.cursor;
        let view_rows = view_rows.max(1);
        let view_cols = view_cols.max(1);

        if y < self.scroll.y {
            self.scroll.y = y;
        } else if y >= self.scroll.y + view_rows {
            self.scroll.y = y + 1 - view_rows;
        }
        if x < self.scroll.x {
            self.scroll.x = x;
        } else if x >= self.scroll.x + view_cols {
            self.scroll.x = x + 1 - view_cols;
        }
    }

    /// Get the active language
    pub fn language(&self) -> Option<Language> {
        self.highlighter.language()
    }

    /// Change the active language and re-highlight the whole document
    pub fn set_language(&mut self, language: Option<Language>) {
        tracing::debug!(language = language.map(Language::name), "setting language");
        self.highlighter.set_language(language);
        self.highlighter.refresh_all(&mut self.rows);
    }

    /// Re-highlight a row, cascading downwards while its state changes
    ///
    /// Returns the number of rows re-tokenized.
    pub fn update(&mut self, row_index: usize) -> usize {
        self.highlighter.update(&mut self.rows, row_index)
    }

    /// Flatten the buffer to bytes, rows separated by `\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend(row.codes());
        }
        out
    }

    /// Flatten the buffer to text
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Write buffer to its file
    pub fn save(&mut self) -> Result<()> {
        let path = self.filename.clone().ok_or(EditorError::NoFilename)?;
        self.write_to(&path)?;
        self.modified = false;
        Ok(())
    }

    /// Write buffer to specific path
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes())?;
        tracing::debug!(path = %path.display(), rows = self.line_count(), "wrote file");
        Ok(())
    }

    /// Apply an edit command
    ///
    /// After the edit the cursor is clamped and the rows above, at and below
    /// the cursor are re-highlighted. Returns the number of rows re-tokenized.
    pub fn apply(&mut self, command: EditCommand) -> usize {
        tracing::trace!(?command, cursor = ?self.cursor, "applying edit");

        let modifies = command.modifies_text();
        let applied = match command {
            EditCommand::InsertChar(code) => self.insert_bytes(&[code]),
            EditCommand::InsertString(bytes) => self.insert_bytes(&bytes),
            EditCommand::Tab => self.insert_bytes(b"\t"),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Newline => self.newline(),
            EditCommand::MoveCursor(direction) => self.move_cursor(direction),
            EditCommand::PasteLines(text) => self.paste_lines(&text),
        };

        if !applied {
            return 0;
        }
        if modifies {
            self.modified = true;
        }

        self.clamp_cursor();
        let y = self.cursor.y;
        let mut visited = 0;
        if let Some(above) = y.checked_sub(1) {
            visited += self.update(above);
        }
        visited += self.update(y);
        visited += self.update(y + 1);
        visited
    }

    fn insert_bytes(&mut self, bytes: &[u8]) -> bool {
        let Cursor { x, y } = self.cursor;
        let Some(row) = self.rows.get_mut(y) else {
            return false;
        };
        row.insert_bytes(x, bytes);
        self.cursor.x = x.min(row.len()) + bytes.len();
        true
    }

    fn backspace(&mut self) -> bool {
        let Cursor { x, y } = self.cursor;
        if y == 0 && x == 0 {
            return false;
        }
        let Some(row) = self.rows.get_mut(y) else {
            return false;
        };

        if row.is_empty() {
            // Drop the empty row and land at the end of the one above
            self.rows.remove(y);
            self.cursor.y = y - 1;
            self.cursor.x = self.rows[y - 1].len();
        } else if x == 0 {
            // Join onto the row above, cursor at the old boundary
            let current = self.rows.remove(y);
            let above = &mut self.rows[y - 1];
            self.cursor.x = above.len();
            above.append(current);
            self.cursor.y = y - 1;
        } else {
            row.remove(x - 1);
            self.cursor.x = x - 1;
        }
        true
    }

    fn newline(&mut self) -> bool {
        let Cursor { x, y } = self.cursor;
        let Some(row) = self.rows.get_mut(y) else {
            return false;
        };

        if x == 0 {
            // New row above, cursor follows its row down
            self.rows.insert(y, Row::new());
        } else if x >= row.len() {
            self.rows.insert(y + 1, Row::new());
        } else {
            let right = row.split_off(x);
            self.rows.insert(y + 1, right);
        }
        self.cursor = Cursor { x: 0, y: y + 1 };
        true
    }

    fn move_cursor(&mut self, direction: Direction) -> bool {
        let Cursor { x, y } = self.cursor;
        match direction {
            Direction::Left => {
                if x > 0 {
                    self.cursor.x = x - 1;
                } else if y > 0 {
                    self.cursor.y = y - 1;
                    self.cursor.x = self.row_len(y - 1);
                }
            }
            Direction::Right => {
                if x < self.row_len(y) {
                    self.cursor.x = x + 1;
                } else if y + 1 < self.rows.len() {
                    self.cursor = Cursor { x: 0, y: y + 1 };
                }
            }
            Direction::Up => self.cursor.y = y.saturating_sub(1),
            Direction::Down => self.cursor.y = y + 1,
        }
        true
    }

    fn paste_lines(&mut self, text: &str) -> bool {
        let mut lines = text.lines();
        let Some(first) = lines.next() else {
            return false;
        };
        if !self.insert_bytes(first.as_bytes()) {
            return false;
        }

        let mut rest = lines.peekable();
        if rest.peek().is_none() {
            return true;
        }

        let mut y = self.cursor.y;
        self.update(y);
        for line in rest {
            y += 1;
            self.rows.insert(y, Row::from(line));
            self.update(y);
        }
        self.cursor = Cursor {
            x: self.rows[y].len(),
            y,
        };
        true
    }

    fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Row::len)
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(Row::new());
        }
        self.cursor.y = self.cursor.y.min(self.rows.len() - 1);
        self.cursor.x = self.cursor.x.min(self.rows[self.cursor.y].len());
        // A scroll past the last row would show an empty window
        self.scroll.y = self.scroll.y.min(self.cursor.y);
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buffer: &Buffer) -> Vec<String> {
        buffer.rows().iter().map(Row::to_text).collect()
    }

    fn cursor(buffer: &Buffer) -> (usize, usize) {
        let c = buffer.cursor();
        (c.x, c.y)
    }

    #[test]
    fn test_new_buffer_has_one_row() {
        let buffer = Buffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(cursor(&buffer), (0, 0));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_from_text() {
        assert_eq!(lines(&Buffer::from_text("a\nb\n")), vec!["a", "b"]);
        assert_eq!(lines(&Buffer::from_text("a\r\nb")), vec!["a", "b"]);
        assert_eq!(lines(&Buffer::from_text("")), vec![""]);
        assert_eq!(lines(&Buffer::from_text("\n")), vec![""]);
        assert_eq!(lines(&Buffer::from_text("a\n\nb")), vec!["a", "", "b"]);
        assert_eq!(Buffer::from_text("x\ny").to_text(), "x\ny");
    }

    #[test]
    fn test_insert_char_and_string() {
        let mut buffer = Buffer::from_text("ac");
        buffer.set_cursor(1, 0);
        buffer.apply(EditCommand::InsertChar(b'b'));
        assert_eq!(lines(&buffer), vec!["abc"]);
        assert_eq!(cursor(&buffer), (2, 0));

        buffer.apply(EditCommand::insert_str("XY"));
        assert_eq!(lines(&buffer), vec!["abXYc"]);
        assert_eq!(cursor(&buffer), (4, 0));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_tab() {
        let mut buffer = Buffer::from_text("x");
        buffer.apply(EditCommand::Tab);
        assert_eq!(lines(&buffer), vec!["\tx"]);
        assert_eq!(cursor(&buffer), (1, 0));
    }

    #[test]
    fn test_newline_splits_row() {
        let mut buffer = Buffer::from_text("Hello World");
        buffer.set_cursor(6, 0);
        buffer.apply(EditCommand::Newline);
        assert_eq!(lines(&buffer), vec!["Hello ", "World"]);
        assert_eq!(cursor(&buffer), (0, 1));
    }

    #[test]
    fn test_newline_at_row_edges() {
        let mut buffer = Buffer::from_text("abc");
        buffer.apply(EditCommand::Newline);
        assert_eq!(lines(&buffer), vec!["", "abc"]);
        assert_eq!(cursor(&buffer), (0, 1));

        buffer.set_cursor(3, 1);
        buffer.apply(EditCommand::Newline);
        assert_eq!(lines(&buffer), vec!["", "abc", ""]);
        assert_eq!(cursor(&buffer), (0, 2));
    }

    #[test]
    fn test_backspace_deletes_character() {
        let mut buffer = Buffer::from_text("abc");
        buffer.set_cursor(2, 0);
        buffer.apply(EditCommand::Backspace);
        assert_eq!(lines(&buffer), vec!["ac"]);
        assert_eq!(cursor(&buffer), (1, 0));
    }

    #[test]
    fn test_backspace_joins_rows() {
        let mut buffer = Buffer::from_text("ab\ncd");
        buffer.set_cursor(0, 1);
        buffer.apply(EditCommand::Backspace);
        assert_eq!(lines(&buffer), vec!["abcd"]);
        assert_eq!(cursor(&buffer), (2, 0));
    }

    #[test]
    fn test_backspace_removes_empty_row() {
        let mut buffer = Buffer::from_text("abc\n\nxyz");
        buffer.set_cursor(0, 1);
        buffer.apply(EditCommand::Backspace);
        assert_eq!(lines(&buffer), vec!["abc", "xyz"]);
        assert_eq!(cursor(&buffer), (3, 0));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buffer = Buffer::from_text("abc");
        assert_eq!(buffer.apply(EditCommand::Backspace), 0);
        assert_eq!(lines(&buffer), vec!["abc"]);
        assert!(!buffer.is_modified());

        let mut buffer = Buffer::new();
        buffer.apply(EditCommand::Backspace);
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_cursor_movement_wraps() {
        let mut buffer = Buffer::from_text("ab\nc");
        buffer.set_cursor(0, 1);
        buffer.apply(EditCommand::MoveCursor(Direction::Left));
        assert_eq!(cursor(&buffer), (2, 0));

        buffer.apply(EditCommand::MoveCursor(Direction::Right));
        assert_eq!(cursor(&buffer), (0, 1));

        buffer.apply(EditCommand::MoveCursor(Direction::Right));
        buffer.apply(EditCommand::MoveCursor(Direction::Right));
        assert_eq!(cursor(&buffer), (1, 1));

        buffer.set_cursor(0, 0);
        buffer.apply(EditCommand::MoveCursor(Direction::Left));
        assert_eq!(cursor(&buffer), (0, 0));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_vertical_movement_clamps() {
        let mut buffer = Buffer::from_text("abcdef\nxy");
        buffer.set_cursor(5, 0);
        buffer.apply(EditCommand::MoveCursor(Direction::Down));
        assert_eq!(cursor(&buffer), (2, 1));
        buffer.apply(EditCommand::MoveCursor(Direction::Down));
        assert_eq!(cursor(&buffer), (2, 1));
        buffer.apply(EditCommand::MoveCursor(Direction::Up));
        buffer.apply(EditCommand::MoveCursor(Direction::Up));
        assert_eq!(cursor(&buffer), (2, 0));
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buffer = Buffer::from_text("abc\nd");
        buffer.set_cursor(10, 10);
        assert_eq!(cursor(&buffer), (1, 1));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let text: Vec<String> = (0..50).map(|i| format!("line {}", i)).collect();
        let mut buffer = Buffer::from_lines(&text);
        buffer.set_cursor(3, 30);
        buffer.scroll_to_cursor(10, 80);
        assert_eq!(buffer.scroll(), Scroll { x: 0, y: 21 });

        buffer.set_cursor(0, 5);
        buffer.scroll_to_cursor(10, 80);
        assert_eq!(buffer.scroll(), Scroll { x: 0, y: 5 });

        buffer.set_cursor(6, 5);
        buffer.scroll_to_cursor(10, 4);
        assert_eq!(buffer.scroll(), Scroll { x: 3, y: 5 });
    }

    #[test]
    fn test_edit_clamps_scroll() {
        let mut buffer = Buffer::from_text("a\nb\nc");
        buffer.set_scroll(0, 2);
        buffer.set_cursor(0, 1);
        buffer.apply(EditCommand::MoveCursor(Direction::Up));
        assert_eq!(buffer.scroll().y, 0);
    }

    #[test]
    fn test_paste_single_line() {
        let mut buffer = Buffer::from_text("ad");
        buffer.set_cursor(1, 0);
        buffer.apply(EditCommand::PasteLines("bc".into()));
        assert_eq!(lines(&buffer), vec!["abcd"]);
        assert_eq!(cursor(&buffer), (3, 0));
    }

    #[test]
    fn test_paste_multiple_lines() {
        let mut buffer = Buffer::from_text("abc");
        buffer.set_cursor(1, 0);
        buffer.apply(EditCommand::PasteLines("X\nYZ".into()));
        assert_eq!(lines(&buffer), vec!["aXbc", "YZ"]);
        assert_eq!(cursor(&buffer), (2, 1));
    }

    #[test]
    fn test_paste_empty_is_noop() {
        let mut buffer = Buffer::from_text("abc");
        assert_eq!(buffer.apply(EditCommand::PasteLines(String::new())), 0);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_edits_keep_highlighting_consistent() {
        let mut buffer = Buffer::from_text("a\nb\nc");
        buffer.set_language(Some(Language::C));
        buffer.apply(EditCommand::insert_str("/*"));
        let open: Vec<bool> = buffer.rows().iter().map(Row::is_open).collect();
        assert_eq!(open, vec![true, true, true]);

        buffer.set_cursor(0, 1);
        buffer.apply(EditCommand::insert_str("*/"));
        let open: Vec<bool> = buffer.rows().iter().map(Row::is_open).collect();
        assert_eq!(open, vec![true, false, false]);
    }

    #[test]
    fn test_join_reseeds_row_below() {
        let mut buffer = Buffer::from_text("x\n/* a\nb */\nc");
        buffer.set_language(Some(Language::C));
        let open: Vec<bool> = buffer.rows().iter().map(Row::is_open).collect();
        assert_eq!(open, vec![false, true, false, false]);

        // Joining "b */" onto "/* a" closes the comment within one row
        buffer.set_cursor(0, 2);
        buffer.apply(EditCommand::Backspace);
        assert_eq!(lines(&buffer), vec!["x", "/* ab */", "c"]);
        let open: Vec<bool> = buffer.rows().iter().map(Row::is_open).collect();
        assert_eq!(open, vec![false, false, false]);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.c");
        std::fs::write(&path, "int main() {\n\treturn 0;\n}\n").unwrap();

        let mut buffer = Buffer::from_file(&path).unwrap();
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.filename(), Some(path.as_path()));

        buffer.set_cursor(0, 2);
        buffer.apply(EditCommand::insert_str("// end"));
        buffer.apply(EditCommand::Newline);
        buffer.save().unwrap();
        assert!(!buffer.is_modified());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "int main() {\n\treturn 0;\n// end\n}"
        );
    }

    #[test]
    fn test_save_without_filename() {
        let mut buffer = Buffer::new();
        assert!(matches!(buffer.save(), Err(EditorError::NoFilename)));
    }
}
