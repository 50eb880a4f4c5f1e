//! Row representation and glyph operations
//!
//! A row is one line of the document. Each character is stored as a
//! [`Glyph`]: a single-byte character code plus its colors. Positions are
//! glyph indices and every method clamps them to the row length.

use crate::syntax::{Color, Style};

/// A single styled character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Character code
    pub code: u8,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Glyph {
    /// Create a glyph with the default style
    pub fn new(code: u8) -> Self {
        Self::styled(code, Style::DEFAULT)
    }

    /// Create a glyph with an explicit style
    pub fn styled(code: u8, style: Style) -> Self {
        Self {
            code,
            fg: style.fg,
            bg: style.bg,
        }
    }

    /// Get the color pair of this glyph
    pub fn style(&self) -> Style {
        Style::new(self.fg, self.bg)
    }
}

/// A single line of glyphs in a buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    glyphs: Vec<Glyph>,
    /// Set when the row ends inside an unterminated block comment
    open: bool,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from raw character codes, default styled
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            glyphs: bytes.iter().map(|&code| Glyph::new(code)).collect(),
            open: false,
        }
    }

    /// Get the glyphs
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Get a glyph by index
    pub fn get(&self, idx: usize) -> Option<&Glyph> {
        self.glyphs.get(idx)
    }

    /// Iterate over the character codes
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.glyphs.iter().map(|g| g.code)
    }

    /// Copy the character codes out of the row
    pub fn to_bytes(&self) -> Vec<u8> {
        self.codes().collect()
    }

    /// Flatten the row back to plain text
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Get the length in glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the row is empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether the row ends inside an unterminated block comment
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Record the continuation state computed by the highlighter
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Insert a character at position
    pub fn insert(&mut self, idx: usize, code: u8) {
        let idx = idx.min(self.len());
        self.glyphs.insert(idx, Glyph::new(code));
    }

    /// Insert a run of characters at position, preserving their order
    pub fn insert_bytes(&mut self, idx: usize, bytes: &[u8]) {
        let idx = idx.min(self.len());
        self.glyphs
            .splice(idx..idx, bytes.iter().map(|&code| Glyph::new(code)));
    }

    /// Remove the glyph at position, returns it if it existed
    pub fn remove(&mut self, idx: usize) -> Option<Glyph> {
        if idx < self.len() {
            Some(self.glyphs.remove(idx))
        } else {
            None
        }
    }

    /// Append another row's glyphs to this row
    pub fn append(&mut self, other: Row) {
        self.glyphs.extend(other.glyphs);
    }

    /// Split the row at position, returning the right side
    pub fn split_off(&mut self, idx: usize) -> Row {
        let idx = idx.min(self.len());
        Row {
            glyphs: self.glyphs.split_off(idx),
            open: false,
        }
    }

    /// Set the foreground color of one glyph
    pub fn set_fg(&mut self, idx: usize, color: Color) {
        if let Some(glyph) = self.glyphs.get_mut(idx) {
            glyph.fg = color;
        }
    }

    /// Restore every glyph to the default style
    pub fn reset_style(&mut self) {
        for glyph in &mut self.glyphs {
            glyph.fg = Style::DEFAULT.fg;
            glyph.bg = Style::DEFAULT.bg;
        }
    }
}

impl From<&str> for Row {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<&[u8]> for Row {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
