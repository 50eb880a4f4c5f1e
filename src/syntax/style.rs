//! Style types for text rendering
//!
//! Styles are abstract palette tags. The editing core never resolves them to
//! real colors; that is left to whatever draws the rows.

/// The 16-color VGA text mode palette, in hardware index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    Brown,
    #[default]
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Every palette entry, indexed by its VGA attribute nibble
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::Brown,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];
}

/// Foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Style {
    /// Gray on black, the text mode power-on attribute
    pub const DEFAULT: Style = Style {
        fg: Color::Gray,
        bg: Color::Black,
    };

    /// Black on gray, used for the status bar
    pub const INVERTED: Style = Style {
        fg: Color::Black,
        bg: Color::Gray,
    };

    /// Create a style from a color pair
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}
