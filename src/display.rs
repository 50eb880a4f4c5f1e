//! Screen rendering
//!
//! Layout from the top: text rows (with an optional line number gutter),
//! the status bar when enabled, and one message line at the bottom.

use boss::{Buffer, Color, Config, Glyph, Language, Result, Row, Style};

use crate::terminal::Terminal;

/// Width of the line number gutter, separator included
const GUTTER_WIDTH: usize = 8;

const GUTTER_STYLE: Style = Style {
    fg: Color::DarkGray,
    bg: Color::Black,
};

/// Marker style for screen rows past the end of the document
const FILLER_STYLE: Style = Style {
    fg: Color::DarkBlue,
    bg: Color::Black,
};

/// Screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Text rows on screen
    text_rows: usize,
    /// Columns left of the text
    gutter: usize,
    /// Columns available for text
    text_cols: usize,
    /// Screen row of the status bar, if shown
    status_row: Option<usize>,
    /// Screen row of the message line
    message_row: usize,
    width: usize,
}

impl Layout {
    fn new(width: usize, height: usize, config: &Config) -> Self {
        let message_row = height.saturating_sub(1);
        let status_row = config.status_bar.then(|| message_row.saturating_sub(1));
        let text_rows = status_row.unwrap_or(message_row).max(1);
        let gutter = if config.show_line_numbers { GUTTER_WIDTH } else { 0 };
        Self {
            text_rows,
            gutter,
            text_cols: width.saturating_sub(gutter).max(1),
            status_row,
            message_row,
            width,
        }
    }
}

/// Display state
pub struct Display {
    /// Whether the screen must be blanked before the next frame
    needs_clear: bool,
    /// Message to show on the bottom line
    message: Option<String>,
}

impl Display {
    pub fn new() -> Self {
        Self {
            needs_clear: true,
            message: None,
        }
    }

    pub fn force_redraw(&mut self) {
        self.needs_clear = true;
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Draw one frame, scrolling the buffer first so the cursor is visible
    pub fn render(&mut self, term: &mut Terminal, buffer: &mut Buffer, config: &Config) -> Result<()> {
        let layout = Layout::new(term.width() as usize, term.height() as usize, config);
        buffer.scroll_to_cursor(layout.text_rows, layout.text_cols);

        term.show_cursor(false)?;
        if std::mem::take(&mut self.needs_clear) {
            term.clear_all()?;
        }

        let scroll = buffer.scroll();
        for screen_row in 0..layout.text_rows {
            let line_idx = scroll.y + screen_row;
            term.goto(0, screen_row as u16)?;

            match buffer.row(line_idx) {
                Some(row) => {
                    if layout.gutter > 0 {
                        term.paint(GUTTER_STYLE, &gutter_label(line_idx))?;
                    }
                    draw_row(term, row, scroll.x, layout.text_cols, config.tab_width)?;
                }
                None => {
                    term.print(&" ".repeat(layout.gutter))?;
                    term.paint(FILLER_STYLE, "~")?;
                }
            }
            term.clear_line_rest()?;
        }

        if let Some(row) = layout.status_row {
            term.goto(0, row as u16)?;
            term.paint(Style::INVERTED, &status_line(buffer, layout.width))?;
        }

        term.goto(0, layout.message_row as u16)?;
        if let Some(msg) = &self.message {
            let shown: String = msg.chars().take(layout.width).collect();
            term.print(&shown)?;
        }
        term.clear_line_rest()?;

        let (col, row) = cursor_cell(buffer, &layout, config.tab_width);
        term.goto(col as u16, row as u16)?;
        term.show_cursor(true)?;
        term.present()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the glyphs of `row` from slot `first_slot`, at most `max_cols` wide
fn draw_row(term: &mut Terminal, row: &Row, first_slot: usize, max_cols: usize, tab_width: usize) -> Result<()> {
    let glyphs = row.glyphs();
    let origin = display_col(glyphs, first_slot, tab_width);
    let mut col = origin;

    for glyph in glyphs.iter().skip(first_slot) {
        let width = glyph_width(glyph.code, col, tab_width);
        if col + width - origin > max_cols {
            break;
        }
        let cell = if glyph.code == b'\t' {
            " ".repeat(width)
        } else {
            printable(glyph.code).to_string()
        };
        term.paint(glyph.style(), &cell)?;
        col += width;
    }
    Ok(())
}

/// Screen cell of the buffer cursor
fn cursor_cell(buffer: &Buffer, layout: &Layout, tab_width: usize) -> (usize, usize) {
    let cursor = buffer.cursor();
    let scroll = buffer.scroll();
    let (col, origin) = buffer.row(cursor.y).map_or((0, 0), |row| {
        (
            display_col(row.glyphs(), cursor.x, tab_width),
            display_col(row.glyphs(), scroll.x, tab_width),
        )
    });

    let screen_col = (layout.gutter + col.saturating_sub(origin)).min(layout.width.saturating_sub(1));
    let screen_row = cursor.y.saturating_sub(scroll.y);
    (screen_col, screen_row)
}

/// Right-aligned line number followed by a separator space
fn gutter_label(line_idx: usize) -> String {
    format!("{:>width$} ", line_idx + 1, width = GUTTER_WIDTH - 1)
}

/// Column of the next tab stop after `col`
fn next_tab_stop(col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    (col / tab_width) * tab_width + tab_width
}

fn glyph_width(code: u8, col: usize, tab_width: usize) -> usize {
    if code == b'\t' {
        next_tab_stop(col, tab_width) - col
    } else {
        1
    }
}

/// Screen column, counted from the start of the row, of glyph slot `slot`
fn display_col(glyphs: &[Glyph], slot: usize, tab_width: usize) -> usize {
    glyphs
        .iter()
        .take(slot)
        .fold(0, |col, glyph| col + glyph_width(glyph.code, col, tab_width))
}

/// Character drawn for a code; control and high bytes become `?`
fn printable(code: u8) -> char {
    if code.is_ascii_graphic() || code == b' ' {
        code as char
    } else {
        '?'
    }
}

/// Status bar text: `FILE (lang)` on the left, position on the right
fn status_line(buffer: &Buffer, width: usize) -> String {
    let name = buffer
        .filename()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let modified = if buffer.is_modified() { " [+]" } else { "" };
    let left = format!(" {}{} ({})", name, modified, Language::abbrev_of(buffer.language()));

    let cursor = buffer.cursor();
    let right = format!("Ln {}/{}, Col {} ", cursor.y + 1, buffer.line_count(), cursor.x + 1);

    let mut line: String = left.chars().take(width).collect();
    let used = line.chars().count();
    if used + right.len() < width {
        line.push_str(&" ".repeat(width - used - right.len()));
        line.push_str(&right);
    } else {
        line.push_str(&" ".repeat(width - used));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tab_stops() {
        assert_eq!(next_tab_stop(0, 4), 4);
        assert_eq!(next_tab_stop(3, 4), 4);
        assert_eq!(next_tab_stop(4, 4), 8);
        assert_eq!(next_tab_stop(5, 8), 8);
    }

    #[test]
    fn test_display_col_expands_tabs() {
        let row = Row::from("\tab\tc");
        assert_eq!(display_col(row.glyphs(), 0, 4), 0);
        assert_eq!(display_col(row.glyphs(), 1, 4), 4);
        assert_eq!(display_col(row.glyphs(), 3, 4), 6);
        assert_eq!(display_col(row.glyphs(), 4, 4), 8);
        assert_eq!(display_col(row.glyphs(), 5, 4), 9);
        assert_eq!(display_col(row.glyphs(), 99, 4), 9);
    }

    #[test]
    fn test_gutter_label() {
        assert_eq!(gutter_label(0), "      1 ");
        assert_eq!(gutter_label(0).len(), GUTTER_WIDTH);
        assert_eq!(gutter_label(1233), "   1234 ");
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable(b'a'), 'a');
        assert_eq!(printable(b' '), ' ');
        assert_eq!(printable(0x07), '?');
        assert_eq!(printable(0xE9), '?');
    }

    #[test]
    fn test_layout() {
        let layout = Layout::new(80, 25, &Config::default());
        assert_eq!(layout.text_rows, 23);
        assert_eq!(layout.status_row, Some(23));
        assert_eq!(layout.message_row, 24);
        assert_eq!(layout.text_cols, 72);

        let bare = Config {
            show_line_numbers: false,
            status_bar: false,
            ..Config::default()
        };
        let layout = Layout::new(80, 25, &bare);
        assert_eq!(layout.text_rows, 24);
        assert_eq!(layout.status_row, None);
        assert_eq!(layout.text_cols, 80);
    }

    #[test]
    fn test_cursor_cell_accounts_for_tabs_and_gutter() {
        let mut buffer = Buffer::from_text("\tx = 1;");
        buffer.set_cursor(2, 0);
        let layout = Layout::new(80, 25, &Config::default());
        buffer.scroll_to_cursor(layout.text_rows, layout.text_cols);
        assert_eq!(cursor_cell(&buffer, &layout, 4), (GUTTER_WIDTH + 5, 0));
    }

    #[test]
    fn test_status_line() {
        let mut buffer = Buffer::from_text("int x;\nint y;");
        buffer.set_filename(PathBuf::from("main.c"));
        buffer.set_language(Some(Language::C));
        buffer.set_cursor(3, 1);

        let line = status_line(&buffer, 40);
        assert_eq!(line.len(), 40);
        assert!(line.starts_with(" main.c (c)"));
        assert!(line.ends_with("Ln 2/2, Col 4 "));
    }

    #[test]
    fn test_status_line_narrow_terminal() {
        let buffer = Buffer::new();
        assert_eq!(status_line(&buffer, 8), " [No Nam");
    }
}
