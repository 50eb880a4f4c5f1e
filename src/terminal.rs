//! Raw-mode screen and event source on top of crossterm

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent},
    execute, queue,
    style::{self, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use boss::{Color, Result, Style};
#[cfg(test)]
use boss::EditorError;

/// Input the editor reacts to
#[derive(Debug)]
pub enum TermEvent {
    Key(KeyEvent),
    Paste(String),
}

/// The screen, in raw mode on the alternate buffer while this value lives
///
/// Drawing calls are queued and reach the terminal on [`Terminal::present`].
pub struct Terminal {
    out: BufWriter<Stdout>,
    width: u16,
    height: u16,
}

impl Terminal {
    /// Switch the terminal into editing mode
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        // No value exists yet for Drop to restore from
        undo_on_error(Self::setup(), || {
            let _ = terminal::disable_raw_mode();
        })
    }

    fn setup() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let mut out = BufWriter::new(io::stdout());
        execute!(out, EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(Self { out, width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the whole screen
    pub fn clear_all(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Blank from the draw position to the end of its line
    pub fn clear_line_rest(&mut self) -> Result<()> {
        queue!(self.out, style::ResetColor, terminal::Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// Move the draw position to screen cell (`col`, `row`)
    pub fn goto(&mut self, col: u16, row: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))?;
        Ok(())
    }

    /// Draw text in the given colors
    pub fn paint(&mut self, style: Style, text: &str) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(to_crossterm(style.fg)),
            SetBackgroundColor(to_crossterm(style.bg)),
            Print(text)
        )?;
        Ok(())
    }

    /// Draw text in the terminal's own colors
    pub fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.out, style::ResetColor, Print(text))?;
        Ok(())
    }

    pub fn show_cursor(&mut self, visible: bool) -> Result<()> {
        if visible {
            queue!(self.out, cursor::Show)?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }
        Ok(())
    }

    /// Send everything queued so far
    pub fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Block until a key press or a paste arrives, tracking resizes meanwhile
    pub fn next_event(&mut self) -> Result<TermEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => return Ok(TermEvent::Key(key)),
                Event::Paste(text) => return Ok(TermEvent::Paste(text)),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    self.width = width;
                    self.height = height;
                }
                _ => {}
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            style::ResetColor,
            DisableBracketedPaste,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run `undo` when `result` is an error, then pass the result on
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Resolve a palette tag to a terminal color
fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::DarkRed => style::Color::DarkRed,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::Brown => style::Color::DarkYellow,
        Color::Gray => style::Color::Grey,
        Color::DarkGray => style::Color::DarkGrey,
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Red => style::Color::Red,
        Color::Magenta => style::Color::Magenta,
        Color::Yellow => style::Color::Yellow,
        Color::White => style::Color::White,
    }
}
