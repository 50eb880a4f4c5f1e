//! Editor state and main loop

use std::io;
use std::path::Path;

use boss::{Buffer, Config, EditorError, Language, Result};

use crate::display::Display;
use crate::input::{self, Action};
use crate::terminal::{TermEvent, Terminal};

/// Main editor state
pub struct EditorState {
    /// Terminal interface
    pub terminal: Terminal,
    /// The document being edited
    pub buffer: Buffer,
    /// Loaded settings
    pub config: Config,
    /// Display state
    pub display: Display,
    /// Whether editor is running
    pub running: bool,
}

impl EditorState {
    /// Create editor state with an empty buffer
    pub fn new(terminal: Terminal, config: Config) -> Self {
        Self {
            terminal,
            buffer: Buffer::new(),
            config,
            display: Display::new(),
            running: true,
        }
    }

    /// Open a file, or start a new buffer for it if it does not exist yet
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let (buffer, is_new) = load_buffer(path)?;
        self.buffer = buffer;

        let language = resolve_language(&self.config, path)?;
        self.buffer.set_language(language);

        let name = path.display();
        if is_new {
            self.display.set_message(format!("(New file) {}", name));
        } else {
            self.display
                .set_message(format!("{} ({} lines)", name, self.buffer.line_count()));
        }
        self.display.force_redraw();
        Ok(())
    }

    /// Run the main editor loop
    pub fn run(&mut self) -> Result<()> {
        self.display.force_redraw();

        while self.running {
            self.display.render(&mut self.terminal, &mut self.buffer, &self.config)?;

            let action = match self.terminal.next_event()? {
                TermEvent::Key(key_event) => input::translate_key(key_event),
                TermEvent::Paste(text) => input::translate_paste(text),
            };
            self.handle_action(action);
        }

        Ok(())
    }

    /// Perform one translated action
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Edit(command) => {
                self.display.clear_message();
                let visited = self.buffer.apply(command);
                tracing::trace!(visited, "edit applied");
            }
            Action::Save => self.save(),
            Action::Quit => self.running = false,
            Action::Ignore => {}
        }
    }

    /// Save the buffer, reporting the outcome on the message line
    fn save(&mut self) {
        match self.buffer.save() {
            Ok(()) => {
                let name = self
                    .buffer
                    .filename()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.display.set_message(format!(
                    "Wrote {} lines to {}",
                    self.buffer.line_count(),
                    name
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.display.set_message(format!("Cannot save: {}", e));
            }
        }
    }
}

/// Load `path`, or create an empty named buffer when the file is missing
///
/// The flag is set when the buffer is new.
fn load_buffer(path: &Path) -> Result<(Buffer, bool)> {
    match Buffer::from_file(path) {
        Ok(buffer) => Ok((buffer, false)),
        Err(EditorError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            let mut buffer = Buffer::new();
            buffer.set_filename(path.to_path_buf());
            Ok((buffer, true))
        }
        Err(e) => Err(e),
    }
}

/// Pick the highlighting language: the configured override wins over the
/// file extension
fn resolve_language(config: &Config, path: &Path) -> Result<Option<Language>> {
    Ok(match config.language()? {
        Some(forced) => forced,
        None => Language::from_path(path),
    })
}
