//! Input handling - key translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use boss::{Direction, EditCommand};

/// What a key press asks the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Edit(EditCommand),
    Save,
    Quit,
    Ignore,
}

/// Translate a crossterm key event
pub fn translate_key(event: KeyEvent) -> Action {
    // Ignore release/repeat events on platforms that report them
    if event.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            's' => Action::Save,
            'q' => Action::Quit,
            _ => Action::Ignore,
        },
        // Single-byte characters only
        KeyCode::Char(c) if !alt && (c.is_ascii_graphic() || c == ' ') => {
            Action::Edit(EditCommand::InsertChar(c as u8))
        }
        KeyCode::Enter => Action::Edit(EditCommand::Newline),
        KeyCode::Tab => Action::Edit(EditCommand::Tab),
        KeyCode::Backspace => Action::Edit(EditCommand::Backspace),
        KeyCode::Left => Action::Edit(EditCommand::MoveCursor(Direction::Left)),
        KeyCode::Right => Action::Edit(EditCommand::MoveCursor(Direction::Right)),
        KeyCode::Up => Action::Edit(EditCommand::MoveCursor(Direction::Up)),
        KeyCode::Down => Action::Edit(EditCommand::MoveCursor(Direction::Down)),
        _ => Action::Ignore,
    }
}

/// Translate a bracketed paste
pub fn translate_paste(text: String) -> Action {
    Action::Edit(EditCommand::PasteLines(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_printable_keys_insert() {
        assert_eq!(
            translate_key(key(KeyCode::Char('x'))),
            Action::Edit(EditCommand::InsertChar(b'x'))
        );
        assert_eq!(
            translate_key(key(KeyCode::Char(' '))),
            Action::Edit(EditCommand::InsertChar(b' '))
        );
        // No Unicode in the buffer
        assert_eq!(translate_key(key(KeyCode::Char('é'))), Action::Ignore);
    }

    #[test]
    fn test_control_keys() {
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let other = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(save), Action::Save);
        assert_eq!(translate_key(quit), Action::Quit);
        assert_eq!(translate_key(other), Action::Ignore);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(translate_key(key(KeyCode::Enter)), Action::Edit(EditCommand::Newline));
        assert_eq!(translate_key(key(KeyCode::Tab)), Action::Edit(EditCommand::Tab));
        assert_eq!(
            translate_key(key(KeyCode::Left)),
            Action::Edit(EditCommand::MoveCursor(Direction::Left))
        );
        assert_eq!(translate_key(key(KeyCode::F(1))), Action::Ignore);
    }

    #[test]
    fn test_paste() {
        assert_eq!(
            translate_paste("a\nb".into()),
            Action::Edit(EditCommand::PasteLines("a\nb".into()))
        );
    }
}
