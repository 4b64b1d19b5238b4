//! Keystrokes from the console via crossterm.

use crate::actor::{Key, KeySource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// [`KeySource`] reading the process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    /// Create a key source for the current terminal.
    pub const fn new() -> Self {
        Self
    }

    /// Convert a crossterm key event to a [`Key`].
    ///
    /// Returns `None` for releases and repeats, which some platforms report.
    pub fn convert_key(key_event: KeyEvent) -> Option<Key> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        Some(match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Interrupt
            }
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        })
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(None);
            }
        }

        // Mouse, focus, paste and resize events are not keystrokes.
        match event::read()? {
            Event::Key(key_event) => Ok(Self::convert_key(key_event)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_convert_chars() {
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::Char('>'), KeyModifiers::SHIFT)),
            Some(Key::Char('>'))
        );
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Key::Char('x'))
        );
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Key::Char('c'))
        );
    }

    #[test]
    fn test_convert_ctrl_c() {
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
    }

    #[test]
    fn test_convert_other_keys() {
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Other)
        );
        assert_eq!(
            CrosstermKeys::convert_key(press(KeyCode::F(1), KeyModifiers::NONE)),
            Some(Key::Other)
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(CrosstermKeys::convert_key(release), None);
    }
}
