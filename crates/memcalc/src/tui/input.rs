//! Keyboard input handling
//!
//! Terminal key events are named the way a browser names them, then looked up
//! in the shared [`KeyMap`]. Function keys reach the button-only actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keymap::{Action, KeyMap};

/// What a key event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a calculator operation
    Calculator(Action),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Function-key shortcuts for keypad-only actions
pub const FUNCTION_KEYS: &[(u8, Action)] = &[
    (2, Action::MemoryClear),
    (3, Action::MemoryRecall),
    (4, Action::MemoryAdd),
    (5, Action::MemorySubtract),
    (6, Action::Square),
];

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if let KeyCode::F(n) = code {
            if let Some((_, action)) = FUNCTION_KEYS.iter().find(|(f, _)| *f == n) {
                return KeyAction::Calculator(*action);
            }
        }

        key_name(code)
            .and_then(|name| KeyMap::lookup(&name))
            .map_or(KeyAction::None, KeyAction::Calculator)
    }
}

/// Browser `KeyboardEvent.key` name for a terminal key code
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".into()),
        KeyCode::Backspace => Some("Backspace".into()),
        KeyCode::Esc => Some("Escape".into()),
        KeyCode::Tab => Some("Tab".into()),
        KeyCode::F(n) => Some(format!("F{n}")),
        _ => None,
    }
}
