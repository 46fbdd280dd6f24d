//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Checks whether a key should quit the application from any screen.
#[must_use]
pub fn is_quit_event(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}
