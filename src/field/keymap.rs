//! Key bindings for the field.

use crate::key::{Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Editing and cursor bindings for a [`Field`](super::Field).
#[derive(Debug, Clone)]
pub struct FieldKeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
}

impl Default for FieldKeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Readline-flavoured defaults.
pub fn default_key_map() -> FieldKeyMap {
    let key = |code: KeyCode| KeyPress::from(code);
    let ctrl = |c: char| KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL));
    FieldKeyMap {
        character_forward: Binding::new(vec![key(KeyCode::Right), ctrl('f')])
            .with_help("→", "forward"),
        character_backward: Binding::new(vec![key(KeyCode::Left), ctrl('b')])
            .with_help("←", "back"),
        delete_character_backward: Binding::new(vec![
            key(KeyCode::Backspace),
            ctrl('h'),
        ])
        .with_help("backspace", "delete"),
        delete_character_forward: Binding::new(vec![key(KeyCode::Delete), ctrl('d')])
            .with_help("del", "delete forward"),
        delete_before_cursor: Binding::new(vec![ctrl('u')]).with_help("ctrl+u", "clear before"),
        delete_after_cursor: Binding::new(vec![ctrl('k')]).with_help("ctrl+k", "clear after"),
        line_start: Binding::new(vec![key(KeyCode::Home), ctrl('a')])
            .with_help("home", "line start"),
        line_end: Binding::new(vec![key(KeyCode::End), ctrl('e')])
            .with_help("end", "line end"),
    }
}
