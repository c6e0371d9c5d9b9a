//! Core model for the field.

use super::keymap::{default_key_map, FieldKeyMap};
use super::Input;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// A single-line text field.
///
/// The value is kept as a vector of `char`s so the cursor can move by
/// character rather than by byte.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::field::{Field, Input};
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut field = Field::new();
/// field.focus();
///
/// let changed = field.handle_key(&KeyMsg {
///     key: KeyCode::Char('a'),
///     modifiers: KeyModifiers::NONE,
/// });
/// assert!(changed);
/// assert_eq!(field.value(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    /// Prompt shown before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style of the cursor cell.
    pub cursor_style: Style,
    /// Editing bindings.
    pub key_map: FieldKeyMap,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// Creates an empty, unfocused field with the default prompt `"> "`.
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            key_map: default_key_map(),
            value: Vec::new(),
            pos: 0,
            focus: false,
        }
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    fn insert_char(&mut self, ch: char) {
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.remove(self.pos - 1);
        self.pos -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.drain(..self.pos);
        self.pos = 0;
        true
    }

    fn delete_after_cursor(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.truncate(self.pos);
        true
    }

    /// Handles cursor movement. Never changes the value.
    fn handle_movement_keys(&mut self, msg: &KeyMsg) -> bool {
        if self.key_map.character_backward.matches(msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if self.key_map.character_forward.matches(msg) {
            self.set_cursor(self.pos + 1);
        } else if self.key_map.line_start.matches(msg) {
            self.cursor_start();
        } else if self.key_map.line_end.matches(msg) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    /// Handles deletion. Returns whether the value changed.
    fn handle_deletion_keys(&mut self, msg: &KeyMsg) -> Option<bool> {
        let changed = if self.key_map.delete_character_backward.matches(msg) {
            self.delete_backward()
        } else if self.key_map.delete_character_forward.matches(msg) {
            self.delete_forward()
        } else if self.key_map.delete_before_cursor.matches(msg) {
            self.delete_before_cursor()
        } else if self.key_map.delete_after_cursor.matches(msg) {
            self.delete_after_cursor()
        } else {
            return None;
        };
        Some(changed)
    }

    /// Inserts printable characters typed without ctrl or alt.
    fn handle_character_input(&mut self, msg: &KeyMsg) -> bool {
        match msg.key {
            KeyCode::Char(ch)
                if !msg.modifiers.contains(KeyModifiers::CONTROL)
                    && !msg.modifiers.contains(KeyModifiers::ALT)
                    && !ch.is_control() =>
            {
                self.insert_char(ch);
                true
            }
            _ => false,
        }
    }
}

impl Input for Field {
    fn value(&self) -> String {
        self.value.iter().collect()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor_end();
    }

    fn handle_key(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }
        if let Some(changed) = self.handle_deletion_keys(msg) {
            return changed;
        }
        if self.handle_movement_keys(msg) {
            return false;
        }
        self.handle_character_input(msg)
    }

    fn focus(&mut self) {
        self.focus = true;
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }

    fn view(&self) -> String {
        self.render()
    }
}
