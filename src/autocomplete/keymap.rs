//! Key bindings for the dropdown.
//!
//! These keys only act while the dropdown is open. While it is closed every
//! key goes straight to the bound input.

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Dropdown navigation and selection bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the next row, wrapping to the first.
    pub next: Binding,
    /// Highlight the previous row, wrapping to the last.
    pub prev: Binding,
    /// Commit the highlighted row.
    pub select: Binding,
    /// Close the dropdown.
    pub close: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Arrow keys navigate, enter selects, escape closes.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next: Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
        prev: Binding::new(vec![KeyCode::Up]).with_help("↑", "prev"),
        select: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        close: Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.select, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.next, &self.prev], vec![&self.select, &self.close]]
    }
}
