//! The text input an autocomplete widget binds to.
//!
//! [`Input`] is the contract the widget needs from a text-input-like
//! component: read and replace the value, feed it key presses, move focus,
//! and render it. [`Field`] is the single-line implementation shipped with the
//! crate.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_autocomplete::field::{Field, Input};
//!
//! let mut field = Field::new().with_placeholder("Search fruit...");
//! field.focus();
//! field.set_value("app");
//! assert_eq!(field.value(), "app");
//! ```

pub mod keymap;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, FieldKeyMap};
pub use model::Field;

use bubbletea_rs::KeyMsg;

/// A text-input-like component the autocomplete widget can drive.
///
/// Implementors own their value and editing behaviour. The widget only reads
/// the value after key presses, writes it on commit, and forwards focus.
pub trait Input {
    /// Current text value.
    fn value(&self) -> String;

    /// Replaces the value. This is not reported as a user edit.
    fn set_value(&mut self, value: &str);

    /// Applies a key press. Returns `true` when the value changed.
    fn handle_key(&mut self, msg: &KeyMsg) -> bool;

    /// Gives the input keyboard focus.
    fn focus(&mut self);

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the input has keyboard focus.
    fn focused(&self) -> bool;

    /// Renders the input on a single line.
    fn view(&self) -> String;
}
