#![warn(missing_docs)]

//! # bubbletea-autocomplete
//!
//! An autocomplete dropdown for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The widget attaches to a text input, shows the candidates that contain the
//! typed text as the user types, and lets the user pick one with the keyboard
//! or the mouse. Like the rest of the bubbletea ecosystem it follows the Elm
//! Architecture: feed it messages through `update()` and draw it with `view()`.
//!
//! ## Components
//!
//! - [`autocomplete::Model`]: the dropdown and its interaction state
//! - [`field::Field`]: a single-line text input the dropdown binds to, or bring
//!   your own by implementing [`field::Input`]
//! - [`key`]: type-safe key bindings used by both
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     fruit: Autocomplete,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let config = AutocompleteConfig::new()
//!             .with_list(["apple", "Banana", "grape"])
//!             .with_url("https://example.com/fruit.json");
//!         let (mut fruit, fetch) = Autocomplete::new(Field::new(), config);
//!         fruit.focus();
//!         (Self { fruit }, fetch)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.fruit.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.fruit.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for dropdown transitions and
//! candidate appends, `warn` when the remote source cannot be loaded. No
//! subscriber is installed; that is up to the application.

pub mod autocomplete;
pub mod error;
pub mod field;
pub mod key;

use bubbletea_rs::Cmd;

/// Focus management shared by the crate's components.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// let (mut ac, _) = Autocomplete::new(Field::new(), AutocompleteConfig::new());
/// assert!(!ac.focused());
///
/// ac.focus();
/// assert!(ac.focused());
///
/// ac.blur();
/// assert!(!ac.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    CandidateSet, Config as AutocompleteConfig, FetchMsg, InteractionState,
    KeyMap as AutocompleteKeyMap, Model as Autocomplete, Row, Styles as AutocompleteStyles,
};
pub use error::{Error, Result};
pub use field::{Field, FieldKeyMap, Input};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::{
        CandidateSet, Config as AutocompleteConfig, FetchMsg, InteractionState,
        KeyMap as AutocompleteKeyMap, Model as Autocomplete, Row, Styles as AutocompleteStyles,
    };
    pub use crate::field::{Field, FieldKeyMap, Input};
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::Component;
}
