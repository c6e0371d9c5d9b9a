//! Autocomplete dropdown component.
//!
//! The widget binds to a text input and shows the candidates containing the
//! typed text (case-insensitively, sorted) in a panel below it. Arrow keys move
//! the highlight with wrap-around, enter or a mouse press commits the
//! highlighted row into the input, and escape or losing focus closes the panel.
//!
//! Candidates come from a static list, from a remote JSON endpoint fetched once
//! at construction, and from [`Model::append_candidates`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{Config, Model};
//! use bubbletea_autocomplete::field::Field;
//!
//! let config = Config::new()
//!     .with_min_chars(2)
//!     .with_list(["apple", "apricot", "banana"]);
//! let (mut ac, _cmd) = Model::new(Field::new().with_placeholder("fruit"), config);
//!
//! ac.append_candidates(["cherry"]);
//! assert_eq!(ac.filter("ap"), vec!["apple", "apricot"]);
//! ```
//!
//! # Remote candidates
//!
//! When the configuration has a `url`, [`Model::new`] also returns a command.
//! Return it from your application's `init` so the runtime runs the request;
//! the resulting [`FetchMsg`] must be passed back through [`Model::update`].
//! A failed request is logged and otherwise ignored.

pub mod candidates;
pub mod config;
pub mod fetch;
pub mod keymap;
pub mod model;
pub mod styles;
pub mod view;

#[cfg(test)]
mod tests;

pub use candidates::CandidateSet;
pub use config::Config;
pub use fetch::{fetch_candidates, fetch_cmd, FetchMsg};
pub use keymap::{default_key_map, KeyMap};
pub use model::{InteractionState, Model};
pub use styles::Styles;
pub use view::Row;
