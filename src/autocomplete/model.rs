//! The interaction controller.

use super::candidates::CandidateSet;
use super::config::Config;
use super::fetch::{fetch_cmd, FetchMsg};
use super::keymap::{default_key_map, KeyMap};
use super::styles::Styles;
use crate::field::{Field, Input};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg};
use crossterm::event::{MouseButton, MouseEventKind};
use std::sync::atomic::{AtomicI64, Ordering};

/// Global counter for widget instance ids.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Open/closed state of the dropdown and which row is highlighted.
///
/// `highlighted` is always `None` while closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Whether the results panel is shown.
    pub open: bool,
    /// Highlighted row, if any.
    pub highlighted: Option<usize>,
}

/// An autocomplete dropdown bound to a text input.
///
/// The widget owns its input. Key messages go to the dropdown first while it
/// is open; everything else is forwarded to the input, and any change to the
/// input's value re-filters the candidates.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{Config, Model};
/// use bubbletea_autocomplete::field::{Field, Input};
/// use bubbletea_autocomplete::Component;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let config = Config::new().with_list(["apple", "Banana", "grape"]);
/// let (mut ac, cmd) = Model::new(Field::new(), config);
/// assert!(cmd.is_none());
/// ac.focus();
///
/// let key = |key| KeyMsg { key, modifiers: KeyModifiers::NONE };
/// ac.handle_key(&key(KeyCode::Char('a')));
/// ac.handle_key(&key(KeyCode::Char('n')));
/// assert_eq!(ac.results(), ["Banana"]);
///
/// ac.handle_key(&key(KeyCode::Down));
/// ac.handle_key(&key(KeyCode::Enter));
/// assert_eq!(ac.value(), "Banana");
/// assert!(!ac.is_open());
/// ```
pub struct Model<I: Input = Field> {
    /// Dropdown key bindings.
    pub key_map: KeyMap,
    /// Row styles.
    pub styles: Styles,

    pub(super) id: i64,
    pub(super) input: I,
    pub(super) config: Config,
    pub(super) candidates: CandidateSet,
    pub(super) results: Vec<String>,
    pub(super) state: InteractionState,
    pub(super) origin: Option<(u16, u16)>,
    pub(super) last_committed: Option<String>,
}

impl<I: Input> Model<I> {
    /// Binds a new widget to `input`.
    ///
    /// The static list from `config` is loaded right away. When `config.url`
    /// is set the returned command fetches the remote candidates; hand it to
    /// the runtime so the resulting message comes back through
    /// [`update`](Self::update).
    pub fn new(input: I, config: Config) -> (Self, Option<Cmd>) {
        let id = next_id();
        let mut candidates = CandidateSet::new();
        if let Some(list) = &config.list {
            candidates.append(list.iter().cloned());
        }
        let cmd = config
            .url
            .clone()
            .map(|url| fetch_cmd(id, url, config.timeout));

        let model = Self {
            key_map: default_key_map(),
            styles: Styles::default(),
            id,
            input,
            config,
            candidates,
            results: Vec::new(),
            state: InteractionState::default(),
            origin: None,
            last_committed: None,
        };
        (model, cmd)
    }

    /// Instance id used to address fetch results.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration the widget was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The bound input.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the bound input.
    ///
    /// Edits made here are not seen as typing; call
    /// [`input_changed`](Self::input_changed) afterwards to re-filter.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The bound input's current value.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// All known candidates.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The results currently shown, empty while closed.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// The highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    /// The highlighted row with `-1` meaning none.
    pub fn index(&self) -> isize {
        self.state.highlighted.map_or(-1, |i| i as isize)
    }

    /// The value most recently committed from the dropdown.
    pub fn last_committed(&self) -> Option<&str> {
        self.last_committed.as_deref()
    }

    /// Screen position of the input line. Rows are drawn on the lines below
    /// it, and mouse presses are mapped to rows relative to this origin.
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = Some((x, y));
    }

    /// Adds candidates that are not already known.
    ///
    /// The visible results are left alone; new candidates show up on the
    /// next change to the input.
    pub fn append_candidates<It, S>(&mut self, items: It)
    where
        It: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = self.candidates.append(items);
        tracing::debug!(id = self.id, added, total = self.candidates.len(), "appended candidates");
    }

    /// Candidates matching `query`; see [`CandidateSet::filter`].
    pub fn filter(&self, query: &str) -> Vec<String> {
        self.candidates.filter(query)
    }

    /// Re-filters after the input's value changed.
    ///
    /// Below `min_chars` the dropdown closes. Otherwise the previous results
    /// and highlight are discarded and the dropdown opens with nothing
    /// highlighted, or closes if nothing matches.
    pub fn input_changed(&mut self) {
        let value = self.input.value();
        if value.chars().count() < self.config.min_chars {
            self.close();
            return;
        }

        self.state.highlighted = None;
        self.results = self.candidates.filter(&value);
        if self.results.is_empty() {
            self.close();
        } else {
            self.state.open = true;
            tracing::debug!(id = self.id, results = self.results.len(), "dropdown open");
        }
    }

    /// Closes the dropdown and clears the results.
    pub fn close(&mut self) {
        if self.state.open {
            tracing::debug!(id = self.id, "dropdown closed");
        }
        self.state = InteractionState::default();
        self.results.clear();
    }

    /// Highlights the next row, wrapping past the last to the first.
    pub fn highlight_next(&mut self) {
        if !self.state.open || self.results.is_empty() {
            return;
        }
        let next = match self.state.highlighted {
            Some(i) if i + 1 < self.results.len() => i + 1,
            _ => 0,
        };
        self.state.highlighted = Some(next);
    }

    /// Highlights the previous row, wrapping before the first to the last.
    /// With nothing highlighted this goes to the last row.
    pub fn highlight_prev(&mut self) {
        if !self.state.open || self.results.is_empty() {
            return;
        }
        let prev = match self.state.highlighted {
            Some(i) if i > 0 => i - 1,
            _ => self.results.len() - 1,
        };
        self.state.highlighted = Some(prev);
    }

    /// Copies the highlighted row into the input and closes the dropdown.
    ///
    /// Returns the committed text, or `None` when nothing is highlighted.
    pub fn commit(&mut self) -> Option<String> {
        if !self.state.open {
            return None;
        }
        let text = self
            .state
            .highlighted
            .and_then(|i| self.results.get(i))
            .cloned()?;

        self.input.set_value(&text);
        self.close();
        tracing::debug!(id = self.id, value = %text, "committed");
        self.last_committed = Some(text.clone());
        Some(text)
    }

    /// Highlights row `index` and commits it, as a pointer press does.
    ///
    /// Out-of-range rows and presses while closed are ignored.
    pub fn press_row(&mut self, index: usize) -> Option<String> {
        if !self.state.open || index >= self.results.len() {
            return None;
        }
        self.state.highlighted = Some(index);
        self.commit()
    }

    /// Routes a key press.
    ///
    /// Returns `true` when the dropdown consumed the key. Unconsumed keys
    /// are forwarded to the input, and a resulting value change re-filters.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> bool {
        if self.state.open {
            if self.key_map.select.matches(msg) && self.state.highlighted.is_some() {
                self.commit();
                return true;
            }
            if self.key_map.close.matches(msg) {
                self.close();
                return false;
            }
            if self.key_map.next.matches(msg) {
                self.highlight_next();
                return true;
            }
            if self.key_map.prev.matches(msg) {
                self.highlight_prev();
                return true;
            }
        }

        if self.input.handle_key(msg) {
            self.input_changed();
        }
        false
    }

    /// Maps a left-button press onto a result row. Presses off the panel
    /// are ignored.
    fn handle_mouse(&mut self, msg: &MouseMsg) {
        let Some((ox, oy)) = self.origin else {
            return;
        };
        if !matches!(msg.button, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if msg.y <= oy {
            return;
        }
        let column = usize::from(msg.x);
        let left = usize::from(ox);
        if column < left || column >= left + self.row_width() {
            return;
        }
        let row = usize::from(msg.y - oy - 1);
        self.press_row(row);
    }

    /// Applies a fetch result addressed to this widget.
    fn handle_fetch(&mut self, msg: &FetchMsg) {
        if msg.id != self.id {
            return;
        }
        match &msg.result {
            Ok(items) => self.append_candidates(items.iter().cloned()),
            Err(err) => {
                tracing::warn!(
                    target: "bubbletea_autocomplete::fetch",
                    id = self.id,
                    url = self.config.url.as_deref().unwrap_or_default(),
                    "remote candidates unavailable: {}",
                    err
                );
            }
        }
    }

    /// Processes a runtime message: key presses, mouse presses and fetch
    /// results. Never returns a command.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(fetch) = msg.downcast_ref::<FetchMsg>() {
            self.handle_fetch(fetch);
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        } else if let Some(mouse_msg) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse_msg);
        }
        None
    }
}

impl<I: Input> Component for Model<I> {
    fn focus(&mut self) -> Option<Cmd> {
        self.input.focus();
        None
    }

    /// Losing focus always closes the dropdown.
    fn blur(&mut self) {
        self.input.blur();
        self.close();
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl BubbleTeaModel for Model<Field> {
    fn init() -> (Self, Option<Cmd>) {
        let (mut model, cmd) = Model::new(Field::new(), Config::default());
        model.input.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
