//! Widget configuration.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default minimum input length before suggestions show.
pub const DEFAULT_MIN_CHARS: usize = 1;

/// Default time limit for the remote candidate request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Construction-time configuration, immutable once the widget is built.
///
/// Deserializes from the camelCase keys `minChars`, `list`, `url` and
/// `timeoutMs`; every key is optional.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::Config;
///
/// let config = Config::from_json(r#"{ "minChars": 2, "list": ["apple"] }"#).unwrap();
/// assert_eq!(config.min_chars, 2);
/// assert_eq!(config.url, None);
///
/// let built = Config::new().with_min_chars(2).with_list(["apple"]);
/// assert_eq!(built.list, config.list);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Minimum number of characters typed before the dropdown opens.
    pub min_chars: usize,
    /// Candidates available immediately.
    pub list: Option<Vec<String>>,
    /// Endpoint returning a JSON array of strings, fetched once.
    pub url: Option<String>,
    /// Time limit for the remote request.
    #[serde(rename = "timeoutMs", with = "millis")]
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            list: None,
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Default configuration: one character, no candidates, no remote source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Sets the minimum input length.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Sets the static candidate list.
    pub fn with_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list = Some(list.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the remote candidate source.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the remote request time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
