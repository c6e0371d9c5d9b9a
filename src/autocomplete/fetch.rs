//! Remote candidate source.
//!
//! The widget fetches its remote candidates once, as a command handed to the
//! runtime. The command resolves to a [`FetchMsg`] tagged with the widget id;
//! the widget appends the candidates on success and logs and drops the error
//! otherwise.

use crate::error::{Error, Result};
use bubbletea_rs::{Cmd, Msg};
use std::time::Duration;

/// Result of a remote candidate fetch, addressed to one widget instance.
#[derive(Debug)]
pub struct FetchMsg {
    /// Id of the widget that issued the request.
    pub id: i64,
    /// The fetched candidates, or why there are none.
    pub result: Result<Vec<String>>,
}

/// Fetches `url` with an HTTP GET and decodes the body as a JSON array of
/// strings.
///
/// Only status 200 counts as success; any other status yields
/// [`Error::Status`].
pub async fn fetch_candidates(url: &str, timeout: Duration) -> Result<Vec<String>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::Decode)
}

/// Wraps [`fetch_candidates`] in a command that reports back to widget `id`.
pub fn fetch_cmd(id: i64, url: String, timeout: Duration) -> Cmd {
    Box::pin(async move {
        tracing::debug!(target: "bubbletea_autocomplete::fetch", id, %url, "fetching candidates");
        let result = fetch_candidates(&url, timeout).await;
        Some(Box::new(FetchMsg { id, result }) as Msg)
    })
}
