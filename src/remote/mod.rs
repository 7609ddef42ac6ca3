//! Loading of the ticket snapshot.
//!
//! The board is fed by a single `{ tickets, users }` document, fetched once
//! per invocation over HTTP or read from a local file. There is no retry;
//! failures are logged and returned to the caller.

pub mod response;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, TicketGridError};
use crate::types::BoardSnapshot;

pub use response::parse_board_response;

/// Where the snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for BoardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSource::Url(url) => write!(f, "{url}"),
            BoardSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load a snapshot from `source`.
pub async fn load_board(source: &BoardSource, timeout: Duration) -> Result<BoardSnapshot> {
    let snapshot = match source {
        BoardSource::Url(url) => fetch_board(url, timeout).await?,
        BoardSource::File(path) => load_board_file(path)?,
    };
    tracing::debug!(
        "loaded {} tickets and {} users from {}",
        snapshot.tickets.len(),
        snapshot.users.len(),
        source
    );
    Ok(snapshot)
}

/// Fetch a snapshot with a single HTTP GET.
pub async fn fetch_board(url: &str, timeout: Duration) -> Result<BoardSnapshot> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()?;

    let response = client.get(url).send().await.map_err(|e| {
        tracing::error!("Error fetching tickets from {}: {}", url, e);
        TicketGridError::Http(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Ticket source {} returned HTTP {}", url, status);
        return Err(TicketGridError::Api {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    parse_board_response(&body).inspect_err(|e| {
        tracing::error!("Error decoding tickets from {}: {}", url, e);
    })
}

/// Read a snapshot saved as JSON on disk.
pub fn load_board_file(path: &Path) -> Result<BoardSnapshot> {
    let body = fs::read_to_string(path).map_err(|e| {
        TicketGridError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read ticket file {}: {}", path.display(), e),
        ))
    })?;
    parse_board_response(&body)
}
