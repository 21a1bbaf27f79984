//! Interpretation of raw HTTP responses, independent of the transport.

use board_model::Record;
use board_query::dedupe_by_id;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// `{"success": bool, "data": ...}` wrapper used by the team directory API.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Pulls a display message out of a JSON error body, if there is one.
///
/// `message` is preferred; `error` is accepted as a second spelling.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

/// Maps a non-2xx status to [`FetchError::Server`].
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Server {
            status,
            message: server_message(body),
        })
    }
}

/// Decodes a JSON array of records and collapses duplicate ids.
pub fn decode_collection<R>(body: &str) -> Result<Vec<R>>
where
    R: Record + DeserializeOwned,
{
    let records: Vec<R> = serde_json::from_str(body)?;
    Ok(dedupe_by_id(records))
}

pub fn decode_one<R: DeserializeOwned>(body: &str) -> Result<R> {
    Ok(serde_json::from_str(body)?)
}

/// Unwraps an [`Envelope`]; `success == false` is a server-side failure.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    match (envelope.success, envelope.data) {
        (true, Some(data)) => Ok(data),
        (true, None) => Err(FetchError::Decode("envelope is missing `data`".to_string())),
        (false, _) => Err(FetchError::Server {
            status,
            message: envelope.message,
        }),
    }
}
