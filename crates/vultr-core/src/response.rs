//! Raw HTTP outcome normalization.
//!
//! Maps a [`RawResponse`] to either a parsed success value or a classified
//! failure. The 4xx/5xx split is preserved exactly so callers can branch on
//! "the request was wrong" versus "try again later".

use crate::error::{ApiErrorKind, Error, Result};
use crate::transport::RawResponse;
use serde_json::Value;

/// Classify a raw HTTP outcome.
///
/// A success status with an empty body resolves to `Ok(None)`; with a JSON
/// body, to `Ok(Some(value))`. Failure statuses become [`Error::Api`] with
/// the matching [`ApiErrorKind`], and anything outside the 2xx/4xx/5xx
/// ranges becomes [`Error::UnexpectedStatus`].
///
/// # Errors
///
/// See above; also [`Error::MalformedResponse`] when a success body is not
/// valid JSON.
pub fn interpret(raw: &RawResponse) -> Result<Option<Value>> {
    match raw.status {
        200..=299 => {
            let text = raw.body.trim();
            if text.is_empty() {
                return Ok(None);
            }
            serde_json::from_str(text).map(Some).map_err(|err| {
                Error::MalformedResponse(format!("status {}: {err}", raw.status))
            })
        }
        400..=499 => Err(Error::Api {
            kind: ApiErrorKind::Client,
            status: raw.status,
            message: failure_message(raw),
        }),
        500..=599 => Err(Error::Api {
            kind: ApiErrorKind::Server,
            status: raw.status,
            message: failure_message(raw),
        }),
        status => Err(Error::UnexpectedStatus { status }),
    }
}

/// Extract the most useful message available from a failure response.
///
/// Prefers a JSON `error` field, then the plain body text, then the
/// documented meaning of the status for this API.
fn failure_message(raw: &RawResponse) -> String {
    let text = raw.body.trim();
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if !text.is_empty() {
        return text.to_string();
    }
    status_meaning(raw.status)
        .map_or_else(|| format!("HTTP status {}", raw.status), str::to_string)
}

/// Documented meanings of failure statuses returned by the v1 API.
fn status_meaning(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Invalid API location; check the request URL"),
        403 => Some("Invalid or missing API key"),
        405 => Some("Invalid HTTP method for this endpoint"),
        412 => Some("Request failed; check the response body for details"),
        500 => Some("Internal server error; try again later"),
        503 => Some("Rate limit exceeded; try the request again later"),
        _ => None,
    }
}
