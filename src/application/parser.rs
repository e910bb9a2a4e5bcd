//! JSON parsing for stored chat-session documents.
//!
//! The schema is produced by another application and consumed as-is:
//! everything except `sessionId` is optional, and shapes that do not
//! match simply contribute nothing.

use serde::Deserialize;

use crate::domain::{AppError, Result};

/// Date shown when a session carries no usable creation timestamp.
const UNKNOWN_DATE: &str = "-";

/// Raw chat session as stored in the user-data store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSession {
    pub session_id: String,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub requests: Vec<RawRequest>,
}

/// One request/response exchange within a session.
#[derive(Debug, Deserialize)]
pub struct RawRequest {
    #[serde(default)]
    pub message: Option<RawMessage>,
    /// Kept loose: only an array of objects with a string `value` field
    /// is meaningful, anything else is ignored.
    #[serde(default)]
    pub response: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub text: Option<String>,
}

impl RawRequest {
    /// User-authored text, or empty when the exchange has none.
    #[must_use]
    pub fn user_text(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| m.text.as_deref())
            .unwrap_or("")
    }

    /// Non-empty string payloads of the response fragments, in order.
    #[must_use]
    pub fn response_parts(&self) -> Vec<&str> {
        self.response
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("value").and_then(serde_json::Value::as_str))
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Parses a chat session from raw store bytes.
///
/// # Errors
/// Returns error if the bytes are not valid UTF-8 JSON or the required
/// `sessionId` field is missing.
pub fn parse_session(data: &[u8]) -> Result<RawSession> {
    serde_json::from_slice(data).map_err(AppError::json)
}

/// Renders a millisecond creation timestamp as a calendar date.
#[must_use]
pub fn format_creation_date(millis: Option<i64>) -> String {
    millis
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map_or_else(|| UNKNOWN_DATE.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
