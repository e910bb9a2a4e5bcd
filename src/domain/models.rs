//! Domain models for exported Copilot chat data.
//!
//! These models represent the flat conversation records produced from
//! VS Code's stored chat-session documents.

use serde::{Deserialize, Serialize};

/// Marker value for the `type` field of every exported record.
pub const RECORD_TYPE: &str = "conversation";

/// Cleaned content of one exported exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContent {
    /// First 8 characters of the source session id.
    pub session: String,
    /// Session creation date, or `-` when the session carries none.
    pub date: String,
    /// Cleaned user message.
    pub human: String,
    /// Cleaned, concatenated assistant response.
    pub copilot: String,
}

/// One exported, cleaned, flattened exchange.
///
/// The `key` label is 1-based within the source session, so it is not
/// globally unique across sessions. That mirrors the stored format and
/// is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Label of the form `conversation-<n>`.
    pub key: String,
    pub content: ConversationContent,
    /// Always `"conversation"`.
    #[serde(rename = "type")]
    pub record_type: String,
}

impl ConversationRecord {
    /// Builds a record for the exchange at `index` (0-based) of a session.
    #[must_use]
    pub fn new(index: usize, session_id: &str, date: String, human: String, copilot: String) -> Self {
        Self {
            key: format!("conversation-{}", index + 1),
            content: ConversationContent {
                session: session_id.chars().take(8).collect(),
                date,
                human,
                copilot,
            },
            record_type: RECORD_TYPE.to_string(),
        }
    }
}

/// Per-session view used by the `list` command.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// First 8 characters of the session id.
    pub session: String,
    /// Session creation date, or `-`.
    pub date: String,
    /// Number of exchanges stored in the session.
    pub exchanges: usize,
    /// Number of exchanges that survive cleaning and the length threshold.
    pub exported: usize,
}

/// Summary statistics for one export run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportStats {
    /// Chat-session keys that matched the filter.
    pub sessions_found: usize,
    /// Sessions skipped because the value was missing or failed to parse.
    pub sessions_skipped: usize,
    /// Conversation records emitted.
    pub conversations_exported: usize,
}
