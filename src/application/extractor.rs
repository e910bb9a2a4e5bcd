//! Chat extraction pipeline.
//!
//! Walks the store key by key, strictly sequentially: filter, fetch,
//! parse, clean, collect. Per-key failures are logged and skipped; the
//! run itself cannot fail once the store is open.

use crate::domain::{ConversationRecord, ExportStats, SessionSummary};
use crate::infrastructure::UserDataStore;

use super::cleaner::clean_markdown;
use super::filter::filter_session_keys;
use super::parser::{format_creation_date, parse_session, RawSession};

/// Both cleaned texts must be longer than this for an exchange to be
/// exported.
const MIN_TEXT_LEN: usize = 10;

/// Everything one run produces besides the export file itself.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ConversationRecord>,
    pub sessions: Vec<SessionSummary>,
    pub stats: ExportStats,
}

/// Extracts all qualifying conversation records from the store.
pub fn extract_conversations(store: &dyn UserDataStore) -> Extraction {
    tracing::info!("Starting Copilot chat export");

    let keys = filter_session_keys(store.list_keys());
    tracing::info!("Found {} chat session files", keys.len());

    let mut out = Extraction {
        stats: ExportStats {
            sessions_found: keys.len(),
            ..ExportStats::default()
        },
        ..Extraction::default()
    };

    for key in &keys {
        let Some(value) = store.get(key) else {
            tracing::debug!("No byte value for {}, skipping", key);
            out.stats.sessions_skipped += 1;
            continue;
        };

        let session = match parse_session(&value) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Error processing session {}: {}", key, e);
                out.stats.sessions_skipped += 1;
                continue;
            }
        };

        let records = conversations_from_session(&session);

        out.sessions.push(SessionSummary {
            session: session.session_id.chars().take(8).collect(),
            date: format_creation_date(session.creation_date),
            exchanges: session.requests.len(),
            exported: records.len(),
        });
        out.stats.conversations_exported += records.len();
        out.records.extend(records);
    }

    tracing::info!("Exported {} conversations", out.stats.conversations_exported);

    out
}

/// Flattens one parsed session into its qualifying conversation records.
///
/// The record index is the exchange's position within this session, so
/// labels restart at `conversation-1` for every session.
fn conversations_from_session(session: &RawSession) -> Vec<ConversationRecord> {
    let date = format_creation_date(session.creation_date);

    session
        .requests
        .iter()
        .enumerate()
        .filter_map(|(index, request)| {
            let human = clean_markdown(request.user_text());

            let copilot = request
                .response_parts()
                .iter()
                .map(|part| clean_markdown(part))
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();

            if human.chars().count() > MIN_TEXT_LEN && copilot.chars().count() > MIN_TEXT_LEN {
                Some(ConversationRecord::new(
                    index,
                    &session.session_id,
                    date.clone(),
                    human,
                    copilot,
                ))
            } else {
                None
            }
        })
        .collect()
}
