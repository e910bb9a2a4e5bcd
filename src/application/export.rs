//! Export run orchestration.
//!
//! Ties the pipeline together: extract, serialize, deliver. One file per
//! run, even when nothing matched - an empty array is still a result.

use std::path::PathBuf;

use crate::domain::{AppError, ConversationRecord, Result};
use crate::infrastructure::{export_filename, ChatExporter, UserDataStore};

use super::extractor::{extract_conversations, Extraction};

/// Serializes the record list as pretty-printed JSON (2-space indent).
///
/// # Errors
/// Returns error if serialization fails.
pub fn serialize_records(records: &[ConversationRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(AppError::json)
}

/// Runs one full export: extract from `store`, deliver through `exporter`.
///
/// # Errors
/// Returns error if serialization or delivery fails.
pub fn run_export(
    store: &dyn UserDataStore,
    exporter: &dyn ChatExporter,
) -> Result<(PathBuf, Extraction)> {
    let extraction = extract_conversations(store);

    let json = serialize_records(&extraction.records)?;
    let filename = export_filename(chrono::Utc::now());
    let path = exporter.deliver(&filename, json.as_bytes())?;

    tracing::info!("Download written to {}", path.display());

    Ok((path, extraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_serializes_to_empty_array() {
        assert_eq!(serialize_records(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let records = vec![
            ConversationRecord::new(
                0,
                "abcdef1234567",
                "1970-01-01".into(),
                "Hello world, please help".into(),
                "Sure,  here you go".into(),
            ),
            ConversationRecord::new(4, "fedcba", "-".into(), "q".repeat(12), "a".repeat(12)),
        ];

        let json = serialize_records(&records).unwrap();
        let parsed: Vec<ConversationRecord> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, records);
    }

    #[test]
    fn test_run_with_no_matches_still_delivers_empty_array() {
        struct EmptyStore;
        impl UserDataStore for EmptyStore {
            fn list_keys(&self) -> Vec<String> {
                vec!["/User/settings.json".to_string()]
            }
            fn get(&self, _key: &str) -> Option<Vec<u8>> {
                None
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        let exporter = crate::infrastructure::FileExporter::new(tmp.path());

        let (path, extraction) = run_export(&EmptyStore, &exporter).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
        assert_eq!(extraction.stats.sessions_found, 0);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("copilot_export_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_serialized_shape_uses_type_field() {
        let records = vec![ConversationRecord::new(
            0,
            "abcdef1234567",
            "1970-01-01".into(),
            "human text here".into(),
            "copilot text here".into(),
        )];

        let json = serialize_records(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["type"], "conversation");
        assert_eq!(value[0]["key"], "conversation-1");
        assert_eq!(value[0]["content"]["session"], "abcdef12");
        // 2-space indentation.
        assert!(json.contains("\n  {"));
    }
}
