//! Application layer - use cases and orchestration.
//!
//! This layer contains the export pipeline: filtering session keys,
//! parsing and cleaning stored documents, and delivering the result.

pub mod cleaner;
pub mod export;
pub mod extractor;
pub mod filter;
pub mod formatter;
pub mod parser;

pub use cleaner::clean_markdown;
pub use export::{run_export, serialize_records};
pub use extractor::{extract_conversations, Extraction};
pub use filter::{filter_session_keys, is_chat_session_key};
pub use formatter::{format_sessions_table, format_stats};
