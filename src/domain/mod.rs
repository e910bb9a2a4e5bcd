//! Domain layer - core types shared across the pipeline.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (DB, IO, etc.).

pub mod error;
pub mod models;

pub use error::{AppError, Result};
pub use models::{ConversationContent, ConversationRecord, ExportStats, SessionSummary};
