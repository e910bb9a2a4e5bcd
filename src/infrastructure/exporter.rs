//! Delivery of the finished export file.
//!
//! The pipeline hands the exporter a filename and the serialized bytes;
//! how they leave the process is this layer's business. The shipped
//! implementation writes into a directory, which keeps the transformer
//! testable against an in-memory sink.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Sink for one export file per run.
pub trait ChatExporter {
    /// Delivers the serialized export under the given filename.
    ///
    /// # Errors
    /// Returns error if the file cannot be handed off.
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes export files into a directory, creating it when missing.
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ChatExporter for FileExporter {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::io(
                format!("Failed to create export directory {}", self.dir.display()),
                e,
            )
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, bytes)
            .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

        tracing::info!(path = %path.display(), "Export written");

        Ok(path)
    }
}

/// Builds the export filename from a timestamp, with the characters SQLite
/// and most filesystems dislike replaced by hyphens.
#[must_use]
pub fn export_filename(now: chrono::DateTime<chrono::Utc>) -> String {
    let stamp: String = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("copilot_export_{stamp}.json")
}
