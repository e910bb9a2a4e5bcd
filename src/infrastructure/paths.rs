//! Discovery of the user-data store snapshot.
//!
//! The snapshot is a file the user saved out of the browser, so it is
//! looked for in the usual landing spots before giving up.

use std::path::PathBuf;

use crate::domain::{AppError, Result};

/// File name of the store snapshot, named after the source database.
pub const STORE_FILE_NAME: &str = "vscode-web-db.sqlite";

/// Home-relative directories searched for the snapshot, in order.
const SNAPSHOT_DIRS: &[&str] = &["Downloads", ".copilot-chat-export"];

/// Candidate snapshot locations: the working directory first, then the
/// home-relative directories.
#[must_use]
pub fn candidate_store_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(STORE_FILE_NAME)];

    if let Some(home) = dirs::home_dir() {
        for dir in SNAPSHOT_DIRS {
            candidates.push(home.join(dir).join(STORE_FILE_NAME));
        }
    }

    candidates
}

/// Locates the store snapshot.
///
/// # Errors
/// Returns error if no candidate location holds the snapshot file.
pub fn find_store_path() -> Result<PathBuf> {
    let candidates = candidate_store_paths();

    for path in &candidates {
        if path.is_file() {
            tracing::debug!("Found store snapshot at: {}", path.display());
            return Ok(path.clone());
        }
    }

    Err(AppError::StoreNotFound {
        path: candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME)),
    })
}
