//! Infrastructure layer - external adapters (database, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod exporter;
pub mod paths;
pub mod store;

pub use config::{load_config, AppConfig};
pub use exporter::{export_filename, ChatExporter, FileExporter};
pub use paths::{candidate_store_paths, find_store_path, STORE_FILE_NAME};
pub use store::{SqliteStore, UserDataStore};
