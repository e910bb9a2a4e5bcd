//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Copilot Chat Export - Pull Copilot chat history out of VS Code web storage.
///
/// Point it at a saved snapshot of the `vscode-web-db` store and it writes
/// one JSON file of cleaned conversations per run.
#[derive(Parser, Debug)]
#[command(name = "copilot-chat-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the store snapshot (overrides config and discovery).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract all chat sessions and write one JSON export file.
    Export {
        /// Directory the export file is written into.
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List discovered chat sessions (summary table).
    List {
        /// Maximum number of sessions to show.
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show statistics about stored conversations.
    Stats,

    /// Show which store snapshot would be used.
    Paths,
}
