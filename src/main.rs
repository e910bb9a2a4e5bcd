//! Copilot Chat Export - Pull Copilot chat history out of VS Code web storage.
//!
//! This tool reads a saved snapshot of the `vscode-web-db` user-data store
//! (a SQLite key/value database), extracts the chat-session documents,
//! strips markdown code artifacts from the text, and writes the cleaned
//! conversations as one JSON file per run.

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{extract_conversations, format_sessions_table, format_stats, run_export};
use cli::{Cli, Commands};
use infrastructure::{
    candidate_store_paths, find_store_path, load_config, AppConfig, FileExporter, SqliteStore,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let config = load_config()?;
    let flag = cli.db.as_deref();

    match cli.command {
        Commands::Export { dir } => cmd_export(&resolve_store_path(flag, &config)?, dir, &config),
        Commands::List { limit } => cmd_list(&resolve_store_path(flag, &config)?, limit),
        Commands::Stats => cmd_stats(&resolve_store_path(flag, &config)?),
        Commands::Paths => cmd_paths(flag, &config),
    }
}

/// CLI flag wins over config, config wins over discovery.
fn resolve_store_path(
    flag: Option<&std::path::Path>,
    config: &AppConfig,
) -> domain::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.paths.db_path {
        return Ok(path.clone());
    }
    find_store_path()
}

/// Run the full export pipeline and write the JSON file.
fn cmd_export(
    db_path: &std::path::Path,
    dir: Option<PathBuf>,
    config: &AppConfig,
) -> domain::Result<()> {
    let store = SqliteStore::open(db_path)?;
    let exporter = FileExporter::new(dir.unwrap_or_else(|| config.export_dir()));

    let (path, extraction) = run_export(&store, &exporter)?;

    println!(
        "{} Exported {} conversations from {} sessions to {}",
        "✓".green().bold(),
        extraction.stats.conversations_exported,
        extraction.stats.sessions_found,
        path.display()
    );

    if extraction.stats.sessions_skipped > 0 {
        println!(
            "{} {} session(s) skipped, run with -v for details",
            "!".yellow().bold(),
            extraction.stats.sessions_skipped
        );
    }

    Ok(())
}

/// List discovered sessions.
fn cmd_list(db_path: &std::path::Path, limit: usize) -> domain::Result<()> {
    let store = SqliteStore::open(db_path)?;
    let mut extraction = extract_conversations(&store);
    extraction.sessions.truncate(limit);

    println!("{}", format_sessions_table(&extraction.sessions));
    println!();
    println!("{}", format_stats(&extraction.stats));

    Ok(())
}

/// Show extraction statistics.
fn cmd_stats(db_path: &std::path::Path) -> domain::Result<()> {
    let store = SqliteStore::open(db_path)?;
    let extraction = extract_conversations(&store);

    println!("{}", format_stats(&extraction.stats));

    Ok(())
}

/// Show the store path in use and the searched candidates.
fn cmd_paths(flag: Option<&std::path::Path>, config: &AppConfig) -> domain::Result<()> {
    println!("{}", "📂 Store snapshot".bold());
    println!();
    match resolve_store_path(flag, config) {
        Ok(path) => println!("  Using: {}", path.display().to_string().green()),
        Err(_) => println!("  Using: {}", "(no snapshot found)".yellow()),
    }
    println!();
    println!("  Searched locations:");
    for candidate in candidate_store_paths() {
        let marker = if candidate.is_file() { "✓" } else { " " };
        println!("  {} {}", marker, candidate.display());
    }

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
