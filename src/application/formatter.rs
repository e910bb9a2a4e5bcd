//! Terminal output for the listing and statistics commands.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ExportStats, SessionSummary};

/// Formats a table listing of discovered sessions.
pub fn format_sessions_table(sessions: &[SessionSummary]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Session", "Date", "Exchanges", "Exported"]);

    for session in sessions {
        table.add_row(vec![
            &session.session,
            &session.date,
            &session.exchanges.to_string(),
            &session.exported.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats export statistics for display.
pub fn format_stats(stats: &ExportStats) -> String {
    format!(
        "{}\n  Sessions found: {}\n  Sessions skipped: {}\n  Conversations exported: {}",
        "📊 Statistics".bold(),
        stats.sessions_found.to_string().cyan(),
        stats.sessions_skipped.to_string().yellow(),
        stats.conversations_exported.to_string().green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_includes_every_session() {
        let sessions = vec![
            SessionSummary {
                session: "abcdef12".into(),
                date: "2026-08-29".into(),
                exchanges: 3,
                exported: 2,
            },
            SessionSummary {
                session: "deadbeef".into(),
                date: "-".into(),
                exchanges: 0,
                exported: 0,
            },
        ];

        let table = format_sessions_table(&sessions);
        assert!(table.contains("abcdef12"));
        assert!(table.contains("deadbeef"));
        assert!(table.contains("2026-08-29"));
    }

    #[test]
    fn test_stats_mentions_counts() {
        let stats = ExportStats {
            sessions_found: 5,
            sessions_skipped: 1,
            conversations_exported: 9,
        };
        let text = format_stats(&stats);
        assert!(text.contains('5'));
        assert!(text.contains('9'));
    }
}
