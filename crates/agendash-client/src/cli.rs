//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use agendash_core::MonthCursor;

/// agendash - your dashboard calendar in the terminal
#[derive(Debug, Parser)]
#[command(name = "agendash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "AGENDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Backend base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Month to display as YYYY-MM (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Maximum number of entries in the upcoming list
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands; omitting one renders the month view.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the month grid and the upcoming list
    Show,

    /// Print the upcoming list only
    Upcoming {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a calendar event
    Add {
        /// Event date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Event title
        #[arg(long)]
        title: String,

        /// Category label (Meeting, Deadline, Presentation, Review, ...)
        #[arg(long)]
        category: String,

        /// Event time as HH:MM
        #[arg(long)]
        time: Option<String>,

        /// Free-text memo
        #[arg(long)]
        memo: Option<String>,
    },

    /// Delete a calendar event by id
    Remove {
        /// Calendar entry id
        id: i64,
    },
}

/// Parses a `YYYY-MM` month argument.
pub fn parse_month(value: &str) -> Result<MonthCursor, String> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got '{}'", value))?;

    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year in '{}'", value))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in '{}'", value))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month must be 01..=12, got '{}'", value));
    }

    Ok(MonthCursor::new(year, month - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_parsing() {
        assert_eq!(parse_month("2026-01").unwrap(), MonthCursor::new(2026, 0));
        assert_eq!(parse_month("2025-12").unwrap(), MonthCursor::new(2025, 11));
    }

    #[test]
    fn month_parsing_rejects_garbage() {
        assert!(parse_month("2026").is_err());
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("2026-00").is_err());
        assert!(parse_month("year-month").is_err());
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["agendash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(cli.month.is_none());
    }

    #[test]
    fn cli_parses_add_command() {
        let cli = Cli::try_parse_from([
            "agendash",
            "add",
            "--date",
            "2026-01-05",
            "--title",
            "Team sync",
            "--category",
            "Meeting",
            "--time",
            "14:00",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Add {
                date, title, time, ..
            }) => {
                assert_eq!(date, "2026-01-05");
                assert_eq!(title, "Team sync");
                assert_eq!(time.as_deref(), Some("14:00"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
