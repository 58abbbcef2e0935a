//! Score and streak commands for CLI.

use clap::Subcommand;
use momentum_core::Tracker;

use super::task::parse_date_or_today;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Score breakdown for one day
    Day {
        /// Calendar day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// One score per calendar day of a month
    Month {
        /// Year (e.g. 2024)
        year: i32,
        /// Month, 1-12
        month: u32,
    },
    /// Scores for the most recent days
    Trailing {
        /// Last day of the window (YYYY-MM-DD, default: today)
        #[arg(long)]
        end: Option<String>,
        /// Window length in days (default: configured trailing window)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Current and longest consecutive-day streak
    Streak {
        /// Reference day to walk back from (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Tracker::open()?;

    match action {
        StatsAction::Day { date } => {
            let summary = tracker.day_summary(parse_date_or_today(date.as_deref())?)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Month { year, month } => {
            let entries = tracker.month_summary(year, month)?;
            if entries.is_empty() {
                return Err(format!("invalid month: {year}-{month}").into());
            }
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        StatsAction::Trailing { end, days } => {
            let entries = tracker.trailing_summary(parse_date_or_today(end.as_deref())?, days)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        StatsAction::Streak { date } => {
            let summary = tracker.streak(parse_date_or_today(date.as_deref())?)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
