//! Day-level helper commands for CLI.

use clap::Subcommand;
use momentum_core::Tracker;

use super::task::parse_date_or_today;

#[derive(Subcommand)]
pub enum DayAction {
    /// Materialize one pending task per category for a day with no tasks
    Seed {
        /// Calendar day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Tracker::open()?;

    match action {
        DayAction::Seed { date } => {
            let created = tracker.seed_day(parse_date_or_today(date.as_deref())?)?;
            if created.is_empty() {
                println!("Day already has tasks; nothing seeded");
            } else {
                println!("Seeded {} tasks", created.len());
                println!("{}", serde_json::to_string_pretty(&created)?);
            }
        }
    }
    Ok(())
}
