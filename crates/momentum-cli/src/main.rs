use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "momentum-cli", version, about = "Momentum CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Category management
    Category {
        #[command(subcommand)]
        action: commands::category::CategoryAction,
    },
    /// Scores and streaks
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Day-level helpers
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Category { action } => commands::category::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
