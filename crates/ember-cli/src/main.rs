use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "ember", version, about = "Ember daily engagement CLI")]
struct Cli {
    /// State file path (defaults to the application data directory)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Configuration file path (defaults to the application data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show (deriving if needed) today's activity selection
    Today(commands::today::TodayArgs),
    /// Record completion of an activity
    Complete(commands::complete::CompleteArgs),
    /// Show streak state
    Streak(commands::streak::StreakArgs),
    /// Quest management
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Prioritized review queue
    Review(commands::review::ReviewArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let ctx = common::Context::new(cli.state, cli.config);
    let result = match cli.command {
        Commands::Today(args) => commands::today::run(args, &ctx),
        Commands::Complete(args) => commands::complete::run(args, &ctx),
        Commands::Streak(args) => commands::streak::run(args, &ctx),
        Commands::Quest { action } => commands::quest::run(action, &ctx),
        Commands::Review(args) => commands::review::run(args, &ctx),
        Commands::Config { action } => commands::config::run(action, &ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
