use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "prodtimer",
    version,
    about = "Productivity timer: stopwatch and work/break countdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stopwatch with lap capture
    Stopwatch {
        #[command(subcommand)]
        action: commands::stopwatch::StopwatchAction,
    },
    /// Work/break countdown timer
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
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
        Commands::Stopwatch { action } => commands::stopwatch::run(action),
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
