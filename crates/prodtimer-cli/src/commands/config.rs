use clap::Subcommand;
use prodtimer_core::{Config, CoreError};

use super::PhaseArg;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as JSON
    Show,
    /// Set a phase's default duration in minutes
    SetDuration {
        #[arg(value_enum)]
        phase: PhaseArg,
        minutes: u64,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        ConfigAction::SetDuration { phase, minutes } => {
            let mut cfg = Config::load()?;
            cfg.set_duration(phase.into(), minutes)?;
            cfg.save()?;
            println!(
                "{} duration set to {} min",
                prodtimer_core::Phase::from(phase),
                minutes
            );
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
