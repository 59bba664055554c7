mod config;

pub use config::{Config, DisplayConfig, DurationsConfig, NotificationsConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/prodtimer[-dev]/` based on PRODTIMER_ENV.
///
/// Set PRODTIMER_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PRODTIMER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("prodtimer-dev")
    } else {
        base_dir.join("prodtimer")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::NoConfigDir(e.to_string()))?;
    Ok(dir)
}
