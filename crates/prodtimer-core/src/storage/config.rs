//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default work/break phase durations (minutes)
//! - Notification preferences
//! - Display tick interval
//!
//! Stored at `~/.config/prodtimer/config.toml`. Note this is app
//! configuration only -- running timer state is never persisted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, TimerError};
use crate::timer::{Phase, PhaseConfig, DISPLAY_TICK_MS};

/// Phase duration configuration, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default = "default_work_min")]
    pub work_min: u64,
    #[serde(default = "default_break_min")]
    pub break_min: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell on completion.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Re-render interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/prodtimer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub durations: DurationsConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_work_min() -> u64 {
    25
}
fn default_break_min() -> u64 {
    5
}
fn default_true() -> bool {
    true
}
fn default_tick_ms() -> u64 {
    DISPLAY_TICK_MS
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            work_min: default_work_min(),
            break_min: default_break_min(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            durations: DurationsConfig::default(),
            notifications: NotificationsConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file on disk.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Set a phase's default duration in minutes. Rejects zero.
    pub fn set_duration(&mut self, phase: Phase, minutes: u64) -> Result<(), TimerError> {
        if minutes == 0 {
            return Err(TimerError::InvalidDuration { ms: 0 });
        }
        match phase {
            Phase::Work => self.durations.work_min = minutes,
            Phase::Break => self.durations.break_min = minutes,
        }
        Ok(())
    }

    /// Build the engine-facing phase configuration with `active` as the
    /// starting phase.
    pub fn phase_config(&self, active: Phase) -> Result<PhaseConfig, TimerError> {
        let mut cfg = PhaseConfig::new(
            self.durations.work_min.saturating_mul(60_000),
            self.durations.break_min.saturating_mul(60_000),
        )?;
        cfg.set_active_phase(active);
        Ok(cfg)
    }
}
