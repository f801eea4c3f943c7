//! Host settings, layered with figment.
//!
//! Hierarchy:
//! 1. Built-in defaults
//! 2. Optional YAML file passed on the command line
//! 3. `BULWARK_*` environment variables (nested keys split on `__`,
//!    e.g. `BULWARK_GAME__TUNING__MISSILE_STOCK=12`)

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bulwark_core::config::GameConfig;

/// Everything a headless session needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the host's random draws. Same seed and inputs, same game.
    pub seed: u64,
    /// Upper bound on frames delivered before the session stops.
    pub max_frames: u64,
    /// Virtual time between frame ticks.
    pub frame_interval_ms: u64,
    /// Let the built-in defender fire at incoming nukes.
    pub autopilot: bool,
    /// Write the final snapshot here as JSON.
    pub snapshot_out: Option<PathBuf>,
    /// Layout and tuning passed to the engine.
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frames: 100_000,
            frame_interval_ms: 16,
            autopilot: false,
            snapshot_out: None,
            game: GameConfig::default(),
        }
    }
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File not found error.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Figment parsing error.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] Box<figment::Error>),

    /// A value that parses but cannot drive a session.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Parsing(Box::new(error))
    }
}

impl Settings {
    /// Load defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Settings = figment
            .merge(Env::prefixed("BULWARK_").split("__"))
            .extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the host or engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tuning = &self.game.tuning;
        let layout = &self.game.layout;

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be > 0".into()));
        }
        if self.max_frames == 0 {
            return Err(ConfigError::Invalid("max_frames must be > 0".into()));
        }
        if tuning.launch_delay_min > tuning.launch_delay_max {
            return Err(ConfigError::Invalid(format!(
                "launch delay range {}..={} is empty",
                tuning.launch_delay_min, tuning.launch_delay_max
            )));
        }
        if layout.bases.is_empty() {
            return Err(ConfigError::Invalid("layout needs at least one base".into()));
        }
        if layout.target_slots.len() != usize::from(bulwark_core::constants::TARGET_COLUMNS) {
            return Err(ConfigError::Invalid(format!(
                "layout needs {} target slots, found {}",
                bulwark_core::constants::TARGET_COLUMNS,
                layout.target_slots.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_yaml(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bulwark-settings-{}-{name}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.game.tuning.missile_stock, 10);
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let path = temp_yaml(
            "override",
            "seed: 7\nautopilot: true\ngame:\n  tuning:\n    missile_stock: 12\n",
        );
        let settings = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.seed, 7);
        assert!(settings.autopilot);
        assert_eq!(settings.game.tuning.missile_stock, 12);
        assert_eq!(settings.game.tuning.player_missile_speed, 8.0);
        assert_eq!(settings.game.layout.bases.len(), 3);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = PathBuf::from("/definitely/not/here/bulwark.yaml");
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let path = temp_yaml("invalid", "frame_interval_ms: 0\n");
        let err = Settings::load(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");

        let mut settings = Settings::default();
        settings.game.tuning.launch_delay_min = 200;
        assert!(settings.validate().is_err());
    }
}
