use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport width (logical pixels) at or below which pairings are colour-coded
    pub breakpoint_px: u32,
    /// Logical pixels per terminal column
    pub cell_width_px: u32,
    pub tick_rate_ms: u64,
    /// Show the title view before the game; Exit from the game returns to it
    pub show_title: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            cell_width_px: 8,
            tick_rate_ms: 100,
            show_title: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".organ-match"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config; `Ok(None)` when there is no config file
    pub fn load() -> Result<Option<Config>, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width_px == 0 {
            return Err(ConfigError::Invalid {
                field: "cell_width_px",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Viewport width in logical pixels for a terminal this many columns wide
    pub fn viewport_width_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width_px)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("organ-match.log")))
    }
}
