//! Configuration for segplay
//!
//! Loaded from `~/.config/segplay/config.toml`. Every field has a default, so
//! a missing file or a partial file is always valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::segment::PollSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerSettings,
    #[serde(default)]
    pub simulator: SimulatorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Timer and transport tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Progress refresh period while playing
    pub progress_interval_ms: u64,
    /// End-boundary check period while playing
    pub boundary_interval_ms: u64,
    /// How early before the end time playback is stopped (seconds)
    pub end_padding_secs: f64,
    /// Seek distance for the back/forward controls (seconds)
    pub seek_step_secs: f64,
    /// Rate change per faster/slower press
    pub rate_step: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            progress_interval_ms: 500,
            boundary_interval_ms: 300,
            end_padding_secs: 0.2,
            seek_step_secs: 10.0,
            rate_step: 0.1,
        }
    }
}

/// Simulated provider used by the terminal player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// Media length for videos without an explicit `--duration`
    pub default_duration_secs: f64,
    /// Video ids that fail with the given provider error code
    pub error_videos: BTreeMap<String, i32>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            default_duration_secs: 300.0,
            error_videos: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Log file; interactive commands default to one under the data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("segplay").join("config.toml"))
    }

    /// Default log file location for interactive sessions.
    pub fn default_log_path() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir().context("Could not determine data directory")?;
        Ok(data_dir.join("segplay").join("segplay.log"))
    }

    /// Load config from the default location, or defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Timer settings for the playback controllers.
    ///
    /// Zero intervals are bumped to 1ms so a timer can never spin.
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            progress_interval: Duration::from_millis(self.player.progress_interval_ms.max(1)),
            boundary_interval: Duration::from_millis(self.player.boundary_interval_ms.max(1)),
            end_padding: self.player.end_padding_secs.max(0.0),
        }
    }
}
