//! TOML Configuration File Support
//!
//! Optional settings file at `$XDG_CONFIG_HOME/birthday-card/card.toml`
//! (typically `~/.config/birthday-card/card.toml`). `CARD_CONFIG` points
//! at a different file.
//!
//! # Configuration Priority
//!
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [audio]
//! music_path = "/home/me/music/birthday.mp3"
//! volume = 0.5
//! muted = false
//!
//! [display]
//! fps = 30
//! log_file = "/tmp/birthday-card.log"
//! ```
//!
//! No music ships with the card. Without `music_path` (or `CARD_MUSIC`)
//! the player looks for `background.mp3` in the data directory, e.g.
//! `~/.local/share/birthday-card/background.mp3`, and the card stays
//! silent when nothing is there.
//!
//! Card content and carousel timings are compiled in and cannot be set
//! here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::MusicSettings;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "CARD_CONFIG";

const DEFAULT_FPS: u32 = 30;
const MAX_FPS: u32 = 120;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Where the configuration came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Env,
    File,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioToml {
    pub music_path: Option<PathBuf>,
    /// 0.0 to 1.0
    pub volume: Option<f32>,
    pub muted: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Frames per second
    pub fps: Option<u32>,
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardToml {
    pub audio: AudioToml,
    pub display: DisplayToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

#[derive(Clone, Debug)]
pub struct CardConfig {
    pub music: MusicSettings,
    pub fps: u32,
    /// Log destination; `None` uses the default under the data directory
    pub log_file: Option<PathBuf>,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            music: MusicSettings::default(),
            fps: DEFAULT_FPS,
            log_file: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl CardConfig {
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Time between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Log file path, falling back to the user's data directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    /// The configured music file, when playback is wanted but the file
    /// is not there
    pub fn missing_music(&self) -> Option<&Path> {
        let path = self.music.path.as_path();
        (!self.music.muted && !path.is_file()).then_some(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.music.volume) {
            return Err(ConfigError::ValidationError(format!(
                "audio.volume must be between 0.0 and 1.0, got {}",
                self.music.volume
            )));
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::ValidationError(format!(
                "display.fps must be between 1 and {MAX_FPS}, got {}",
                self.fps
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// `$XDG_CONFIG_HOME/birthday-card/card.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("birthday-card").join("card.toml"))
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("birthday-card")
}

fn default_log_path() -> PathBuf {
    data_dir().join("card.log")
}

/// Where the music is expected when no path is configured:
/// `$XDG_DATA_HOME/birthday-card/background.mp3`
#[must_use]
pub fn default_music_path() -> PathBuf {
    data_dir().join("background.mp3")
}

/// Load configuration from `CARD_CONFIG` or the default path
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read, parsed
/// or validated. A missing config file is not an error.
pub fn load_config() -> Result<CardConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path);
    let mut config = load_config_from_path(path)?;
    apply_env_config(&mut config);
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific path, without environment overrides
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<CardConfig, ConfigError> {
    let mut config = CardConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: CardToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    config.validate()?;
    Ok(config)
}

fn apply_toml_config(config: &mut CardConfig, toml: &CardToml) {
    if let Some(ref path) = toml.audio.music_path {
        config.music.path = path.clone();
    }
    if let Some(volume) = toml.audio.volume {
        config.music.volume = volume;
    }
    if let Some(muted) = toml.audio.muted {
        config.music.muted = muted;
    }

    if let Some(fps) = toml.display.fps {
        config.fps = fps;
    }
    if toml.display.log_file.is_some() {
        config.log_file = toml.display.log_file.clone();
    }
}

fn apply_env_config(config: &mut CardConfig) {
    if let Ok(muted) = std::env::var("CARD_MUTED") {
        config.music.muted = muted != "0" && muted.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }
    if let Ok(path) = std::env::var("CARD_MUSIC") {
        config.music.path = PathBuf::from(path);
        config.source = ConfigSource::Env;
    }
    if let Ok(fps) = std::env::var("CARD_FPS") {
        if let Ok(n) = fps.parse::<u32>() {
            config.fps = n;
            config.source = ConfigSource::Env;
        }
    }
}
