//! Slideshow configuration (window, pacing, music, minigame tuning).
//! Loaded from config.ron at startup.

use minigame::{MinigameTuning, TuningError};
use narrative::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistent settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    #[serde(default = "default_true")]
    pub vsync: bool,
    /// Which edition of the slideshow to present.
    #[serde(default)]
    pub variant: Variant,
    /// Length of the covering wipe between stages.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: f64,
    /// Looping background track. `None` disables music.
    #[serde(default = "default_music_path")]
    pub music_path: Option<PathBuf>,
    /// 0.0 to 1.0
    #[serde(default = "default_music_volume")]
    pub music_volume: f64,
    /// Draw the frame rate in the top-left corner.
    #[serde(default)]
    pub show_fps: bool,
    #[serde(default)]
    pub minigame: MinigameTuning,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    800
}
fn default_true() -> bool {
    true
}
fn default_transition_ms() -> f64 {
    narrative::TRANSITION_DURATION_MS
}
fn default_music_path() -> Option<PathBuf> {
    Some(PathBuf::from("assets/bg_music.ogg"))
}
fn default_music_volume() -> f64 {
    0.6
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            vsync: default_true(),
            variant: Variant::default(),
            transition_ms: default_transition_ms(),
            music_path: default_music_path(),
            music_volume: default_music_volume(),
            show_fps: false,
            minigame: MinigameTuning::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("transition must last a positive time, got {0} ms")]
    TransitionDuration(f64),
    #[error("music volume must be within 0..=1, got {0}")]
    Volume(f64),
    #[error("window must have a positive size, got {0}x{1}")]
    WindowSize(u32, u32),
    #[error("minigame tuning: {0}")]
    Tuning(#[from] TuningError),
}

impl AppConfig {
    /// Load `config.ron`. A missing file gives defaults; an unreadable,
    /// malformed or out-of-range file is logged and also gives defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate one file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowSize(self.window_width, self.window_height));
        }
        if self.transition_ms.is_nan() || self.transition_ms <= 0.0 {
            return Err(ConfigError::TransitionDuration(self.transition_ms));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::Volume(self.music_volume));
        }
        self.minigame.validate()?;
        Ok(())
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    log::warn!("Could not write config to {:?}: {}", path, e);
                }
            }
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_takes_every_default() {
        let config = AppConfig::parse("()").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window_height, 800);
        assert_eq!(config.transition_ms, 500.0);
        assert_eq!(config.variant, Variant::Full);
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let config = AppConfig::parse(
            "(variant: Classic, music_path: None, minigame: (hits_to_finish: 3))",
        )
        .expect("parse");
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.music_path, None);
        assert_eq!(config.minigame.hits_to_finish, 3);
        assert_eq!(config.minigame.max_live_targets, 5);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            AppConfig::parse("(music_volume: 1.5)"),
            Err(ConfigError::Volume(_))
        ));
        assert!(matches!(
            AppConfig::parse("(transition_ms: 0.0)"),
            Err(ConfigError::TransitionDuration(_))
        ));
        assert!(matches!(
            AppConfig::parse("(minigame: (min_speed: 0.1, max_speed: 0.05))"),
            Err(ConfigError::Tuning(TuningError::SpeedRange { .. }))
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(AppConfig::parse("(window_width: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn pretty_output_parses_back() {
        let config = AppConfig {
            show_fps: true,
            ..AppConfig::default()
        };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
            .expect("serialize");
        assert_eq!(AppConfig::parse(&text).expect("parse"), config);
    }
}
