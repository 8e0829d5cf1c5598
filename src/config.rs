//! User configuration
//!
//! Loaded from `<config dir>/karussell/config.toml`. Every field has a
//! default, so a missing file or a partial file both work. CLI flags
//! override config values.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::carousel::autoplay::DEFAULT_INTERVAL_MS;

/// Playback-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Desired autoplay period in milliseconds. Floored to the minimum
    /// interval at runtime to prevent overly rapid cycling.
    pub autoplay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Display-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum track height in rows (cosmetic sizing hint; the track is
    /// centered vertically when the terminal is taller)
    pub height: Option<u16>,
    /// Theme name: "kleihaus", "classic" or "ocean"
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            height: None,
            theme: "kleihaus".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("karussell").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration to its default location, creating the
    /// parent directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_autoplay_matches_constant() {
        let config = Config::default();
        assert_eq!(config.playback.autoplay_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn default_display_has_no_height_cap() {
        let config = Config::default();
        assert_eq!(config.display.height, None);
        assert_eq!(config.display.theme, "kleihaus");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str("[playback]\nautoplay_ms = 3000\n").unwrap();
        assert_eq!(config.playback.autoplay_ms, 3000);
        assert_eq!(config.display.theme, "kleihaus");
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.playback.autoplay_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.display.height = Some(20);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.display.height, Some(20));
    }
}
