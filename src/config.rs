//! Configuration loader plus strongly typed settings structures.
//!
//! Settings come from `config.toml` in the data directory (or an explicit
//! `--config` path). When no file exists the defaults embedded at compile time
//! are used. The file is only ever read; nothing here writes it back.

use crate::data::ui_state::Tab;
use crate::theme::ThemeColor;
use anyhow::{bail, Context, Result};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CHRONONEON_DIR";

/// Presets map onto the digit keys 1-9.
pub const MAX_PRESETS: usize = 9;

/// Top-level configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeColor,
    #[serde(default)]
    pub start_tab: Tab,
    #[serde(default = "default_border_style")]
    pub border_style: String, // "plain", "rounded", "double", "thick"
    #[serde(default = "default_bell_on_finish")]
    pub bell_on_finish: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u32,
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
}

fn default_border_style() -> String {
    "rounded".to_string()
}

fn default_bell_on_finish() -> bool {
    true
}

fn default_duration_secs() -> u32 {
    crate::widgets::countdown::DEFAULT_DURATION_SECS
}

fn default_presets() -> Vec<u32> {
    vec![300, 1500]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeColor::default(),
            start_tab: Tab::default(),
            border_style: default_border_style(),
            bell_on_finish: default_bell_on_finish(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            presets: default_presets(),
        }
    }
}

impl UiConfig {
    /// Border glyph set for the card; unknown names fall back to plain.
    pub fn border_type(&self) -> BorderType {
        match self.border_style.as_str() {
            "double" => BorderType::Double,
            "rounded" => BorderType::Rounded,
            "thick" => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Otherwise `config.toml` in
    /// the data directory is used if present, falling back to the embedded
    /// defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::load_from_path(path)?
            }
            None => {
                let path = Self::config_path()?;
                if path.exists() {
                    Self::load_from_path(&path)?
                } else {
                    tracing::info!(
                        "No config at {}, using built-in defaults",
                        path.display()
                    );
                    Self::defaults()?
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating it.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configuration shipped in `defaults/config.toml`.
    pub fn defaults() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded default config")
    }

    /// Reject values the widget cannot represent.
    pub fn validate(&self) -> Result<()> {
        if self.timer.default_duration_secs == 0 {
            bail!("timer.default_duration_secs must be greater than zero");
        }
        if self.timer.presets.len() > MAX_PRESETS {
            bail!(
                "timer.presets has {} entries; at most {} are supported",
                self.timer.presets.len(),
                MAX_PRESETS
            );
        }
        if let Some(pos) = self.timer.presets.iter().position(|&p| p == 0) {
            bail!("timer.presets[{}] must be greater than zero", pos);
        }
        Ok(())
    }

    /// Get the base chrononeon directory (~/.chrononeon/)
    /// Can be overridden with the CHRONONEON_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".chrononeon"))
    }

    /// Get path to config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Get path to the log file
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("chrononeon.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse_and_validate() {
        let config = Config::defaults().unwrap();
        config.validate().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.theme, ThemeColor::Cyan);
        assert_eq!(config.ui.start_tab, Tab::Clock);
        assert_eq!(config.timer.default_duration_secs, 300);
        assert_eq!(config.timer.presets, vec![300, 1500]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r##"
            [ui]
            theme = "#ffd700"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme, ThemeColor::Gold);
        assert_eq!(config.ui.border_style, "rounded");
        assert!(config.ui.bell_on_finish);
        assert_eq!(config.timer, TimerConfig::default());
    }

    #[test]
    fn test_theme_outside_palette_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[ui]\ntheme = \"#123456\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_timer_values() {
        let mut config = Config::default();
        config.timer.default_duration_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.timer.presets = vec![60, 0];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.timer.presets = (1..=10).collect();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.timer.presets = Vec::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_border_type_mapping() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.border_type(), BorderType::Rounded);
        ui.border_style = "double".to_string();
        assert_eq!(ui.border_type(), BorderType::Double);
        ui.border_style = "bogus".to_string();
        assert_eq!(ui.border_type(), BorderType::Plain);
    }

    #[test]
    fn test_load_from_path_and_missing_explicit_path() {
        let dir = std::env::temp_dir().join(format!("chrononeon-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[timer]\ndefault_duration_secs = 90\npresets = [60]\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.timer.default_duration_secs, 90);
        assert_eq!(config.timer.presets, vec![60]);

        assert!(Config::load(Some(&dir.join("missing.toml"))).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
