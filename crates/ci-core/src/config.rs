use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::filters::{CallType, FilterSelection, Region};

/// Upper bound for the simulated "thinking" pause.
pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Top-level configuration loaded from `~/.ci-report/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from `~/.ci-report/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chat.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Directory holding the config file and the default log file.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ci-report")
    }

    fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the interactive TUI writes logs. `None` means
    /// `~/.ci-report/ci-report.log`.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl GeneralConfig {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Config::home_dir().join("ci-report.log"))
    }
}

fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl ChatConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "chat.thinking_delay_ms must be at most {MAX_THINKING_DELAY_MS}, got {}",
                self.thinking_delay_ms
            )));
        }
        Ok(())
    }
}

fn default_thinking_delay_ms() -> u64 {
    1_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_region")]
    pub default_region: String,
    #[serde(default = "default_call_types")]
    pub default_call_types: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_region: default_region(),
            default_call_types: default_call_types(),
        }
    }
}

impl UiConfig {
    /// The sidebar selection a fresh session starts with.
    pub fn filter_selection(&self) -> Result<FilterSelection, ConfigError> {
        let region = self
            .default_region
            .parse::<Region>()
            .map_err(|e| ConfigError::Validation(format!("ui.default_region: {e}")))?;
        let call_types = self
            .default_call_types
            .iter()
            .map(|s| s.parse::<CallType>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Validation(format!("ui.default_call_types: {e}")))?;
        Ok(FilterSelection::new(region, call_types))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5_000).contains(&self.tick_rate_ms) {
            return Err(ConfigError::Validation(format!(
                "ui.tick_rate_ms must be within 1..=5000, got {}",
                self.tick_rate_ms
            )));
        }
        self.filter_selection().map(|_| ())
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}
fn default_region() -> String {
    Region::Global.key().into()
}
fn default_call_types() -> Vec<String> {
    CallType::ALL.iter().map(|c| c.key().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn log_path_defaults_under_home_dir() {
        let cfg = GeneralConfig::default();
        assert!(cfg.log_path().ends_with(".ci-report/ci-report.log"));

        let custom = GeneralConfig {
            log_file: Some("/tmp/x.log".into()),
            ..GeneralConfig::default()
        };
        assert_eq!(custom.log_path(), PathBuf::from("/tmp/x.log"));
    }
}
