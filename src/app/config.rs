use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const SIDEBAR_MIN: u16 = 15;
pub const SIDEBAR_MAX: u16 = 40;
pub const LIST_MIN: u16 = 25;
pub const READING_MIN: u16 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Pane widths in percent of the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sidebar: u16,
    pub list: u16,
    pub reading: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { sidebar: 20, list: 35, reading: 45 }
    }
}

impl LayoutConfig {
    /// Clamp to the pane bounds; the reading pane takes the remainder
    pub fn clamped(self) -> Self {
        let sidebar = self.sidebar.clamp(SIDEBAR_MIN, SIDEBAR_MAX);
        let list = self.list.clamp(LIST_MIN, 100 - sidebar - READING_MIN);
        Self {
            sidebar,
            list,
            reading: 100 - sidebar - list,
        }
    }

    /// Width actually given to the reading pane when the configured
    /// `reading` disagrees with it
    pub fn reading_override(&self) -> Option<u16> {
        let used = self.clamped().reading;
        (self.reading != used).then_some(used)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub premium: bool,
    pub delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self { premium: true, delay_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub mailbox: Option<PathBuf>,
    pub notice_timeout_secs: u64,
    pub directory: PathBuf,
    pub layout: LayoutConfig,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let directory = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vimail")
            .join("users.json");

        Self {
            log_level: "info".to_string(),
            mailbox: None,
            notice_timeout_secs: 5,
            directory,
            layout: LayoutConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vimail")
            .join("config.toml")
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_secs(self.notice_timeout_secs)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.ai.premium);
        assert_eq!(config.ai_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"\n\n[ai]\npremium = false\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.ai.premium);
        assert_eq!(config.ai.delay_ms, 2000);
        assert_eq!(config.notice_timeout_secs, 5);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_layout_clamped() {
        let layout = LayoutConfig { sidebar: 5, list: 90, reading: 5 }.clamped();
        assert_eq!(layout, LayoutConfig { sidebar: 15, list: 55, reading: 30 });

        let layout = LayoutConfig { sidebar: 60, list: 10, reading: 30 }.clamped();
        assert_eq!(layout, LayoutConfig { sidebar: 40, list: 25, reading: 35 });

        assert_eq!(LayoutConfig::default().clamped(), LayoutConfig::default());
    }

    #[test]
    fn test_reading_override() {
        assert_eq!(LayoutConfig::default().reading_override(), None);
        assert_eq!(LayoutConfig { sidebar: 20, list: 35, reading: 60 }.reading_override(), Some(45));
        assert_eq!(LayoutConfig { sidebar: 5, list: 90, reading: 30 }.reading_override(), None);
    }

    #[test]
    fn test_load_keeps_configured_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nsidebar = 20\nlist = 35\nreading = 10\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.layout.reading, 10);
        assert_eq!(config.layout.reading_override(), Some(45));
        assert_eq!(config.layout.clamped().reading, 45);
    }
}
