//! Configuration management.
//!
//! Configuration is read from `~/.config/folio/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! The API base URL resolves as: `--api-url` / `PORTFOLIO_API_URL`, then
//! `api_url` from the file, then [`DEFAULT_API_URL`].

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::{KeybindingConfig, Keymap};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Config {
    /// Load from the default path, creating a commented default file on
    /// first run. Missing fields use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/folio/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("folio").join("config.toml"))
    }

    /// Pick the API base URL; `override_url` comes from the command line or
    /// the environment.
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> String {
        fn non_empty(url: &str) -> Option<&str> {
            Some(url.trim()).filter(|url| !url.is_empty())
        }

        override_url
            .and_then(non_empty)
            .or_else(|| self.api_url.as_deref().and_then(non_empty))
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

const DEFAULT_CONFIG: &str = r##"# folio configuration
#
# Colors are named (Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
# DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
# LightCyan, White, Reset) or hex ("#RRGGBB" / "#RGB").
#
# Keys are single characters ("a", "1"), special keys (Enter, Tab, BackTab,
# Backspace, Delete, Home, End, PageUp, PageDown, Up, Down, Left, Right, Esc,
# Space, F1-F12), optionally with modifiers ("Ctrl+c", "Shift+Tab").

# Aggregation API origin. PORTFOLIO_API_URL and --api-url take precedence.
# api_url = "https://your-api-gateway-url.execute-api.us-east-1.amazonaws.com"

[colors]
brand = "Magenta"
active_tab = "Magenta"
inactive_tab = "Gray"
active_border = "Magenta"
inactive_border = "DarkGray"
badge_fg = "Black"
badge_bg = "LightMagenta"
summary = "LightCyan"
metadata = "Yellow"
link = "Blue"
error = "LightRed"
footer = "DarkGray"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
move_left = ["h", "Left"]
move_right = ["l", "Right"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
next_tab = ["Tab"]
prev_tab = ["BackTab", "Shift+Tab"]
go_home = ["1"]
go_github = ["2"]
go_medium = ["3"]
go_youtube = ["4"]
select = ["Enter"]
back = ["Esc", "Backspace", "b"]
open_in_browser = ["o"]
"##;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config is valid TOML");
        assert!(config.api_url.is_none());
        assert_eq!(config.colors.active_tab, Color::Magenta);
        assert_eq!(config.keybindings.go_youtube, vec!["4"]);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r##"
api_url = "http://localhost:3000"

[colors]
brand = "#8b5cf6"
"##,
        )
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.colors.brand, Color::Rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(config.colors.footer, Color::DarkGray);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_api_url_precedence() {
        let mut config = Config::default();
        assert_eq!(config.resolve_api_url(None), DEFAULT_API_URL);

        config.api_url = Some("http://from-file".into());
        assert_eq!(config.resolve_api_url(None), "http://from-file");
        assert_eq!(config.resolve_api_url(Some("http://from-env")), "http://from-env");
        assert_eq!(config.resolve_api_url(Some("  ")), "http://from-file");
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::create_default_config(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.colors.badge_bg, Color::LightMagenta);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[colors]\nbrand = \"not-a-color\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
