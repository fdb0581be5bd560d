//! Keybinding configuration for the TUI.

use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings per action, as written in `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
    pub go_home: Vec<String>,
    pub go_github: Vec<String>,
    pub go_medium: Vec<String>,
    pub go_youtube: Vec<String>,
    pub select: Vec<String>,
    pub back: Vec<String>,
    pub open_in_browser: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            move_left: keys(&["h", "Left"]),
            move_right: keys(&["l", "Right"]),
            next_page: keys(&["n", "PageDown"]),
            prev_page: keys(&["p", "PageUp"]),
            next_tab: keys(&["Tab"]),
            prev_tab: keys(&["BackTab", "Shift+Tab"]),
            go_home: keys(&["1"]),
            go_github: keys(&["2"]),
            go_medium: keys(&["3"]),
            go_youtube: keys(&["4"]),
            select: keys(&["Enter"]),
            back: keys(&["Esc", "Backspace", "b"]),
            open_in_browser: keys(&["o"]),
        }
    }
}

impl KeybindingConfig {
    /// Parse every binding once. Unparseable strings are logged and skipped.
    pub fn keymap(&self) -> Keymap {
        let table: [(&[String], Action); 16] = [
            (&self.quit, Action::Quit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.move_left, Action::MoveLeft),
            (&self.move_right, Action::MoveRight),
            (&self.next_page, Action::NextPage),
            (&self.prev_page, Action::PrevPage),
            (&self.next_tab, Action::NextTab),
            (&self.prev_tab, Action::PrevTab),
            (&self.go_home, Action::GoHome),
            (&self.go_github, Action::GoRepositories),
            (&self.go_medium, Action::GoArticles),
            (&self.go_youtube, Action::GoVideos),
            (&self.select, Action::Select),
            (&self.back, Action::Back),
            (&self.open_in_browser, Action::OpenInBrowser),
        ];

        let mut bindings = Vec::new();
        for (strings, action) in table {
            for s in strings {
                match s.parse::<KeyBinding>() {
                    Ok(binding) => bindings.push((binding, action)),
                    Err(e) => tracing::warn!("Ignoring keybinding {:?}: {}", s, e),
                }
            }
        }
        Keymap { bindings }
    }
}

/// Parsed bindings; the first match in configuration order wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Keymap {
    pub fn action(&self, key: &KeyEvent) -> Action {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is implied for characters that need it (`R`, `?`), so a binding
    /// without Shift also matches the shifted event.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

impl FromStr for KeyBinding {
    type Err = String;

    /// `"j"`, `"Enter"`, `"F5"`, `"Ctrl+c"`, `"Ctrl+Shift+a"`; a lone `"+"` is the plus key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, key)) if !key.is_empty() => (mods, key),
            _ => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "shift" => KeyModifiers::SHIFT,
                "alt" => KeyModifiers::ALT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            };
        }

        Ok(Self {
            code: parse_key_code(key)?,
            modifiers,
        })
    }
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        _ => return Err(format!("Unknown key: {}", s)),
    };
    Ok(code)
}
