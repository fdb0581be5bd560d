//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Colors used by the shell and the cards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub brand: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub active_tab: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub inactive_tab: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub active_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub inactive_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub badge_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub badge_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub summary: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub link: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub footer: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand: Color::Magenta,
            active_tab: Color::Magenta,
            inactive_tab: Color::Gray,
            active_border: Color::Magenta,
            inactive_border: Color::DarkGray,
            badge_fg: Color::Black,
            badge_bg: Color::LightMagenta,
            summary: Color::LightCyan,
            metadata: Color::Yellow,
            link: Color::Blue,
            error: Color::LightRed,
            footer: Color::DarkGray,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("grey", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("darkgrey", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
    ("reset", Color::Reset),
];

/// Parse a named color (case-insensitive) or a `#RRGGBB` / `#RGB` hex code.
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| format!("Invalid hex color: {}", s));
    }

    let wanted = s.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, color)| *color)
        .ok_or_else(|| format!("Unknown color: {}", s))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::Rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )),
        // Each nibble doubles: #abc == #aabbcc
        3 => {
            let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 17;
            Some(Color::Rgb(nibble(8), nibble(4), nibble(0)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case() {
        assert_eq!(parse_color_string("Magenta").unwrap(), Color::Magenta);
        assert_eq!(parse_color_string("LIGHTCYAN").unwrap(), Color::LightCyan);
        assert_eq!(parse_color_string(" darkgrey ").unwrap(), Color::DarkGray);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color_string("#8b5cf6").unwrap(), Color::Rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(parse_color_string("#F0A").unwrap(), Color::Rgb(255, 0, 170));
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color_string("purple-ish").is_err());
        assert!(parse_color_string("#12345").is_err());
        assert!(parse_color_string("#+12").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
    }
}
