//! Color theme built from the `[colors]` config section.
//!
//! The theme is a plain `Copy` value handed to every pane at construction,
//! so all rendering reads the same palette without any global state.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ColorsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub subtext: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub dark: Color,
}

impl Theme {
    /// Parse each configured color, falling back to the default palette
    /// for any value that is not a valid hex color.
    pub fn from_config(colors: &ColorsConfig) -> Self {
        let defaults = ColorsConfig::default();
        let pick = |value: &str, fallback: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(fallback))
                .unwrap_or(Color::Reset)
        };
        Self {
            text: pick(&colors.text, &defaults.text),
            subtext: pick(&colors.subtext, &defaults.subtext),
            primary: pick(&colors.primary, &defaults.primary),
            secondary: pick(&colors.secondary, &defaults.secondary),
            accent: pick(&colors.accent, &defaults.accent),
            success: pick(&colors.success, &defaults.success),
            warning: pick(&colors.warning, &defaults.warning),
            error: pick(&colors.error, &defaults.error),
            dark: pick(&colors.dark, &defaults.dark),
        }
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.subtext)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ColorsConfig::default())
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional) into an RGB color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
