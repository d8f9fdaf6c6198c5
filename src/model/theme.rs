//! Display theme: the two persisted modes and the colors each one draws with

use crate::model::character::CharacterStatus;
use ratatui::style::Color;
use std::fmt;

/// Light/dark display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything that is not `light` is dark.
    pub fn from_stored(value: &str) -> ThemeMode {
        if value == "light" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn opposite(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph shown in the theme icon slot
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "☀️",
            ThemeMode::Dark => "🌙",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors used by every component for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(16, 18, 27),
        surface: Color::Rgb(32, 35, 48),
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Rgb(151, 206, 76),
        border: Color::Rgb(70, 76, 98),
        error: Color::Rgb(255, 99, 99),
        highlight_bg: Color::Blue,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(245, 246, 250),
        surface: Color::White,
        text: Color::Rgb(28, 30, 38),
        muted: Color::Gray,
        accent: Color::Rgb(0, 140, 170),
        border: Color::Rgb(190, 194, 206),
        error: Color::Rgb(200, 30, 30),
        highlight_bg: Color::Rgb(180, 215, 255),
    };

    /// Indicator color next to a character's status
    pub fn status_color(&self, status: CharacterStatus) -> Color {
        match status {
            CharacterStatus::Alive => Color::Rgb(85, 204, 68),
            CharacterStatus::Dead => Color::Rgb(214, 61, 46),
            CharacterStatus::Unknown => Color::Rgb(158, 158, 158),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeMode::from_stored("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored("sepia"), ThemeMode::Dark);
    }

    #[test]
    fn test_opposite_and_icon() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.icon(), "☀️");
        assert_eq!(ThemeMode::Dark.icon(), "🌙");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeMode::Light.palette(), ThemeMode::Dark.palette());
    }
}
