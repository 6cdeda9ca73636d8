//! Theme: the colors and metrics every widget draws with.
//!
//! Metrics are authored for a 320x240 display and scaled at draw time.
//! Themes are plain values; swapping one mid-run keeps animation and scroll
//! state intact.

use glint_core::{rgb565, Rgb565};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Complete theme for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Screen background.
    pub bg: Rgb565,
    /// Foreground fill.
    pub fg: Rgb565,
    /// Primary accent.
    pub accent: Rgb565,
    /// Accent while hovered.
    pub accent_hover: Rgb565,
    /// Accent while pressed.
    pub accent_press: Rgb565,
    /// Panel and card background.
    pub surface: Rgb565,
    /// Secondary surface (tracks, list hover).
    pub surface_alt: Rgb565,
    /// Outline color.
    pub border: Rgb565,
    /// Primary text.
    pub text: Rgb565,
    /// De-emphasized text.
    pub text_dim: Rgb565,
    /// Positive status.
    pub success: Rgb565,
    /// Cautionary status.
    pub warning: Rgb565,
    /// Negative status.
    pub danger: Rgb565,
    /// Inner padding, px.
    pub padding: i16,
    /// Gap between widgets, px.
    pub spacing: i16,
    /// Corner radius, px.
    pub corner_radius: i16,
    /// Standard widget height, px.
    pub widget_height: i16,
    /// Outline thickness, px.
    pub border_width: i16,
    /// Base text size in font cells.
    pub font_size: u8,
}

impl Theme {
    /// Dark theme, the default.
    pub const DARK: Self = Self {
        bg: rgb565(18, 18, 24),
        fg: rgb565(30, 30, 42),
        accent: rgb565(90, 120, 255),
        accent_hover: rgb565(110, 140, 255),
        accent_press: rgb565(70, 100, 220),
        surface: rgb565(28, 28, 38),
        surface_alt: rgb565(38, 38, 50),
        border: rgb565(55, 55, 70),
        text: rgb565(230, 230, 240),
        text_dim: rgb565(130, 130, 150),
        success: rgb565(80, 200, 120),
        warning: rgb565(255, 180, 50),
        danger: rgb565(240, 70, 70),
        padding: 6,
        spacing: 4,
        corner_radius: 4,
        widget_height: 24,
        border_width: 1,
        font_size: 1,
    };

    /// Light theme.
    pub const LIGHT: Self = Self {
        bg: rgb565(240, 240, 245),
        fg: rgb565(255, 255, 255),
        accent: rgb565(60, 100, 240),
        accent_hover: rgb565(80, 120, 255),
        accent_press: rgb565(40, 80, 200),
        surface: rgb565(250, 250, 252),
        surface_alt: rgb565(235, 235, 240),
        border: rgb565(200, 200, 210),
        text: rgb565(30, 30, 40),
        text_dim: rgb565(120, 120, 140),
        success: rgb565(50, 180, 100),
        warning: rgb565(230, 160, 30),
        danger: rgb565(220, 50, 50),
        ..Self::DARK
    };

    /// One-bit theme for monochrome panels.
    pub const MONO: Self = Self {
        bg: Rgb565::BLACK,
        fg: Rgb565::WHITE,
        accent: Rgb565::WHITE,
        accent_hover: Rgb565::WHITE,
        accent_press: Rgb565::WHITE,
        surface: Rgb565::BLACK,
        surface_alt: Rgb565::BLACK,
        border: Rgb565::WHITE,
        text: Rgb565::WHITE,
        text_dim: Rgb565::WHITE,
        success: Rgb565::WHITE,
        warning: Rgb565::WHITE,
        danger: Rgb565::WHITE,
        padding: 2,
        spacing: 2,
        corner_radius: 0,
        widget_height: 12,
        border_width: 1,
        font_size: 1,
    };

    const COLOR_KEYS: [&str; 13] = [
        "bg",
        "fg",
        "accent",
        "accent_hover",
        "accent_press",
        "surface",
        "surface_alt",
        "border",
        "text",
        "text_dim",
        "success",
        "warning",
        "danger",
    ];

    /// Checks every metric against its legal range.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidMetric`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        let non_negative = [
            ("padding", self.padding),
            ("spacing", self.spacing),
            ("corner_radius", self.corner_radius),
            ("border_width", self.border_width),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::InvalidMetric { field, value });
            }
        }
        if self.widget_height < 1 {
            return Err(ConfigError::InvalidMetric {
                field: "widget_height",
                value: self.widget_height,
            });
        }
        if self.font_size < 1 {
            return Err(ConfigError::InvalidMetric {
                field: "font_size",
                value: i16::from(self.font_size),
            });
        }
        Ok(())
    }

    /// Parses a theme document.
    ///
    /// Any field may be omitted. Omitted fields come from the preset named
    /// by an optional top-level `preset = "dark" | "light" | "mono"` key,
    /// dark if absent. Colors are raw RGB565 integers or `"#RRGGBB"`.
    ///
    /// # Errors
    ///
    /// Malformed TOML, an unknown preset, a bad color string or an
    /// out-of-range metric.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let mut overrides: toml::Table = toml::from_str(text)?;

        let preset = match overrides.remove("preset") {
            Some(toml::Value::String(name)) => {
                ThemePreset::from_name(&name).ok_or(ConfigError::UnknownPreset(name))?
            }
            Some(other) => return Err(ConfigError::UnknownPreset(other.to_string())),
            None => ThemePreset::Dark,
        };

        for key in Self::COLOR_KEYS {
            if let Some(toml::Value::String(s)) = overrides.get(key) {
                if Rgb565::parse_hex(s).is_none() {
                    return Err(ConfigError::InvalidColor(format!("{key} = \"{s}\"")));
                }
            }
        }

        let mut merged: toml::Table = toml::from_str(&toml::to_string(&preset.theme())?)?;
        merged.extend(overrides);
        let theme: Self = toml::Value::Table(merged).try_into()?;
        theme.validate()?;

        tracing::debug!(?preset, "theme loaded");
        Ok(theme)
    }

    /// Writes the theme as TOML with colors as raw RGB565 integers.
    ///
    /// # Errors
    ///
    /// Only if the TOML serializer rejects the document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Named reference themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// [`Theme::DARK`]
    #[default]
    Dark,
    /// [`Theme::LIGHT`]
    Light,
    /// [`Theme::MONO`]
    Mono,
}

impl ThemePreset {
    /// Resolves to the preset's theme.
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::DARK,
            Self::Light => Theme::LIGHT,
            Self::Mono => Theme::MONO,
        }
    }

    /// Looks a preset up by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "mono" => Some(Self::Mono),
            _ => None,
        }
    }
}

impl From<ThemePreset> for Theme {
    fn from(preset: ThemePreset) -> Self {
        preset.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_reference_values() {
        let t = Theme::DARK;
        assert_eq!(t.accent, rgb565(90, 120, 255));
        assert_eq!(t.accent.raw(), 0x5BDF);
        assert_eq!(
            (t.padding, t.spacing, t.corner_radius, t.widget_height, t.font_size),
            (6, 4, 4, 24, 1)
        );
    }

    #[test]
    fn test_light_shares_dark_metrics() {
        let t = Theme::LIGHT;
        assert_eq!(t.bg, rgb565(240, 240, 245));
        assert_eq!(t.fg, Rgb565::WHITE);
        assert_eq!(t.border_width, 1);
        assert_eq!(t.widget_height, 24);
    }

    #[test]
    fn test_mono() {
        let t = ThemePreset::Mono.theme();
        assert_eq!(t.bg, Rgb565::BLACK);
        assert_eq!(t.accent, Rgb565::WHITE);
        assert_eq!((t.padding, t.corner_radius, t.widget_height), (2, 0, 12));
    }

    #[test]
    fn test_presets_validate() {
        for preset in [ThemePreset::Dark, ThemePreset::Light, ThemePreset::Mono] {
            assert!(preset.theme().validate().is_ok());
        }
    }

    #[test]
    fn test_toml_round_trip_is_bit_exact() {
        let text = Theme::LIGHT.to_toml_string().unwrap();
        let back = Theme::from_toml_str(&text).unwrap();
        assert_eq!(back, Theme::LIGHT);
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_toml_str("accent = \"#FF0000\"\npadding = 10\n").unwrap();
        assert_eq!(theme.accent, Rgb565::RED);
        assert_eq!(theme.padding, 10);
        assert_eq!(theme.bg, Theme::DARK.bg);
    }

    #[test]
    fn test_preset_key() {
        let theme = Theme::from_toml_str("preset = \"mono\"\nwidget_height = 16\n").unwrap();
        assert_eq!(theme.widget_height, 16);
        assert_eq!(theme.bg, Theme::MONO.bg);
        assert_eq!(theme.padding, 2);
    }

    #[test]
    fn test_empty_document_is_dark() {
        assert_eq!(Theme::from_toml_str("").unwrap(), Theme::DARK);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Theme::from_toml_str("padding = -1"),
            Err(ConfigError::InvalidMetric { field: "padding", value: -1 })
        ));
        assert!(matches!(
            Theme::from_toml_str("widget_height = 0"),
            Err(ConfigError::InvalidMetric { field: "widget_height", .. })
        ));
        assert!(matches!(
            Theme::from_toml_str("font_size = 0"),
            Err(ConfigError::InvalidMetric { field: "font_size", .. })
        ));
        assert!(matches!(
            Theme::from_toml_str("text = \"white\""),
            Err(ConfigError::InvalidColor(_))
        ));
        assert!(matches!(
            Theme::from_toml_str("preset = \"neon\""),
            Err(ConfigError::UnknownPreset(_))
        ));
        assert!(matches!(
            Theme::from_toml_str("padding = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
