//! # Configuration Error Types
//!
//! Drawing never fails. The only fallible surface is loading a theme, which
//! happens once at startup.

use thiserror::Error;

/// Errors raised while loading or saving a theme.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid TOML, or a field has the wrong type.
    #[error("theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The theme could not be written out.
    #[error("theme serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A metric is outside its legal range.
    #[error("invalid metric: {field} = {value}")]
    InvalidMetric {
        /// Field name as written in the file.
        field: &'static str,
        /// Rejected value.
        value: i16,
    },

    /// A color string is not `#RRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// `preset = "..."` names no known preset.
    #[error("unknown theme preset: {0}")]
    UnknownPreset(String),
}

/// Result alias for theme configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
