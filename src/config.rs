//! Display configuration

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Color mode of the panel, selects one of the two fixed layouts
///
/// Only `black` is recognised by name, every other value selects the
/// alternative layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    #[default]
    Black,
    Other(String),
}

impl ColorMode {
    pub fn is_black(&self) -> bool {
        matches!(self, ColorMode::Black)
    }
}

impl From<String> for ColorMode {
    fn from(value: String) -> Self {
        if value == "black" {
            ColorMode::Black
        } else {
            ColorMode::Other(value)
        }
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Black => "black".to_string(),
            ColorMode::Other(value) => value,
        }
    }
}

impl FromStr for ColorMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColorMode::from(s.to_string()))
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Black => write!(f, "black"),
            ColorMode::Other(value) => write!(f, "{}", value),
        }
    }
}

/// The `ui.display` section of the application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorMode,
}

impl DisplayConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }
}
