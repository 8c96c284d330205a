//! Colors for lines, dots and backgrounds.
//!
//! Accepts anything CSS accepts ("black", "#ff8800", "rgb(10, 20, 30)"),
//! parsed with svgtypes so the names match what the SVG renderer understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KolamError;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 255 }
    }

    /// `#rrggbb` form, used for SVG attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Opacity in 0.0..=1.0.
    pub fn opacity(&self) -> f64 {
        self.alpha as f64 / 255.0
    }
}

impl FromStr for Color {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = svgtypes::Color::from_str(s.trim())
            .map_err(|e| KolamError::validation("color", format!("'{}' is not a color: {}", s, e)))?;
        Ok(Color {
            red: parsed.red,
            green: parsed.green,
            blue: parsed.blue,
            alpha: parsed.alpha,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = KolamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.alpha)
        }
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex() {
        assert_eq!("black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("rgb(10, 20, 30)".parse::<Color>().unwrap(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn rejects_garbage() {
        let err = "not-a-color\"/><script".parse::<Color>().unwrap_err();
        assert!(matches!(err, KolamError::Validation { field: "color", .. }));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let color = Color::rgb(200, 16, 46);
        assert_eq!(color.to_string(), "#c8102e");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}
