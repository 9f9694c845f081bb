//! RGBA color value type with parsing for the configuration surface.
//!
//! Configuration files reference colors as `#rrggbb` hex strings or by the
//! small set of CSS names the default element palette uses. Anything else is
//! an [`Error::InvalidConfig`].
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` hex string or a supported named color.
    pub fn parse(input: &str) -> Result<Color> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(Error::InvalidConfig(format!(
                    "color '{trimmed}' must be #rrggbb"
                )));
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| {
                Error::InvalidConfig(format!("color '{trimmed}' is not valid hex"))
            })?;
            return Ok(Color::rgb(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            ));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::rgb(255, 0, 0)),
            "green" => Ok(Color::rgb(0, 128, 0)),
            "blue" => Ok(Color::rgb(0, 0, 255)),
            "yellow" => Ok(Color::rgb(255, 255, 0)),
            "orange" => Ok(Color::rgb(255, 165, 0)),
            "brown" => Ok(Color::rgb(165, 42, 42)),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            "lightblue" => Ok(Color::rgb(173, 216, 230)),
            "skyblue" => Ok(Color::rgb(135, 206, 235)),
            "forestgreen" => Ok(Color::rgb(34, 139, 34)),
            "saddlebrown" => Ok(Color::rgb(139, 69, 19)),
            other => Err(Error::InvalidConfig(format!("unknown color '{other}'"))),
        }
    }

    /// Scale the alpha channel by an opacity factor in [0, 1].
    pub fn with_opacity(self, opacity: f32) -> Color {
        let factor = opacity.clamp(0.0, 1.0);
        Color {
            a: (self.a as f32 * factor).round() as u8,
            ..self
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}
