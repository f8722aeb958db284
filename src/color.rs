//! Colors and solid-fill images
//!
//! Colors are plain 8-bit RGBA values. They serialize as `#RRGGBB` (opaque)
//! or `#RRGGBBAA` hex strings so they can be edited by hand in the config file.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 is opaque)
    pub a: u8,
}

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    /// The string has neither 6 nor 8 hex digits
    #[error("color {0:?} must have 6 or 8 hex digits")]
    BadLength(String),
    /// The string contains a non-hex character
    #[error("color {0:?} contains an invalid hex digit")]
    BadDigit(String),
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the color has full alpha
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Scale the alpha channel by `factor` (clamped to `0.0..=1.0`)
    #[must_use]
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        let scaled = (f64::from(self.a) * factor.clamp(0.0, 1.0)).round();
        Self {
            a: unit_to_channel(scaled),
            ..self
        }
    }

    /// Composite this color over an opaque `base` (source-over).
    ///
    /// The result is always opaque.
    #[must_use]
    pub fn over(self, base: Self) -> Self {
        let alpha = u16::from(self.a);
        let mix = |src: u8, dst: u8| {
            let value = (u16::from(src) * alpha + u16::from(dst) * (255 - alpha) + 127) / 255;
            u8::try_from(value).unwrap_or(u8::MAX)
        };
        Self::rgb(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }

    /// Convert to a terminal color, dropping alpha
    #[must_use]
    pub const fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Recover an opaque color from a terminal color, if it has a known value
    #[must_use]
    pub const fn from_color(color: Color) -> Option<Self> {
        match color {
            Color::Rgb(r, g, b) => Some(Self::rgb(r, g, b)),
            Color::Black => Some(Self::BLACK),
            Color::White => Some(Self::WHITE),
            _ => None,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the channel range first"
)]
fn unit_to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.trim().strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(s.to_string()));
        };
        if !hex.is_ascii() {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }

        let channel = |start: usize| {
            hex.get(start..start + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// A small raster image filled with a single color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FillImage {
    /// Width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = usize::try_from(y * self.width + x).ok()?;
        self.pixels.get(index).copied()
    }

    /// The color the image stretches to when used as a background
    #[must_use]
    pub fn fill(&self) -> Rgba {
        self.pixels.first().copied().unwrap_or(Rgba::TRANSPARENT)
    }
}

/// Produce a 1×1 image filled with exactly `color`.
#[must_use]
pub fn image_from_color(color: Rgba) -> FillImage {
    FillImage {
        width: 1,
        height: 1,
        pixels: vec![color],
    }
}
