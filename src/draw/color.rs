//! RGBA color type, predefined colors and color-string parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use scribblepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    #[serde(with = "crate::draw::float_serde::lossless_f64")]
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    #[serde(with = "crate::draw::float_serde::lossless_f64")]
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    #[serde(with = "crate::draw::float_serde::lossless_f64")]
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    #[serde(with = "crate::draw::float_serde::lossless_f64")]
    pub a: f64,
}

/// Errors produced when turning user-supplied text into a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: '{0}'")]
    InvalidColorFormat(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f64 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Packs the color into `0xAARRGGBB`, rounding each channel to 8 bits.
    pub fn to_argb(&self) -> u32 {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Parses a color string.
    ///
    /// Accepted forms are `#RRGGBB`, `#AARRGGBB` and the named colors listed in
    /// [`crate::util::name_to_color`] (case-insensitive).
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(input.to_string());

        if let Some(hex) = input.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(Self::from_argb(0xFF00_0000 | value)),
                8 => Ok(Self::from_argb(value)),
                _ => Err(invalid()),
            };
        }

        crate::util::name_to_color(input).ok_or_else(invalid)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined cyan color (R=0.0, G=1.0, B=1.0)
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Predefined magenta color (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
