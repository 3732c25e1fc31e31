//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex string (#RRGGBB / #AARRGGBB)
/// paint_color = "black"
/// background_color = "#FFFDF6E3"
///
/// # Custom RGB color (0-255 per component)
/// paint_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color or `#RRGGBB` / `#AARRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings are parsed with [`Color::parse`]; unparseable strings fall back to
    /// `fallback` with a warning. RGB arrays are converted from 0-255 range to
    /// 0.0-1.0 range with full opacity.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|err| {
                warn!("{}, using fallback color", err);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }

    /// Whether the specification names a color [`Color::parse`] understands.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::parse(name).is_ok(),
            ColorSpec::Rgb(_) => true,
        }
    }
}
