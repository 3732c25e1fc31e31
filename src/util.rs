//! Utility functions for color names and small geometry helpers.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by [`Color::parse`] and by the configuration system.
///
/// # Supported Names (case-insensitive)
/// - "red", "blue", "green", "black", "white", "gray"/"grey", "cyan",
///   "magenta", "yellow", "lightgray"/"lightgrey", "darkgray"/"darkgrey"
/// - web names: "aqua", "fuchsia", "lime", "maroon", "navy", "olive",
///   "purple", "silver", "teal"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "red" => RED,
        "blue" => BLUE,
        "green" | "lime" => GREEN,
        "black" => BLACK,
        "white" => WHITE,
        "gray" | "grey" => Color::from_argb(0xFF88_8888),
        "lightgray" | "lightgrey" => Color::from_argb(0xFFCC_CCCC),
        "darkgray" | "darkgrey" => Color::from_argb(0xFF44_4444),
        "cyan" | "aqua" => CYAN,
        "magenta" | "fuchsia" => MAGENTA,
        "yellow" => YELLOW,
        "maroon" => Color::from_argb(0xFF80_0000),
        "navy" => Color::from_argb(0xFF00_0080),
        "olive" => Color::from_argb(0xFF80_8000),
        "purple" => Color::from_argb(0xFF80_0080),
        "silver" => Color::from_argb(0xFFC0_C0C0),
        "teal" => Color::from_argb(0xFF00_8080),
        _ => return None,
    };
    Some(color)
}

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
