//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::ExportConfig;
use crate::draw::export::expand_tilde;
use crate::draw::path::DEFAULT_CORNER_RADIUS;
use serde::{Deserialize, Serialize};

/// Initial appearance of a drawing surface.
///
/// These are the construction-time attributes of the surface; the host can
/// change stroke color, stroke width and background later at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Initial stroke color (default: black)
    #[serde(default = "default_paint_color")]
    pub paint_color: ColorSpec,

    /// Initial stroke width in pixels; 0 draws one pixel hairlines (default: 10.0)
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f32,

    /// Initial background color (default: white)
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// How far corners of a stroke are rounded off, in pixels (default: 100.0)
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            paint_color: default_paint_color(),
            line_thickness: default_line_thickness(),
            background_color: default_background_color(),
            corner_radius: default_corner_radius(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory for exported images; `~/` is expanded. Defaults to the
    /// pictures directory when unset.
    #[serde(default)]
    pub save_directory: Option<String>,

    /// Filename template with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            save_directory: None,
            filename_template: default_filename_template(),
        }
    }
}

impl ExportSettings {
    /// Resolves these settings into a runtime [`ExportConfig`].
    pub fn to_export_config(&self) -> ExportConfig {
        let mut config = ExportConfig {
            filename_template: self.filename_template.clone(),
            ..ExportConfig::default()
        };
        if let Some(dir) = &self.save_directory {
            config.save_directory = expand_tilde(dir);
        }
        config
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_paint_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_thickness() -> f32 {
    10.0
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
