//! Configuration file support for scribblepad.
//!
//! This module handles loading and validating settings from the configuration
//! file located at `~/.config/scribblepad/config.toml`. Settings include the
//! surface's initial paint color, line thickness and background, plus image
//! export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{ExportSettings, SurfaceConfig};

use crate::draw::{BLACK, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [surface]
/// paint_color = "black"
/// line_thickness = 10.0
/// background_color = "#FFFFFFFF"
/// corner_radius = 100.0
///
/// [export]
/// save_directory = "~/Pictures/Scribblepad"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial surface appearance
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced and a warning is logged:
    /// - `line_thickness`: negative or non-finite values become 0.0 (hairline)
    /// - `corner_radius`: negative or non-finite values become 0.0 (sharp corners)
    /// - unparseable colors revert to black (paint) / white (background)
    fn validate_and_clamp(&mut self) {
        let surface = &mut self.surface;

        if !surface.line_thickness.is_finite() || surface.line_thickness < 0.0 {
            warn!(
                "Invalid line_thickness {:.1}, using 0.0 (hairline)",
                surface.line_thickness
            );
            surface.line_thickness = 0.0;
        }

        if !surface.corner_radius.is_finite() || surface.corner_radius < 0.0 {
            warn!(
                "Invalid corner_radius {:.1}, using 0.0",
                surface.corner_radius
            );
            surface.corner_radius = 0.0;
        }

        if !surface.paint_color.is_valid() {
            warn!(
                "Invalid paint_color {:?}, falling back to black",
                surface.paint_color
            );
            surface.paint_color = ColorSpec::Rgb(rgb_bytes(BLACK));
        }

        if !surface.background_color.is_valid() {
            warn!(
                "Invalid background_color {:?}, falling back to white",
                surface.background_color
            );
            surface.background_color = ColorSpec::Rgb(rgb_bytes(WHITE));
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribblepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}

fn rgb_bytes(color: crate::draw::Color) -> [u8; 3] {
    let argb = color.to_argb();
    [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]
}
