//! Scripted input for driving a [`DrawingSurface`] without a live host.
//!
//! A script is a JSON array of steps, each tagged by `op`:
//!
//! ```json
//! [
//!   {"op": "frame", "angle": 0, "width": 400, "height": 300},
//!   {"op": "stroke_color", "color": "red"},
//!   {"op": "pointer", "action": "down", "x": 10.0, "y": 10.0},
//!   {"op": "pointer", "action": "up", "x": 40.0, "y": 25.0},
//!   {"op": "undo"}
//! ]
//! ```
//!
//! A render pass is simulated after every step, so frame changes remap the
//! strokes recorded so far exactly as they would on screen.

use crate::draw::SurfaceFrame;
use crate::input::PointerEvent;
use crate::surface::DrawingSurface;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted host interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Pointer sample delivered to the surface
    Pointer(PointerEvent),
    /// Host surface rotated or resized
    Frame(SurfaceFrame),
    /// Remove the latest finished stroke
    Undo,
    /// Remove every finished stroke
    Clear,
    StrokeColor { color: String },
    StrokeWidth { width: f32 },
    BackgroundColor { color: String },
}

/// Parses a replay script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<ReplayStep>> {
    serde_json::from_str(text).context("invalid replay script")
}

/// Reads and parses a replay script file.
pub fn load_script(path: &Path) -> Result<Vec<ReplayStep>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Applies `steps` to `surface`, starting in `frame`.
///
/// Returns the frame in effect after the last step.
///
/// # Errors
/// Fails on the first step carrying an unparseable color; earlier steps
/// stay applied.
pub fn apply_steps(
    surface: &mut DrawingSurface,
    steps: &[ReplayStep],
    frame: SurfaceFrame,
) -> Result<SurfaceFrame> {
    let mut current = frame;
    surface.sync_frame(current);

    for (index, step) in steps.iter().enumerate() {
        match step {
            ReplayStep::Pointer(event) => {
                surface.on_pointer_event(*event);
            }
            ReplayStep::Frame(next) => current = *next,
            ReplayStep::Undo => surface.undo(),
            ReplayStep::Clear => surface.clear(),
            ReplayStep::StrokeColor { color } => surface
                .set_stroke_color_str(color)
                .with_context(|| format!("step {}: bad stroke color", index))?,
            ReplayStep::StrokeWidth { width } => surface.set_stroke_width(*width),
            ReplayStep::BackgroundColor { color } => surface
                .set_background_color_str(color)
                .with_context(|| format!("step {}: bad background color", index))?,
        }

        if surface.sync_frame(current) {
            debug!("Step {} rotated the surface to {}°", index, current.angle);
        }
        surface.needs_redraw = false;
    }

    info!(
        "Replayed {} steps, {} strokes on surface",
        steps.len(),
        surface.strokes().len()
    );
    Ok(current)
}
