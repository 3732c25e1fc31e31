//! The embeddable drawing surface.
//!
//! [`DrawingSurface`] owns the whole canvas state: finished strokes, the stroke
//! currently being drawn, paint style, background and the frame (orientation and
//! size) the recorded coordinates belong to. Pointer handling lives in
//! `pointer.rs`, render passes and export in `render.rs`, and state
//! snapshots in [`crate::session`].

mod pointer;
mod render;

use crate::config::SurfaceConfig;
use crate::draw::path::DEFAULT_CORNER_RADIUS;
use crate::draw::{BLACK, Color, ColorError, Frame, Stroke, SurfaceFrame, WHITE};
use crate::input::GestureState;
use log::debug;

/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 10.0;

/// Freehand drawing surface state.
///
/// All methods run on the host's UI thread; nothing blocks and nothing is
/// shared between instances.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    /// Finished strokes in draw order
    pub(crate) frame: Frame,
    /// Idle / drawing state machine holding the stroke in progress
    pub(crate) gesture: GestureState,
    /// Fill color painted before any stroke
    pub(crate) background_color: Color,
    /// Color applied to newly drawn segments
    pub(crate) stroke_color: Color,
    /// Width applied to newly drawn segments (0 = hairline)
    pub(crate) stroke_width: f32,
    /// Corner rounding distance used when building stroke paths
    pub(crate) corner_radius: f64,
    /// Frame observed on the previous render pass
    pub(crate) last_frame: SurfaceFrame,
    /// Whether the host should schedule a render pass
    pub needs_redraw: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// Creates a surface with black 10px strokes on a white background.
    pub fn new() -> Self {
        Self::with_style(BLACK, DEFAULT_STROKE_WIDTH, WHITE)
    }

    /// Creates a surface with the given initial paint style.
    pub fn with_style(stroke_color: Color, stroke_width: f32, background_color: Color) -> Self {
        Self {
            frame: Frame::new(),
            gesture: GestureState::Idle,
            background_color,
            stroke_color,
            stroke_width,
            corner_radius: DEFAULT_CORNER_RADIUS,
            last_frame: SurfaceFrame::UNSET,
            needs_redraw: true,
        }
    }

    /// Creates a surface from declarative attributes.
    pub fn from_config(config: &SurfaceConfig) -> Self {
        let mut surface = Self::with_style(
            config.paint_color.to_color(BLACK),
            config.line_thickness,
            config.background_color.to_color(WHITE),
        );
        surface.corner_radius = config.corner_radius;
        surface
    }

    // ------------------------------------------------------------------
    // Paint style
    // ------------------------------------------------------------------

    /// Sets the color used for strokes drawn from now on.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Sets the stroke color from a `#RRGGBB`, `#AARRGGBB` or named color string.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] and keeps the current color
    /// when the string cannot be parsed.
    pub fn set_stroke_color_str(&mut self, color: &str) -> Result<(), ColorError> {
        self.stroke_color = Color::parse(color)?;
        Ok(())
    }

    /// Sets the width used for strokes drawn from now on. Pass 0 for a one
    /// pixel hairline.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    /// Sets the background fill color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.needs_redraw = true;
    }

    /// Sets the background color from a color string.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] and keeps the current color
    /// when the string cannot be parsed.
    pub fn set_background_color_str(&mut self, color: &str) -> Result<(), ColorError> {
        self.set_background_color(Color::parse(color)?);
        Ok(())
    }

    /// Sets how far stroke corners are rounded off, in pixels.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius.max(0.0);
        self.needs_redraw = true;
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    // ------------------------------------------------------------------
    // Strokes
    // ------------------------------------------------------------------

    /// Finished strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        self.frame.strokes()
    }

    /// The stroke currently being drawn, if the pointer is down.
    pub fn stroke_in_progress(&self) -> Option<&Stroke> {
        self.gesture.stroke()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Frame (orientation and size) the recorded coordinates belong to.
    pub fn last_frame(&self) -> SurfaceFrame {
        self.last_frame
    }

    /// Removes the most recently finished stroke.
    ///
    /// Does nothing when there are no finished strokes. A stroke still being
    /// drawn is not affected.
    pub fn undo(&mut self) {
        if let Some(stroke) = self.frame.remove_last_stroke() {
            debug!(
                "Undo removed stroke with {} segments ({} remaining)",
                stroke.len(),
                self.frame.len()
            );
            self.needs_redraw = true;
        }
    }

    /// Removes every finished stroke.
    pub fn clear(&mut self) {
        if !self.frame.is_empty() {
            self.frame.clear();
            self.needs_redraw = true;
        }
    }

    /// Finished strokes followed by the stroke in progress, in paint order.
    pub(crate) fn paint_order(&self) -> impl Iterator<Item = &Stroke> {
        self.frame.strokes().iter().chain(self.gesture.stroke())
    }
}
