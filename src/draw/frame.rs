//! Frame container for the finished strokes of a drawing.

use super::color::Color;
use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Ordered list of strokes making up the drawing.
///
/// Strokes are kept in draw order (first = bottom layer, last = top layer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    strokes: Vec<Stroke>,
}

impl Frame {
    /// Creates a new empty frame with no strokes.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Creates a frame from existing strokes, dropping any without segments.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self {
            strokes: strokes
                .into_iter()
                .filter(|stroke| !stroke.is_empty())
                .collect(),
        }
    }

    /// Starts a new stroke at `(x, y)` on top of the existing ones.
    pub fn begin_stroke(&mut self, x: f32, y: f32, color: Color, width: f32) {
        self.strokes.push(Stroke::begin(x, y, color, width));
    }

    /// Appends a segment to the most recent stroke.
    ///
    /// Does nothing when the frame has no strokes yet.
    pub fn extend_stroke(
        &mut self,
        from_x: f32,
        from_y: f32,
        x: f32,
        y: f32,
        color: Color,
        width: f32,
    ) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.extend(from_x, from_y, x, y, color, width);
        }
    }

    /// Adds a finished stroke on top of the existing ones.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        if !stroke.is_empty() {
            self.strokes.push(stroke);
        }
    }

    /// Removes and returns the most recently added stroke, if any.
    pub fn remove_last_stroke(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes all strokes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub(crate) fn strokes_mut(&mut self) -> &mut [Stroke] {
        &mut self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
