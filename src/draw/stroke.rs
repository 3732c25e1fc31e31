//! Stroke definitions: straight segments grouped into one continuous gesture.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// One straight piece of a stroke between two consecutive pointer samples.
///
/// Each segment remembers the paint style that was active when it was drawn.
/// Coordinates are only ever rewritten by the rotation engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Starting X coordinate
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub start_x: f32,
    /// Starting Y coordinate
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub start_y: f32,
    /// Ending X coordinate
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub end_x: f32,
    /// Ending Y coordinate
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub end_y: f32,
    /// Stroke color at the time the segment was drawn
    pub color: Color,
    /// Line thickness in pixels at the time the segment was drawn
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub width: f32,
}

impl Segment {
    pub fn new(
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        color: Color,
        width: f32,
    ) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
            color,
            width,
        }
    }

    /// Zero-length segment anchoring a new stroke at `(x, y)`.
    pub fn dot(x: f32, y: f32, color: Color, width: f32) -> Self {
        Self::new(x, y, x, y, color, width)
    }

    pub fn end(&self) -> (f32, f32) {
        (self.end_x, self.end_y)
    }
}

/// One continuous pointer-down to pointer-up gesture.
///
/// A stroke built through [`Stroke::begin`] always holds at least one segment.
/// Segments are append-only and rendered in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    segments: Vec<Segment>,
}

impl Stroke {
    /// Starts a stroke with a single zero-length segment at `(x, y)`.
    pub fn begin(x: f32, y: f32, color: Color, width: f32) -> Self {
        Self {
            segments: vec![Segment::dot(x, y, color, width)],
        }
    }

    /// Appends a segment from `(from_x, from_y)` to `(x, y)`.
    pub fn extend(&mut self, from_x: f32, from_y: f32, x: f32, y: f32, color: Color, width: f32) {
        self.segments.push(Segment::new(from_x, from_y, x, y, color, width));
    }

    /// Appends a segment continuing from the last recorded point.
    pub fn extend_to(&mut self, x: f32, y: f32, color: Color, width: f32) {
        let (from_x, from_y) = self.last_point().unwrap_or((x, y));
        self.extend(from_x, from_y, x, y, color, width);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the most recent segment.
    pub fn last_point(&self) -> Option<(f32, f32)> {
        self.segments.last().map(Segment::end)
    }

    /// Paint style used for the whole stroke: the first segment's color and width.
    pub fn style(&self) -> Option<(Color, f32)> {
        self.segments.first().map(|seg| (seg.color, seg.width))
    }

    /// Path vertices: the first segment's start followed by every segment's end.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push((first.start_x as f64, first.start_y as f64));
        points.extend(
            self.segments
                .iter()
                .map(|seg| (seg.end_x as f64, seg.end_y as f64)),
        );
        points
    }
}
