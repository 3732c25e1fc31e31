use crate::draw::Stroke;
use crate::input::{GestureState, PointerAction, PointerEvent};
use log::{debug, trace};

use super::DrawingSurface;

impl DrawingSurface {
    /// Dispatches a pointer event to the matching handler.
    ///
    /// Always returns `true`: the surface consumes every pointer event it is given.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event.action {
            PointerAction::Down => self.on_pointer_down(event.x, event.y),
            PointerAction::Move => self.on_pointer_move(event.x, event.y),
            PointerAction::Up => self.on_pointer_up(event.x, event.y),
            PointerAction::Cancel => self.on_pointer_cancel(event.x, event.y),
        }
        true
    }

    /// Processes a pointer down event.
    ///
    /// # Behavior
    /// - While Idle: starts a new stroke with a zero-length segment at `(x, y)`
    ///   using the current stroke color and width
    /// - While Drawing: ignored (single pointer only)
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.gesture.is_drawing() {
            debug!("Ignoring pointer down at ({x}, {y}) while a stroke is in progress");
            return;
        }

        self.gesture = GestureState::Drawing {
            stroke: Stroke::begin(x, y, self.stroke_color, self.stroke_width),
        };
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - While Drawing: appends a segment from the last recorded point to `(x, y)`
    /// - While Idle: ignored
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let (color, width) = (self.stroke_color, self.stroke_width);
        if let Some(stroke) = self.gesture.stroke_mut() {
            stroke.extend_to(x, y, color, width);
            self.needs_redraw = true;
        }
    }

    /// Processes pointer release.
    ///
    /// # Behavior
    /// When drawing:
    /// - Appends a final segment to `(x, y)` unless that is already the last
    ///   recorded point
    /// - Moves the finished stroke onto the stroke list
    /// - Returns to Idle
    pub fn on_pointer_up(&mut self, x: f32, y: f32) {
        let (color, width) = (self.stroke_color, self.stroke_width);
        let Some(stroke) = self.gesture.stroke_mut() else {
            return;
        };
        if stroke.last_point() != Some((x, y)) {
            stroke.extend_to(x, y, color, width);
        }

        if let Some(stroke) = self.gesture.finish() {
            trace!("Committing stroke with {} segments", stroke.len());
            self.frame.push_stroke(stroke);
        }
        self.needs_redraw = true;
    }

    /// Processes a cancelled gesture exactly like a release, keeping the stroke.
    pub fn on_pointer_cancel(&mut self, x: f32, y: f32) {
        if self.gesture.is_drawing() {
            debug!("Pointer cancelled at ({x}, {y}); finishing stroke");
        }
        self.on_pointer_up(x, y);
    }
}
