//! Gesture state machine.

use crate::draw::Stroke;

/// Current gesture state.
///
/// While drawing, the stroke in progress lives here rather than in the
/// finished stroke list; it is committed when the pointer is released.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Not actively drawing - waiting for pointer down
    #[default]
    Idle,
    /// Pointer is down and a stroke is being recorded
    Drawing {
        /// Stroke accumulated since pointer down
        stroke: Stroke,
    },
}

impl GestureState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    /// The stroke being drawn, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            GestureState::Drawing { stroke } => Some(stroke),
            GestureState::Idle => None,
        }
    }

    pub(crate) fn stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            GestureState::Drawing { stroke } => Some(stroke),
            GestureState::Idle => None,
        }
    }

    /// Leaves the drawing state, returning the finished stroke.
    pub(crate) fn finish(&mut self) -> Option<Stroke> {
        match std::mem::take(self) {
            GestureState::Drawing { stroke } => Some(stroke),
            GestureState::Idle => None,
        }
    }
}
