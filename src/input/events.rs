//! Generic pointer event types delivered by the host.

use serde::{Deserialize, Serialize};

/// Phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerAction {
    /// Pointer touched down (starts a stroke)
    Down,
    /// Pointer moved while down
    Move,
    /// Pointer lifted (finishes the stroke)
    Up,
    /// Gesture aborted by the host; treated exactly like [`PointerAction::Up`]
    Cancel,
}

/// A pointer sample in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Cancel, x, y)
    }
}
