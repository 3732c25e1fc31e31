//! Pointer input handling.
//!
//! This module defines the pointer events a host delivers and the gesture
//! state machine (idle / drawing) that turns them into strokes. The handlers
//! themselves live on [`crate::surface::DrawingSurface`].

pub mod events;
pub mod gesture;

pub use events::{PointerAction, PointerEvent};
pub use gesture::GestureState;
