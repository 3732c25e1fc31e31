//! Embeddable freehand drawing surface.
//!
//! [`DrawingSurface`] records single-pointer strokes, keeps them attached to
//! the content when the host rotates, renders them as smoothed paths with
//! Cairo, exports the result as a bitmap and saves/restores its state around
//! an opaque host token. The `scribblepad` binary drives it from a replay
//! script.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod session;
pub mod surface;
pub mod util;

pub use config::Config;
pub use draw::{Bitmap, Color, Stroke, SurfaceFrame};
pub use input::{PointerAction, PointerEvent};
pub use session::{RestoreCapability, SavedState, SurfaceSnapshot};
pub use surface::DrawingSurface;
