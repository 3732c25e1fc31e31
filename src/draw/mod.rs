//! Stroke model, rotation remapping and Cairo-based rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Segment`] / [`Stroke`]: one freehand gesture and its straight pieces
//! - [`Frame`]: ordered container for all finished strokes
//! - [`rotation`]: remapping of recorded points when the surface rotates
//! - Rendering functions and bitmap export for Cairo-based output

pub mod color;
pub mod export;
pub(crate) mod float_serde;
pub mod frame;
pub mod path;
pub mod render;
pub mod rotation;
pub mod stroke;

pub use color::{Color, ColorError};
pub use export::{Bitmap, ExportConfig, ExportError};
pub use frame::Frame;
pub use render::{render_background, render_scene, render_stroke, render_strokes};
pub use rotation::{Orientation, SurfaceFrame};
pub use stroke::{Segment, Stroke};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW};
