//! Surface state persistence (save/restore) support.
//!
//! Captures the drawing state of a [`crate::surface::DrawingSurface`] around
//! the host's own opaque state token, encodes it to bytes, and restores it
//! after the host comes back (for example after a rotation recreated it).
//! State can also be written to and read from a file.

mod snapshot;
mod storage;

pub use snapshot::{
    RestoreCapability, SavedState, SurfaceSnapshot, TYPED_RESTORE_MIN_LEVEL, decode_state,
    encode_state,
};
pub use storage::{read_state_file, write_state_file};

#[cfg(test)]
mod tests;
