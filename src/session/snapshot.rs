use crate::draw::{Color, Frame, Stroke, SurfaceFrame};
use crate::input::GestureState;
use crate::surface::DrawingSurface;
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CURRENT_VERSION: u32 = 1;

/// Lowest host platform level that supports the typed restore path.
pub const TYPED_RESTORE_MIN_LEVEL: u32 = 24;

/// Captured surface state suitable for serialisation or restoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    /// Every stroke in draw order, including one still being drawn
    pub strokes: Vec<Stroke>,
    pub background_color: Color,
    pub stroke_color: Color,
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    pub stroke_width: f32,
    /// Frame the stroke coordinates were recorded in
    pub frame: SurfaceFrame,
}

/// Surface snapshot wrapped around the host's own opaque state token.
///
/// The token is carried through save and restore without being inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState<P> {
    pub parent: P,
    pub surface: SurfaceSnapshot,
}

/// How the host is able to hand saved bytes back on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreCapability {
    /// Decode straight into the typed record.
    Typed,
    /// Decode into a generic value first and pick fields out one by one.
    Untyped,
}

impl RestoreCapability {
    /// Selects the restore path supported by a host platform level.
    pub fn from_platform_level(level: u32) -> Self {
        if level >= TYPED_RESTORE_MIN_LEVEL {
            Self::Typed
        } else {
            Self::Untyped
        }
    }
}

/// On-disk / in-parcel layout.
#[derive(Debug, Serialize, Deserialize)]
struct StateRecord<P> {
    version: u32,
    parent: P,
    strokes: Vec<Stroke>,
    background_color: Color,
    stroke_color: Color,
    #[serde(with = "crate::draw::float_serde::lossless_f32")]
    stroke_width: f32,
    /// `[angle, width, height]`
    orientation: [i32; 3],
}

impl DrawingSurface {
    /// Captures the complete drawing state.
    ///
    /// A stroke that is still being drawn is included as the last stroke.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            strokes: self.paint_order().cloned().collect(),
            background_color: self.background_color,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            frame: self.last_frame,
        }
    }

    /// Replaces the live state with a snapshot.
    ///
    /// Any gesture in progress is discarded; the surface returns to idle.
    pub fn restore(&mut self, snapshot: SurfaceSnapshot) {
        self.frame = Frame::from_strokes(snapshot.strokes);
        self.gesture = GestureState::Idle;
        self.background_color = snapshot.background_color;
        self.stroke_color = snapshot.stroke_color;
        self.stroke_width = snapshot.stroke_width;
        self.last_frame = snapshot.frame;
        self.needs_redraw = true;

        debug!(
            "Restored {} strokes recorded at {}° {}x{}",
            self.frame.len(),
            self.last_frame.angle,
            self.last_frame.width,
            self.last_frame.height
        );
    }

    /// Wraps the host's parent state together with a snapshot of this surface.
    ///
    /// Returns `None` when the host has no parent state to save.
    pub fn save_state<P>(&self, parent: Option<P>) -> Option<SavedState<P>> {
        let parent = parent?;
        Some(SavedState {
            parent,
            surface: self.snapshot(),
        })
    }

    /// Restores the surface part of `saved` and hands the parent state back unchanged.
    pub fn restore_state<P>(&mut self, saved: SavedState<P>) -> P {
        self.restore(saved.surface);
        saved.parent
    }
}

/// Serialises saved state into its persisted JSON layout.
pub fn encode_state<P: Serialize>(saved: &SavedState<P>) -> Result<Vec<u8>> {
    let snapshot = &saved.surface;
    let record = StateRecord {
        version: CURRENT_VERSION,
        parent: &saved.parent,
        strokes: snapshot.strokes.clone(),
        background_color: snapshot.background_color,
        stroke_color: snapshot.stroke_color,
        stroke_width: snapshot.stroke_width,
        orientation: [
            snapshot.frame.angle,
            snapshot.frame.width,
            snapshot.frame.height,
        ],
    };

    let bytes = serde_json::to_vec(&record).context("failed to serialise surface state")?;
    info!(
        "Encoded surface state ({} strokes, {} bytes)",
        snapshot.strokes.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Decodes bytes produced by [`encode_state`].
///
/// Both capabilities yield the same result; they differ only in how the
/// record is walked.
pub fn decode_state<P: DeserializeOwned>(
    bytes: &[u8],
    capability: RestoreCapability,
) -> Result<SavedState<P>> {
    let record: StateRecord<P> = match capability {
        RestoreCapability::Typed => {
            serde_json::from_slice(bytes).context("failed to parse surface state")?
        }
        RestoreCapability::Untyped => {
            let value: Value =
                serde_json::from_slice(bytes).context("failed to parse surface state")?;
            record_from_value(value)?
        }
    };

    if record.version > CURRENT_VERSION {
        warn!(
            "Surface state version {} is newer than supported version {}; attempting restore",
            record.version, CURRENT_VERSION
        );
    }

    let total = record.strokes.len();
    let strokes: Vec<Stroke> = record
        .strokes
        .into_iter()
        .filter(|stroke| !stroke.is_empty())
        .collect();
    if strokes.len() != total {
        warn!(
            "Dropped {} empty strokes from saved surface state",
            total - strokes.len()
        );
    }

    let [angle, width, height] = record.orientation;
    Ok(SavedState {
        parent: record.parent,
        surface: SurfaceSnapshot {
            strokes,
            background_color: record.background_color,
            stroke_color: record.stroke_color,
            stroke_width: record.stroke_width,
            frame: SurfaceFrame::new(angle, width, height),
        },
    })
}

fn record_from_value<P: DeserializeOwned>(value: Value) -> Result<StateRecord<P>> {
    let Value::Object(mut fields) = value else {
        return Err(anyhow!("surface state is not a JSON object"));
    };

    Ok(StateRecord {
        version: take_field(&mut fields, "version")?,
        parent: take_field(&mut fields, "parent")?,
        strokes: take_field(&mut fields, "strokes")?,
        background_color: take_field(&mut fields, "background_color")?,
        stroke_color: take_field(&mut fields, "stroke_color")?,
        stroke_width: take_field(&mut fields, "stroke_width")?,
        orientation: take_field(&mut fields, "orientation")?,
    })
}

fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, name: &str) -> Result<T> {
    let value = fields
        .remove(name)
        .ok_or_else(|| anyhow!("surface state is missing field '{}'", name))?;
    serde_json::from_value(value).with_context(|| format!("invalid surface state field '{}'", name))
}
