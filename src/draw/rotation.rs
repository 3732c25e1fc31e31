//! Orientation-change remapping of recorded stroke coordinates.
//!
//! When the host surface rotates between two render passes, every point that
//! was recorded in the old frame is rewritten into the new frame so existing
//! strokes stay attached to the same content. The twelve directed transforms
//! below form a fixed lookup table keyed by `(previous, new)` orientation, each
//! with offsets taken from the previous frame's dimensions.

use super::stroke::Stroke;
use log::debug;
use serde::{Deserialize, Serialize};

/// Angle value recorded before any frame has been observed.
pub const UNSET_ANGLE: i32 = -1;

/// Device orientation, one of four fixed values 90° apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Maps an angle in degrees to an orientation. Anything other than
    /// 0, 90, 180 or 270 is unrecognized.
    pub fn from_degrees(angle: i32) -> Option<Self> {
        match angle {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Orientation and dimensions defining the coordinate space of stroke points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    /// Orientation angle in degrees
    pub angle: i32,
    /// Surface width in pixels
    pub width: i32,
    /// Surface height in pixels
    pub height: i32,
}

impl SurfaceFrame {
    /// Sentinel for "no frame observed yet".
    pub const UNSET: SurfaceFrame = SurfaceFrame {
        angle: UNSET_ANGLE,
        width: -1,
        height: -1,
    };

    pub const fn new(angle: i32, width: i32, height: i32) -> Self {
        Self {
            angle,
            width,
            height,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.angle == UNSET_ANGLE
    }

    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_degrees(self.angle)
    }
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Current dimensions plus the offsets between the previous and current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TransformParams {
    width: f32,
    height: f32,
    /// previous width - current height
    width_diff: f32,
    /// previous height - current width
    height_diff: f32,
}

impl TransformParams {
    fn between(previous: SurfaceFrame, current: SurfaceFrame) -> Self {
        Self {
            width: current.width as f32,
            height: current.height as f32,
            width_diff: previous.width.wrapping_sub(current.height) as f32,
            height_diff: previous.height.wrapping_sub(current.width) as f32,
        }
    }
}

type PointTransform = fn(f32, f32, &TransformParams) -> (f32, f32);

fn flip(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (p.width - x, p.height - y)
}

fn quarter_with_offset(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (y - p.height_diff, p.height - x)
}

fn reverse_quarter_with_offset(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (p.width - (y - p.height_diff), x - p.width_diff)
}

fn quarter_offset_both(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (y - p.height_diff, p.height - (x - p.width_diff))
}

fn reverse_quarter(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (p.width - y, x)
}

fn quarter(x: f32, y: f32, p: &TransformParams) -> (f32, f32) {
    (y, p.height - x)
}

/// Looks up the directed transform for an orientation change.
///
/// Returns `None` when both orientations are the same.
fn transform_for(from: Orientation, to: Orientation) -> Option<PointTransform> {
    use Orientation::*;

    let transform: PointTransform = match (from, to) {
        (Deg0, Deg90) => quarter_with_offset,
        (Deg0, Deg180) => flip,
        (Deg0, Deg270) => reverse_quarter_with_offset,

        (Deg90, Deg0) => reverse_quarter_with_offset,
        (Deg90, Deg180) => quarter_offset_both,
        (Deg90, Deg270) => flip,

        (Deg180, Deg0) => flip,
        (Deg180, Deg90) => reverse_quarter,
        (Deg180, Deg270) => quarter,

        (Deg270, Deg0) => quarter_with_offset,
        (Deg270, Deg90) => flip,
        (Deg270, Deg180) => quarter,

        (Deg0, Deg0) | (Deg90, Deg90) | (Deg180, Deg180) | (Deg270, Deg270) => {
            return None;
        }
    };
    Some(transform)
}

fn plan(
    previous: SurfaceFrame,
    current: SurfaceFrame,
) -> Option<(PointTransform, TransformParams)> {
    if previous.is_unset() || previous.angle == current.angle {
        return None;
    }
    let transform = transform_for(previous.orientation()?, current.orientation()?)?;
    Some((transform, TransformParams::between(previous, current)))
}

/// Remaps a single point from `previous` into `current`.
///
/// Returns the point unchanged when no transform applies.
pub fn remap_point(x: f32, y: f32, previous: SurfaceFrame, current: SurfaceFrame) -> (f32, f32) {
    match plan(previous, current) {
        Some((transform, params)) => transform(x, y, &params),
        None => (x, y),
    }
}

/// Rewrites the start and end point of every segment of every stroke.
///
/// Returns `true` if a transform was applied. The first pass (unset previous
/// frame), an unchanged angle, or an unrecognized angle leave all points as is.
pub fn remap_strokes<'a, I>(strokes: I, previous: SurfaceFrame, current: SurfaceFrame) -> bool
where
    I: IntoIterator<Item = &'a mut Stroke>,
{
    let Some((transform, params)) = plan(previous, current) else {
        return false;
    };

    let mut segment_count = 0usize;
    for stroke in strokes {
        for segment in stroke.segments_mut() {
            let (sx, sy) = transform(segment.start_x, segment.start_y, &params);
            let (ex, ey) = transform(segment.end_x, segment.end_y, &params);
            segment.start_x = sx;
            segment.start_y = sy;
            segment.end_x = ex;
            segment.end_y = ey;
            segment_count += 1;
        }
    }

    debug!(
        "Remapped {} segments for rotation {}° -> {}° ({}x{} -> {}x{})",
        segment_count,
        previous.angle,
        current.angle,
        previous.width,
        previous.height,
        current.width,
        current.height
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    const PORTRAIT: SurfaceFrame = SurfaceFrame::new(0, 100, 200);

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn portrait_to_landscape_matches_hand_computed_point() {
        let landscape = SurfaceFrame::new(90, 200, 100);
        // width_diff = 100 - 100 = 0, height_diff = 200 - 200 = 0
        assert_eq!(remap_point(10.0, 30.0, PORTRAIT, landscape), (30.0, 90.0));
    }

    #[test]
    fn offsets_come_from_previous_dimensions() {
        // Portrait 100x180 rotated into a 190x90 landscape surface.
        let previous = SurfaceFrame::new(0, 100, 180);
        let current = SurfaceFrame::new(90, 190, 90);
        // height_diff = 180 - 190 = -10, width_diff = 100 - 90 = 10
        assert_eq!(remap_point(10.0, 30.0, previous, current), (40.0, 80.0));

        let current = SurfaceFrame::new(270, 190, 90);
        assert_eq!(remap_point(10.0, 30.0, previous, current), (150.0, 0.0));
    }

    #[test]
    fn every_directed_pair_uses_its_table_entry() {
        let previous = |angle| SurfaceFrame::new(angle, 120, 300);
        let current = |angle| SurfaceFrame::new(angle, 280, 110);
        // w = 280, h = 110, wd = 120 - 110 = 10, hd = 300 - 280 = 20
        let (x, y) = (7.0, 13.0);
        let cases = [
            (0, 90, (y - 20.0, 110.0 - x)),
            (0, 180, (280.0 - x, 110.0 - y)),
            (0, 270, (280.0 - (y - 20.0), x - 10.0)),
            (90, 0, (280.0 - (y - 20.0), x - 10.0)),
            (90, 180, (y - 20.0, 110.0 - (x - 10.0))),
            (90, 270, (280.0 - x, 110.0 - y)),
            (180, 0, (280.0 - x, 110.0 - y)),
            (180, 90, (280.0 - y, x)),
            (180, 270, (y, 110.0 - x)),
            (270, 0, (y - 20.0, 110.0 - x)),
            (270, 90, (280.0 - x, 110.0 - y)),
            (270, 180, (y, 110.0 - x)),
        ];
        for (from, to, expected) in cases {
            assert_eq!(
                remap_point(x, y, previous(from), current(to)),
                expected,
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn identity_leaves_points_untouched() {
        for angle in [0, 90, 180, 270] {
            let frame = SurfaceFrame::new(angle, 640, 480);
            let mut strokes = vec![Stroke::begin(12.5, 99.0, BLACK, 2.0)];
            assert!(!remap_strokes(strokes.iter_mut(), frame, frame));
            assert_eq!(strokes[0].last_point(), Some((12.5, 99.0)));
        }
    }

    #[test]
    fn quarter_turn_round_trips_with_swapped_dimensions() {
        let previous = SurfaceFrame::new(0, 100, 180);
        let rotated = SurfaceFrame::new(90, 190, 90);
        let back = SurfaceFrame::new(0, 100, 180);

        for point in [(0.0, 0.0), (10.0, 30.0), (99.5, 179.25), (-20.0, 400.0)] {
            let there = remap_point(point.0, point.1, previous, rotated);
            let again = remap_point(there.0, there.1, rotated, back);
            assert!(close(again, point), "{point:?} came back as {again:?}");
        }
    }

    #[test]
    fn unset_and_unknown_angles_are_skipped() {
        let landscape = SurfaceFrame::new(90, 200, 100);
        assert_eq!(remap_point(1.0, 2.0, SurfaceFrame::UNSET, landscape), (1.0, 2.0));
        assert_eq!(
            remap_point(1.0, 2.0, SurfaceFrame::new(45, 100, 200), landscape),
            (1.0, 2.0)
        );
        assert_eq!(
            remap_point(1.0, 2.0, PORTRAIT, SurfaceFrame::new(360, 100, 200)),
            (1.0, 2.0)
        );
    }

    #[test]
    fn remap_strokes_rewrites_both_endpoints() {
        let mut stroke = Stroke::begin(10.0, 10.0, BLACK, 1.0);
        stroke.extend_to(20.0, 10.0, BLACK, 1.0);
        let mut strokes = vec![stroke];

        let landscape = SurfaceFrame::new(90, 200, 100);
        assert!(remap_strokes(strokes.iter_mut(), PORTRAIT, landscape));

        let seg = strokes[0].segments()[1];
        assert_eq!((seg.start_x, seg.start_y), (10.0, 90.0));
        assert_eq!((seg.end_x, seg.end_y), (10.0, 80.0));
    }

    #[test]
    fn orientation_degrees_round_trip() {
        for angle in [0, 90, 180, 270] {
            assert_eq!(Orientation::from_degrees(angle).unwrap().degrees(), angle);
        }
        assert!(Orientation::from_degrees(-1).is_none());
    }
}
