//! Corner-smoothed path construction for freehand strokes.
//!
//! A stroke is a polyline through pointer samples. Sharp joints between
//! consecutive samples are replaced with a quadratic curve whose control point
//! is the original vertex, cutting back at most `radius` pixels (and never more
//! than half of either adjoining edge) on each side of the corner.

use crate::util;

/// Default cut-back distance used to round polyline corners.
pub const DEFAULT_CORNER_RADIUS: f64 = 100.0;

/// One drawing instruction of a smoothed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Quadratic curve through control point `(cx, cy)` ending at `(x, y)`
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
}

/// Builds the smoothed outline for a sequence of path vertices.
///
/// Consecutive duplicate points are collapsed first. A path that collapses to a
/// single point becomes a zero-length line so round caps still paint a dot.
pub fn smoothed_path(points: &[(f64, f64)], radius: f64) -> Vec<PathOp> {
    let mut vertices: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &point in points {
        if vertices.last() != Some(&point) {
            vertices.push(point);
        }
    }

    let Some(&(x0, y0)) = vertices.first() else {
        return Vec::new();
    };

    let mut ops = vec![PathOp::MoveTo(x0, y0)];
    if vertices.len() == 1 {
        ops.push(PathOp::LineTo(x0, y0));
        return ops;
    }

    let radius = radius.max(0.0);
    for window in vertices.windows(3) {
        let (prev, corner, next) = (window[0], window[1], window[2]);
        let len_in = util::distance(prev, corner);
        let len_out = util::distance(corner, next);
        let cut_in = radius.min(len_in / 2.0);
        let cut_out = radius.min(len_out / 2.0);

        if cut_in <= 0.0 || cut_out <= 0.0 {
            ops.push(PathOp::LineTo(corner.0, corner.1));
            continue;
        }

        let entry = (
            corner.0 - (corner.0 - prev.0) / len_in * cut_in,
            corner.1 - (corner.1 - prev.1) / len_in * cut_in,
        );
        let exit = (
            corner.0 + (next.0 - corner.0) / len_out * cut_out,
            corner.1 + (next.1 - corner.1) / len_out * cut_out,
        );
        ops.push(PathOp::LineTo(entry.0, entry.1));
        ops.push(PathOp::QuadTo {
            cx: corner.0,
            cy: corner.1,
            x: exit.0,
            y: exit.1,
        });
    }

    if let Some(&(xn, yn)) = vertices.last() {
        ops.push(PathOp::LineTo(xn, yn));
    }
    ops
}

/// Replays path operations onto a Cairo context.
///
/// Quadratic segments are promoted to cubic Béziers, which Cairo draws natively.
pub fn append_to_context(ctx: &cairo::Context, ops: &[PathOp]) {
    let mut current = (0.0, 0.0);
    for op in ops {
        match *op {
            PathOp::MoveTo(x, y) => {
                ctx.move_to(x, y);
                current = (x, y);
            }
            PathOp::LineTo(x, y) => {
                ctx.line_to(x, y);
                current = (x, y);
            }
            PathOp::QuadTo { cx, cy, x, y } => {
                let c1 = (
                    current.0 + 2.0 / 3.0 * (cx - current.0),
                    current.1 + 2.0 / 3.0 * (cy - current.1),
                );
                let c2 = (x + 2.0 / 3.0 * (cx - x), y + 2.0 / 3.0 * (cy - y));
                ctx.curve_to(c1.0, c1.1, c2.0, c2.1, x, y);
                current = (x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_no_ops() {
        assert!(smoothed_path(&[], DEFAULT_CORNER_RADIUS).is_empty());
    }

    #[test]
    fn single_point_becomes_dot() {
        let ops = smoothed_path(&[(5.0, 5.0), (5.0, 5.0)], DEFAULT_CORNER_RADIUS);
        assert_eq!(ops, vec![PathOp::MoveTo(5.0, 5.0), PathOp::LineTo(5.0, 5.0)]);
    }

    #[test]
    fn straight_two_point_path_is_a_line() {
        let ops = smoothed_path(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0)], 4.0);
        assert_eq!(ops, vec![PathOp::MoveTo(0.0, 0.0), PathOp::LineTo(10.0, 0.0)]);
    }

    #[test]
    fn corner_is_rounded_within_radius() {
        let ops = smoothed_path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 2.0);
        assert_eq!(
            ops,
            vec![
                PathOp::MoveTo(0.0, 0.0),
                PathOp::LineTo(8.0, 0.0),
                PathOp::QuadTo {
                    cx: 10.0,
                    cy: 0.0,
                    x: 10.0,
                    y: 2.0
                },
                PathOp::LineTo(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn cut_back_is_limited_to_half_the_edge() {
        let ops = smoothed_path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 100.0);
        assert_eq!(ops[1], PathOp::LineTo(5.0, 0.0));
        assert_eq!(
            ops[2],
            PathOp::QuadTo {
                cx: 10.0,
                cy: 0.0,
                x: 10.0,
                y: 5.0
            }
        );
    }

    #[test]
    fn zero_radius_keeps_sharp_corners() {
        let ops = smoothed_path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 0.0);
        assert_eq!(
            ops,
            vec![
                PathOp::MoveTo(0.0, 0.0),
                PathOp::LineTo(10.0, 0.0),
                PathOp::LineTo(10.0, 10.0),
            ]
        );
    }
}
