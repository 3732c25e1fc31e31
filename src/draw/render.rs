//! Cairo-based rendering functions for strokes.

use super::color::Color;
use super::path::{append_to_context, smoothed_path};
use super::stroke::Stroke;

/// Fills the entire surface with a solid background color.
///
/// Should be called before rendering strokes, on a freshly created or cleared
/// surface.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // a failed paint leaves the previous contents visible
    let _ = ctx.restore();
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes<'a, I>(ctx: &cairo::Context, strokes: I, corner_radius: f64)
where
    I: IntoIterator<Item = &'a Stroke>,
{
    for stroke in strokes {
        render_stroke(ctx, stroke, corner_radius);
    }
}

/// Renders one stroke as a single smoothed path.
///
/// The whole stroke is painted with its first segment's color and width, using
/// round joins and caps. Strokes without segments are skipped.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke, corner_radius: f64) {
    let Some((color, width)) = stroke.style() else {
        return;
    };

    let ops = smoothed_path(&stroke.points(), corner_radius);
    if ops.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke_line_width(width));
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.set_antialias(cairo::Antialias::Good);

    ctx.new_path();
    append_to_context(ctx, &ops);
    let _ = ctx.stroke();
}

/// Renders the complete scene: background first, then every stroke on top.
///
/// Both the on-screen pass and bitmap export go through here so they produce
/// identical pixels.
pub fn render_scene<'a, I>(ctx: &cairo::Context, background: Color, strokes: I, corner_radius: f64)
where
    I: IntoIterator<Item = &'a Stroke>,
{
    render_background(ctx, background);
    render_strokes(ctx, strokes, corner_radius);
}

/// A thickness of 0 means a one pixel hairline.
fn stroke_line_width(width: f32) -> f64 {
    if width <= 0.0 { 1.0 } else { width as f64 }
}
