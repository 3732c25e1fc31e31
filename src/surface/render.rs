use crate::draw::{Bitmap, ExportError, SurfaceFrame, render_scene, rotation};
use log::info;

use super::DrawingSurface;

impl DrawingSurface {
    /// Brings recorded coordinates into `current` and remembers it.
    ///
    /// If the orientation changed since the previous pass, every point of every
    /// stroke (including the one in progress) is remapped first. On the very
    /// first pass nothing is remapped. Returns `true` when a remap happened.
    pub fn sync_frame(&mut self, current: SurfaceFrame) -> bool {
        let previous = self.last_frame;
        let strokes = self
            .frame
            .strokes_mut()
            .iter_mut()
            .chain(self.gesture.stroke_mut());
        let remapped = rotation::remap_strokes(strokes, previous, current);

        if remapped {
            info!(
                "Surface rotated {}° -> {}°, strokes remapped",
                previous.angle, current.angle
            );
            self.needs_redraw = true;
        }
        self.last_frame = current;
        remapped
    }

    /// Performs one on-screen render pass.
    ///
    /// # Steps
    /// 1. Remap strokes if the frame changed since the last pass ([`Self::sync_frame`])
    /// 2. Fill the surface with the background color
    /// 3. Paint every stroke as one smoothed path using its first segment's style
    pub fn on_draw(&mut self, ctx: &cairo::Context, current: SurfaceFrame) {
        self.sync_frame(current);
        self.render_current(ctx);
        self.needs_redraw = false;
    }

    /// Paints background and strokes without touching the recorded frame.
    pub fn render_current(&self, ctx: &cairo::Context) {
        render_scene(
            ctx,
            self.background_color,
            self.paint_order(),
            self.corner_radius,
        );
    }

    /// Renders the current drawing into an off-screen bitmap.
    ///
    /// The bitmap has the dimensions recorded by the last render pass and the
    /// same pixels that pass painted. Before any pass, or for a zero-size
    /// surface, the bitmap is empty.
    pub fn export_bitmap(&self) -> Result<Bitmap, ExportError> {
        let SurfaceFrame { width, height, .. } = self.last_frame;
        Bitmap::render(width, height, |ctx| self.render_current(ctx))
    }
}
