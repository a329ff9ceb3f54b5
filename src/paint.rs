// Repaint pass: clear, fill every stored rectangle in insertion order, present.
// Reads the shape store, never mutates it.

use crate::error::Error;
use crate::shapes::ShapeStore;
use crate::surface::{Brush, CanvasSurface};
use crate::types::{FrameBuffer, Rect};
use tracing::warn;

/// Where finished frames go. The real one is the minifb window.
pub trait Presenter {
    /// Current client area in pixels.
    fn client_size(&self) -> (usize, usize);
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

pub struct Painter {
    background: u32,
}

impl Painter {
    pub fn new(background: u32) -> Self {
        Self { background }
    }

    /// Returns true when a frame reached the presenter.
    /// Surface errors are logged and leave the surface unset for the next attempt.
    pub fn repaint<P: Presenter + ?Sized>(
        &self,
        surface: &mut CanvasSurface,
        shapes: &ShapeStore,
        presenter: &mut P,
    ) -> bool {
        let target = match surface.ensure(presenter.client_size()) {
            Ok(t) => t,
            Err(e) => {
                warn!("skipping paint: {e}");
                return false;
            }
        };

        target.frame.pixels.fill(self.background);
        for (rect, color) in shapes.iter() {
            target.brush.set_color(*color);
            fill_rect(&mut target.frame, rect, &target.brush);
        }

        if let Err(e) = presenter.present(&target.frame) {
            warn!("discarding surface: {e}");
            surface.discard();
            return false;
        }
        true
    }
}

/// Source-over fill of `rect` (columns [left,right), rows [top,bottom)), clipped to the frame.
pub fn fill_rect(fb: &mut FrameBuffer, rect: &Rect, brush: &Brush) {
    let clip = |v: f32, max: usize| v.round().clamp(0.0, max as f32) as usize;
    let (x0, x1) = (clip(rect.left, fb.width), clip(rect.right, fb.width));
    let (y0, y1) = (clip(rect.top, fb.height), clip(rect.bottom, fb.height));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let a = brush.alpha.clamp(0.0, 1.0);
    let inv = 1.0 - a;
    let src = [brush.color.r * 255.0, brush.color.g * 255.0, brush.color.b * 255.0];

    for y in y0..y1 {
        let row = y * fb.width;
        for px in &mut fb.pixels[row + x0..row + x1] {
            let dst = [((*px >> 16) & 0xFF) as f32, ((*px >> 8) & 0xFF) as f32, (*px & 0xFF) as f32];
            let mix = |i: usize| (a * src[i] + inv * dst[i]).round().clamp(0.0, 255.0) as u32;
            *px = (mix(0) << 16) | (mix(1) << 8) | mix(2);
        }
    }
}
