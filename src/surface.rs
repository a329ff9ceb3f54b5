// The renderable target bound to the window, plus the fill brush it owns.
// Absent means "rebuild before the next paint".

use crate::error::Error;
use crate::types::{Color, FrameBuffer};
use tracing::debug;

/// Solid fill color with a fixed translucency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub alpha: f32,
}

impl Brush {
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

pub struct Target {
    pub frame: FrameBuffer,
    pub brush: Brush,
}

pub struct CanvasSurface {
    target: Option<Target>,
    background: u32,
    alpha: f32,
}

impl CanvasSurface {
    pub fn new(background: u32, alpha: f32) -> Self {
        Self { target: None, background, alpha }
    }

    /// Return the live target, building one sized to `client` if there is none.
    pub fn ensure(&mut self, client: (usize, usize)) -> Result<&mut Target, Error> {
        if self.target.is_none() {
            let (w, h) = client;
            if w == 0 || h == 0 {
                return Err(Error::SurfaceCreation(format!("client area is {w}x{h}")));
            }
            debug!(width = w, height = h, "creating canvas surface");
            self.target = Some(Target {
                frame: FrameBuffer::new(w, h, self.background),
                brush: Brush { color: Color::new(0.0, 0.0, 0.0), alpha: self.alpha },
            });
        }
        self.target
            .as_mut()
            .ok_or_else(|| Error::SurfaceCreation("surface vanished after creation".into()))
    }

    /// Release the target and its brush. Safe to call when already absent.
    pub fn discard(&mut self) {
        self.target = None;
    }

    /// Tell an existing target about the new client size. No-op when absent.
    /// A zero-area client (minimized window) drops the target; `ensure` then
    /// fails until the window has area again.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            self.discard();
            return;
        }
        if let Some(t) = &mut self.target {
            if (t.frame.width, t.frame.height) != (width, height) {
                t.frame = FrameBuffer::new(width, height, self.background);
            }
        }
    }

    #[cfg(test)]
    pub fn is_present(&self) -> bool {
        self.target.is_some()
    }

    #[cfg(test)]
    pub fn size(&self) -> Option<(usize, usize)> {
        self.target.as_ref().map(|t| (t.frame.width, t.frame.height))
    }
}
