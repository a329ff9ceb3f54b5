// Core types shared by the shape store, the surface and the painter.

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // client-area width (pixels)
    pub height: usize,     // client-area height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Pointer position in window pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device pixels. Always normalized: left <= right, top <= bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    /// Square of half-size `half` centered on `center`.
    pub fn centered(center: Point, half: u32) -> Self {
        let h = half as f32;
        Self::from_corners(center.x - h, center.y - h, center.x + h, center.y + h)
    }
}

/// RGB color with channels in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r: r.clamp(0.0, 1.0), g: g.clamp(0.0, 1.0), b: b.clamp(0.0, 1.0) }
    }

    /// Pack as 0x00RRGGBB.
    #[cfg(test)]
    pub fn to_rgb_u32(self) -> u32 {
        let r = (self.r * 255.0).round().clamp(0.0, 255.0) as u32;
        let g = (self.g * 255.0).round().clamp(0.0, 255.0) as u32;
        let b = (self.b * 255.0).round().clamp(0.0, 255.0) as u32;
        (r << 16) | (g << 8) | b
    }
}
