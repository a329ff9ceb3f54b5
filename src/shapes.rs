// Everything the user has painted so far: rectangles and their colors, in draw order.

use crate::types::{Color, Rect};

/// Parallel sequences; index `i` of `colors` always fills index `i` of `rects`.
#[derive(Debug, Default)]
pub struct ShapeStore {
    rects: Vec<Rect>,
    colors: Vec<Color>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one shape and its color at the end.
    pub fn append(&mut self, rect: Rect, color: Color) {
        self.rects.push(rect);
        self.colors.push(color);
        debug_assert_eq!(self.rects.len(), self.colors.len());
    }

    /// Drop every shape and color.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.colors.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[cfg(test)]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Shapes in insertion (= paint) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.rects.iter().zip(self.colors.iter())
    }
}
