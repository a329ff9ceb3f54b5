// Where new shape colors come from. Production uses an unseeded RNG;
// tests plug in a fixed sequence so frames are reproducible.

use crate::types::Color;
use rand::Rng;

pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Each channel uniform in [0,1], thread-local RNG.
#[derive(Default)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        let mut rng = rand::thread_rng();
        Color::new(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        )
    }
}

/// Cycles through a fixed list, wrapping at the end.
#[cfg(test)]
pub struct FixedColors {
    colors: Vec<Color>,
    next: usize,
}

#[cfg(test)]
impl FixedColors {
    /// Falls back to a single mid-gray when `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() { vec![Color::new(0.5, 0.5, 0.5)] } else { colors };
        Self { colors, next: 0 }
    }
}

#[cfg(test)]
impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Color {
        let c = self.colors[self.next % self.colors.len()];
        self.next = (self.next + 1) % self.colors.len();
        c
    }
}
