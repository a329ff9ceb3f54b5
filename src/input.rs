// Gesture + brush state. Turns platform-neutral events into paint actions.

use crate::types::Point;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Reset,
    GrowBrush,
    ShrinkBrush,
}

/// What the window layer reports each poll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    PointerDown(Point),
    PointerUp,
    PointerMove(Point),
    Key(KeyAction),
    Resized(usize, usize),
    CloseRequested,
    Paint,
}

/// `Pressed` is the drag-detection window: the button is down but the
/// pointer has not yet left the drag threshold around `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    Pressed { origin: Point },
    Dragging,
}

/// A shape-producing outcome of an input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Append one square at this point.
    Stamp(Point),
    /// Clear everything, then append one square at this point.
    Reset(Point),
}

pub struct InputState {
    gesture: Gesture,
    brush_half_size: u32,
    min_brush: u32,
    drag_threshold: f32,
    last_pointer: Point,
}

impl InputState {
    pub fn new(brush_half_size: u32, min_brush: u32, drag_threshold: f32) -> Self {
        let min_brush = min_brush.max(1);
        Self {
            gesture: Gesture::Idle,
            brush_half_size: brush_half_size.max(min_brush),
            min_brush,
            drag_threshold,
            last_pointer: Point::default(),
        }
    }

    #[cfg(test)]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn brush_half_size(&self) -> u32 {
        self.brush_half_size
    }

    #[cfg(test)]
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Window-level events (resize, close, paint) yield `None` here.
    pub fn handle(&mut self, event: &Event) -> Option<Action> {
        match *event {
            Event::PointerDown(p) => {
                self.last_pointer = p;
                self.set_gesture(Gesture::Pressed { origin: p });
                // Click-to-stamp: the press always paints, drag or not.
                Some(Action::Stamp(p))
            }
            Event::PointerMove(p) => {
                self.last_pointer = p;
                match self.gesture {
                    Gesture::Idle => None,
                    Gesture::Pressed { origin } => {
                        let (dx, dy) = ((p.x - origin.x).abs(), (p.y - origin.y).abs());
                        if dx > self.drag_threshold || dy > self.drag_threshold {
                            self.set_gesture(Gesture::Dragging);
                        }
                        None
                    }
                    Gesture::Dragging => Some(Action::Stamp(p)),
                }
            }
            Event::PointerUp => {
                self.set_gesture(Gesture::Idle);
                None
            }
            Event::Key(KeyAction::Reset) => Some(Action::Reset(self.last_pointer)),
            Event::Key(KeyAction::GrowBrush) => {
                self.brush_half_size = self.brush_half_size.saturating_add(1);
                debug!(half_size = self.brush_half_size, "brush grown");
                None
            }
            Event::Key(KeyAction::ShrinkBrush) => {
                self.brush_half_size = self.brush_half_size.saturating_sub(1).max(self.min_brush);
                debug!(half_size = self.brush_half_size, "brush shrunk");
                None
            }
            Event::Resized(..) | Event::CloseRequested | Event::Paint => None,
        }
    }

    fn set_gesture(&mut self, next: Gesture) {
        if self.gesture != next {
            debug!(from = ?self.gesture, to = ?next, "gesture");
            self.gesture = next;
        }
    }
}
