// Window layer: a minifb window that shows the canvas, plus the translation
// from polled window state into discrete `Event`s.

use crate::app::Host;
use crate::config::Config;
use crate::error::Error;
use crate::input::{Event, KeyAction};
use crate::paint::Presenter;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::info;

const KEY_BINDINGS: [(Key, KeyAction); 6] = [
    (Key::Enter, KeyAction::Reset),
    (Key::NumPadEnter, KeyAction::Reset),
    (Key::NumPadPlus, KeyAction::GrowBrush),
    (Key::Equal, KeyAction::GrowBrush),
    (Key::NumPadMinus, KeyAction::ShrinkBrush),
    (Key::Minus, KeyAction::ShrinkBrush),
];

pub struct Drawer {
    window: Window,
    title: &'static str,
    target_fps: usize,
    default_size: (usize, usize), // used when reopening from a zero-area window
    last: PollState,
    presented: bool,              // a frame went out since the last `pump`
}

impl Drawer {
    /// Open the window. Failure here means there is no device to draw on.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let window = open_window(config.title, config.width, config.height, config.target_fps)?;
        let last = PollState::new(window.get_size());
        Ok(Self {
            window,
            title: config.title,
            target_fps: config.target_fps,
            default_size: (config.width, config.height),
            last,
            presented: false,
        })
    }

    /// Read the window state and report what changed since the last poll.
    pub fn poll_events(&mut self) -> Vec<Event> {
        if !self.window.is_open() {
            return vec![Event::CloseRequested];
        }
        let snapshot = Snapshot {
            size: self.window.get_size(),
            pos: self.window.get_mouse_pos(MouseMode::Discard),
            left: self.window.get_mouse_down(MouseButton::Left),
            keys: KEY_BINDINGS
                .iter()
                .map(|(key, _)| *key)
                .filter(|key| self.window.is_key_pressed(*key, KeyRepeat::No))
                .collect(),
        };
        self.last.advance(&snapshot)
    }

    /// Keep the OS event queue moving when nothing was presented this round.
    pub fn pump(&mut self) {
        if !std::mem::take(&mut self.presented) {
            self.window.update();
        }
    }
}

/// Raw window readings from one poll.
struct Snapshot {
    size: (usize, usize),
    pos: Option<(f32, f32)>, // None when the pointer is outside the window
    left: bool,
    keys: Vec<Key>,          // keys newly pressed this poll
}

/// What the previous poll saw, so the next one can report edges only.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PollState {
    size: (usize, usize),
    pointer: Option<(f32, f32)>,
    left_down: bool,
}

impl PollState {
    fn new(size: (usize, usize)) -> Self {
        Self { size, pointer: None, left_down: false }
    }

    fn advance(&mut self, snap: &Snapshot) -> Vec<Event> {
        let mut events = Vec::new();

        if snap.size != self.size {
            self.size = snap.size;
            events.push(Event::Resized(snap.size.0, snap.size.1));
        }

        // minifb exposes button state, not clicks: a press and release that
        // both land between two polls never shows up here.
        if snap.left && !self.left_down {
            if let Some((x, y)) = snap.pos {
                events.push(Event::PointerDown(Point::new(x, y)));
            }
        } else if let Some((x, y)) = snap.pos {
            if self.pointer != snap.pos {
                events.push(Event::PointerMove(Point::new(x, y)));
            }
        }
        if !snap.left && self.left_down {
            events.push(Event::PointerUp);
        }
        self.left_down = snap.left;
        if snap.pos.is_some() {
            self.pointer = snap.pos;
        }

        for key in &snap.keys {
            if let Some((_, action)) = KEY_BINDINGS.iter().find(|(k, _)| k == key) {
                events.push(Event::Key(*action));
            }
        }
        events
    }
}

impl Presenter for Drawer {
    fn client_size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::DeviceLost(e.to_string()))?;
        self.presented = true;
        Ok(())
    }
}

impl Host for Drawer {
    fn confirm_quit(&mut self) -> bool {
        let answer = MessageDialog::new()
            .set_title(self.title)
            .set_description("Really quit?")
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        answer == MessageDialogResult::Ok
    }

    /// minifb has already torn the native window down by the time we see the
    /// close, so a cancelled quit opens a fresh one at the last size.
    fn reopen(&mut self) -> Result<(), Error> {
        let (w, h) = match self.last.size {
            (0, _) | (_, 0) => self.default_size,
            size => size,
        };
        self.window = open_window(self.title, w, h, self.target_fps)?;
        self.last = PollState::new(self.window.get_size());
        self.presented = false;
        info!(width = self.last.size.0, height = self.last.size.1, "window reopened");
        Ok(())
    }
}

fn open_window(title: &str, width: usize, height: usize, fps: usize) -> Result<Window, Error> {
    let options = WindowOptions { resize: true, ..WindowOptions::default() };
    let mut window = Window::new(title, width, height, options)
        .map_err(|e| Error::DeviceCreation(e.to_string()))?;
    window.set_target_fps(fps);
    Ok(window)
}
