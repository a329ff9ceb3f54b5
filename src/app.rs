// All application state in one owned struct; events are dispatched by kind.

use crate::config::Config;
use crate::error::Error;
use crate::input::{Action, Event, InputState};
use crate::paint::{Painter, Presenter};
use crate::palette::ColorSource;
use crate::shapes::ShapeStore;
use crate::surface::CanvasSurface;
use crate::types::Rect;
use std::ops::ControlFlow;
use tracing::{debug, error, info};

/// The window as seen by the app: a presenter that can also ask the user
/// about quitting and come back after a cancelled close.
pub trait Host: Presenter {
    /// Blocking OK/Cancel prompt. True means quit.
    fn confirm_quit(&mut self) -> bool;
    fn reopen(&mut self) -> Result<(), Error>;
}

pub struct App<C: ColorSource> {
    shapes: ShapeStore,
    surface: CanvasSurface,
    input: InputState,
    painter: Painter,
    colors: C,
}

impl<C: ColorSource> App<C> {
    pub fn new(config: &Config, colors: C) -> Self {
        Self {
            shapes: ShapeStore::new(),
            surface: CanvasSurface::new(config.background, config.fill_alpha),
            input: InputState::new(config.brush_half_size, config.min_brush, config.drag_threshold),
            painter: Painter::new(config.background),
            colors,
        }
    }

    #[cfg(test)]
    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    #[cfg(test)]
    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    #[cfg(test)]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn handle(&mut self, event: Event, host: &mut dyn Host) -> ControlFlow<()> {
        match event {
            Event::Paint => self.repaint(host),
            Event::Resized(w, h) => {
                self.surface.resize(w, h);
                self.repaint(host);
            }
            Event::CloseRequested => return self.on_close(host),
            Event::PointerDown(_) | Event::PointerMove(_) | Event::Key(_) => {
                if let Some(action) = self.input.handle(&event) {
                    self.apply(action);
                    self.repaint(host);
                }
            }
            Event::PointerUp => {
                self.input.handle(&event);
                self.repaint(host);
            }
        }
        ControlFlow::Continue(())
    }

    /// Release the surface before the window goes away.
    pub fn shutdown(&mut self) {
        self.surface.discard();
        if self.shapes.is_empty() {
            info!("shutting down, canvas empty");
        } else {
            info!(shapes = self.shapes.len(), "shutting down, drawing discarded");
        }
    }

    fn apply(&mut self, action: Action) {
        let at = match action {
            Action::Stamp(p) => p,
            Action::Reset(p) => {
                info!(cleared = self.shapes.len(), "canvas reset");
                self.shapes.clear();
                p
            }
        };
        let rect = Rect::centered(at, self.input.brush_half_size());
        let color = self.colors.next_color();
        self.shapes.append(rect, color);
        // New geometry invalidates the surface; the next paint rebuilds it.
        self.surface.discard();
        debug!(x = at.x, y = at.y, total = self.shapes.len(), "shape appended");
    }

    fn repaint(&mut self, host: &mut dyn Host) {
        self.painter.repaint(&mut self.surface, &self.shapes, host);
    }

    fn on_close(&mut self, host: &mut dyn Host) -> ControlFlow<()> {
        if host.confirm_quit() {
            return ControlFlow::Break(());
        }
        self.surface.discard();
        if let Err(e) = host.reopen() {
            error!("could not reopen window: {e}");
            return ControlFlow::Break(());
        }
        self.repaint(host);
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::palette::FixedColors;
    use crate::types::{Color, FrameBuffer, Point};

    struct FakeHost {
        size: (usize, usize),
        frames: Vec<FrameBuffer>,
        quit_answer: bool,
        prompts: usize,
        reopens: usize,
    }

    impl FakeHost {
        fn new() -> Self {
            Self { size: (320, 240), frames: Vec::new(), quit_answer: true, prompts: 0, reopens: 0 }
        }
    }

    impl Presenter for FakeHost {
        fn client_size(&self) -> (usize, usize) {
            self.size
        }

        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    impl Host for FakeHost {
        fn confirm_quit(&mut self) -> bool {
            self.prompts += 1;
            self.quit_answer
        }

        fn reopen(&mut self) -> Result<(), Error> {
            self.reopens += 1;
            Ok(())
        }
    }

    fn send(app: &mut App<FixedColors>, event: Event, host: &mut FakeHost) {
        assert_eq!(app.handle(event, host), ControlFlow::Continue(()));
    }

    fn app() -> App<FixedColors> {
        let colors = FixedColors::new(vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)]);
        App::new(&Config::default(), colors)
    }

    #[test]
    fn click_stamps_default_square() {
        let mut app = app();
        let mut host = FakeHost::new();
        assert_eq!(app.shapes().len(), 0);

        let flow = app.handle(Event::PointerDown(Point::new(100.0, 100.0)), &mut host);
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(app.shapes().len(), 1);
        assert_eq!(app.shapes().color_count(), 1);
        let (rect, color) = app.shapes().iter().next().unwrap();
        assert_eq!(*rect, Rect::from_corners(70.0, 70.0, 130.0, 130.0));
        assert_eq!(*color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(host.frames.len(), 1);
    }

    #[test]
    fn drag_adds_one_shape_per_move_plus_the_press() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::PointerDown(Point::new(50.0, 50.0)), &mut host);
        // Crossing the threshold only promotes the gesture.
        send(&mut app, Event::PointerMove(Point::new(60.0, 50.0)), &mut host);
        for i in 0..4 {
            send(&mut app, Event::PointerMove(Point::new(61.0 + i as f32, 50.0)), &mut host);
        }
        send(&mut app, Event::PointerUp, &mut host);
        assert_eq!(app.shapes().len(), 5);

        send(&mut app, Event::PointerMove(Point::new(200.0, 200.0)), &mut host);
        assert_eq!(app.shapes().len(), 5);
    }

    #[test]
    fn enter_clears_and_leaves_exactly_one_shape() {
        let mut app = app();
        let mut host = FakeHost::new();
        for i in 0..5 {
            let p = Point::new(10.0 * i as f32, 10.0);
            send(&mut app, Event::PointerDown(p), &mut host);
            send(&mut app, Event::PointerUp, &mut host);
        }
        assert_eq!(app.shapes().len(), 5);

        send(&mut app, Event::PointerMove(Point::new(150.0, 120.0)), &mut host);
        send(&mut app, Event::Key(KeyAction::Reset), &mut host);
        assert_eq!(app.shapes().len(), 1);
        assert_eq!(app.shapes().color_count(), 1);
        let (rect, _) = app.shapes().iter().next().unwrap();
        assert_eq!(*rect, Rect::centered(Point::new(150.0, 120.0), 30));
    }

    #[test]
    fn brush_keys_change_future_shapes_without_repaint() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::Key(KeyAction::GrowBrush), &mut host);
        send(&mut app, Event::Key(KeyAction::GrowBrush), &mut host);
        send(&mut app, Event::Key(KeyAction::ShrinkBrush), &mut host);
        assert!(host.frames.is_empty());
        assert_eq!(app.input().brush_half_size(), 31);

        send(&mut app, Event::PointerDown(Point::new(100.0, 100.0)), &mut host);
        let (rect, _) = app.shapes().iter().next().unwrap();
        assert_eq!(*rect, Rect::from_corners(69.0, 69.0, 131.0, 131.0));
    }

    #[test]
    fn resize_rebuilds_to_client_size_and_keeps_shapes() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::PointerDown(Point::new(10.0, 10.0)), &mut host);
        assert_eq!(app.surface().size(), Some((320, 240)));

        host.size = (640, 480);
        send(&mut app, Event::Resized(640, 480), &mut host);
        assert_eq!(app.surface().size(), Some((640, 480)));
        assert_eq!(app.shapes().len(), 1);
        let last = host.frames.last().unwrap();
        assert_eq!((last.width, last.height), (640, 480));
    }

    #[test]
    fn minimize_skips_paint_until_window_has_area() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::PointerDown(Point::new(10.0, 10.0)), &mut host);
        assert_eq!(host.frames.len(), 1);

        host.size = (0, 0);
        send(&mut app, Event::Resized(0, 0), &mut host);
        assert!(!app.surface().is_present());
        assert_eq!(host.frames.len(), 1);

        host.size = (320, 240);
        send(&mut app, Event::Resized(320, 240), &mut host);
        assert_eq!(app.surface().size(), Some((320, 240)));
        assert_eq!(host.frames.len(), 2);
        assert_eq!(app.shapes().len(), 1);
    }

    #[test]
    fn repeated_paint_requests_render_the_same_frame() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::PointerDown(Point::new(40.0, 40.0)), &mut host);
        send(&mut app, Event::PointerUp, &mut host);
        send(&mut app, Event::Paint, &mut host);
        send(&mut app, Event::Paint, &mut host);
        let n = host.frames.len();
        assert_eq!(host.frames[n - 1], host.frames[n - 2]);
    }

    #[test]
    fn close_ok_breaks_the_loop() {
        let mut app = app();
        let mut host = FakeHost::new();
        assert_eq!(app.handle(Event::CloseRequested, &mut host), ControlFlow::Break(()));
        assert_eq!(host.prompts, 1);
        assert_eq!(host.reopens, 0);
    }

    #[test]
    fn close_cancel_reopens_and_keeps_drawing() {
        let mut app = app();
        let mut host = FakeHost::new();
        host.quit_answer = false;
        send(&mut app, Event::PointerDown(Point::new(20.0, 20.0)), &mut host);
        assert_eq!(app.handle(Event::CloseRequested, &mut host), ControlFlow::Continue(()));
        assert_eq!(host.reopens, 1);
        assert_eq!(app.shapes().len(), 1);
        assert!(app.surface().is_present());
    }

    #[test]
    fn shutdown_releases_surface() {
        let mut app = app();
        let mut host = FakeHost::new();
        send(&mut app, Event::Paint, &mut host);
        assert!(app.surface().is_present());
        app.shutdown();
        assert!(!app.surface().is_present());
    }
}
