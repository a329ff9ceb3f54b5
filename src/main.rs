// Paint but Worse:
// • Click (or click and drag) with the left mouse button to stamp translucent squares.
// • + / - grow or shrink the brush.
// • Enter wipes the canvas and starts over with one square under the pointer.
// • Closing the window asks "Really quit?" first.

mod app;
mod config;
mod draw;
mod error;
mod input;
mod paint;
mod palette;
mod shapes;
mod surface;
mod types;

use app::App;
use config::Config;
use draw::Drawer;
use input::Event;
use palette::RandomColors;
use std::ops::ControlFlow;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::default();

    // No window means nothing to do; exit quietly with status 0.
    let mut drawer = match Drawer::new(&config) {
        Ok(d) => d,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!(title = config.title, width = config.width, height = config.height, "window open");

    let mut app = App::new(&config, RandomColors);
    let mut pending = vec![Event::Paint];

    /* ------------------------------ Message loop ------------------------------ */
    'run: loop {
        for event in pending.drain(..) {
            if let ControlFlow::Break(()) = app.handle(event, &mut drawer) {
                break 'run;
            }
        }
        drawer.pump();
        pending = drawer.poll_events();
    }

    app.shutdown();
}
