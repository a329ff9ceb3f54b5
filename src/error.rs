// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The window (our graphics device) could not be opened. Fatal at startup.
    #[error("Device creation error: {0}")]
    DeviceCreation(String),

    /// The canvas surface could not be (re)built for the current client area.
    #[error("Surface creation error: {0}")]
    SurfaceCreation(String),

    /// Presenting a frame failed; the surface must be rebuilt before the next paint.
    #[error("Device lost: {0}")]
    DeviceLost(String),
}
