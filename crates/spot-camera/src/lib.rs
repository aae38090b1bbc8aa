//! Frame sources and the tracking session for the spot detector.
//!
//! A `Camera` yields 24-bit bitmap frames. `TrackSession` owns the current
//! color signature and runs calibration, detection and annotation on those
//! frames.

pub mod config;
pub mod error;
pub mod session;
pub mod still;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use session::TrackSession;
pub use still::StillCamera;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
