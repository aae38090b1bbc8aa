//! Color-threshold localization on 24-bit bitmap frames.
//!
//! The flow for one frame is:
//!
//! 1. `calibrate` samples a small patch at the center of a reference frame
//!    and returns a `ColorSignature`.
//! 2. `detect` scans a frame against that signature and returns the
//!    `BoundingBox` enclosing every matching pixel, or `None`.
//! 3. `draw_border` outlines the box in green, in place.
//!
//! Nothing here keeps state between calls. The current signature belongs
//! to the caller, who passes it to every `detect` call.

pub mod annotate;
pub mod bbox;
pub mod calibrate;
pub mod detect;
pub mod error;
pub mod signature;

pub use annotate::{BORDER_COLOR, draw_border};
pub use bbox::BoundingBox;
pub use calibrate::{calibrate, calibrate_frame};
pub use detect::{DetectMode, detect, detect_frame};
pub use error::{CalibrateError, DrawError};
pub use signature::{Channel, ColorSignature};
