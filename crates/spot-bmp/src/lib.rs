//! Packed 24-bit bitmap frames.
//!
//! `BmpHeader` decodes the 14-byte file header and the 40-byte info header,
//! `BitmapView` interprets a caller-owned buffer as rows of BGR pixels, and
//! the `encode` module turns RGB or JPEG frames into bitmaps using the
//! `image` crate.
//!
//! Pixel coordinates are always visual: `(0, 0)` is the top-left pixel
//! regardless of the row order the bitmap is stored in.

pub mod encode;
pub mod error;
pub mod header;
pub mod view;

pub use encode::{blank, encode_rgb, jpeg_to_bmp};
pub use error::{BmpError, TranscodeError};
pub use header::{BmpHeader, Compression, HEADER_SIZE};
pub use view::{BitmapView, RowOrder};

pub use image::Rgb;
