use spot_bmp::BmpError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalibrateError {
    Bitmap(BmpError),
    /// The center patch contains no pixels (zero-sized image).
    NoSamples,
}

impl fmt::Display for CalibrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrateError::Bitmap(err) => write!(f, "calibration frame rejected: {err}"),
            CalibrateError::NoSamples => write!(f, "calibration patch contains no pixels"),
        }
    }
}

impl std::error::Error for CalibrateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalibrateError::Bitmap(err) => Some(err),
            CalibrateError::NoSamples => None,
        }
    }
}

impl From<BmpError> for CalibrateError {
    fn from(err: BmpError) -> Self {
        CalibrateError::Bitmap(err)
    }
}

/// Why a border could not be drawn. Nothing is written when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// No frame bytes at all.
    NullBuffer,
    InsufficientHeader { len: usize },
    /// The header points the pixel data into itself.
    BadDataOffset(u32),
    BadSignature,
    UnsupportedDepth(u16),
    /// The normalized box reaches outside the image.
    OutOfBounds,
    Truncated { expected: usize, got: usize },
}

impl DrawError {
    /// Numeric diagnosis as printed by the device firmware.
    pub fn code(&self) -> i32 {
        match self {
            DrawError::BadSignature => 1,
            DrawError::UnsupportedDepth(_) => 2,
            DrawError::OutOfBounds => 3,
            DrawError::InsufficientHeader { .. }
            | DrawError::BadDataOffset(_)
            | DrawError::Truncated { .. } => 4,
            DrawError::NullBuffer => 5,
        }
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::NullBuffer => write!(f, "no frame data"),
            DrawError::InsufficientHeader { len } => {
                write!(f, "{len} bytes is not enough for a bitmap header")
            }
            DrawError::BadDataOffset(offset) => {
                write!(f, "pixel data offset {offset} lies inside the header")
            }
            DrawError::BadSignature => write!(f, "invalid bitmap signature"),
            DrawError::UnsupportedDepth(bpp) => {
                write!(f, "cannot draw on {bpp}-bit bitmap (only 24 is supported)")
            }
            DrawError::OutOfBounds => write!(f, "rectangle out of bounds"),
            DrawError::Truncated { expected, got } => {
                write!(f, "bitmap truncated: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for DrawError {}

impl From<BmpError> for DrawError {
    fn from(err: BmpError) -> Self {
        match err {
            BmpError::TooSmall { len } => DrawError::InsufficientHeader { len },
            BmpError::BadSignature(_) => DrawError::BadSignature,
            BmpError::UnsupportedDepth(bpp) => DrawError::UnsupportedDepth(bpp),
            // no column index can be inside a negative width
            BmpError::NegativeWidth(_) => DrawError::OutOfBounds,
            BmpError::BadDataOffset(offset) => DrawError::BadDataOffset(offset),
            BmpError::Truncated { expected, got } => DrawError::Truncated { expected, got },
        }
    }
}
