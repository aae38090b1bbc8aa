use std::fmt;

/// Reasons a buffer cannot be used as a 24-bit bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BmpError {
    /// Fewer than 54 bytes, not enough for the headers.
    TooSmall { len: usize },
    BadSignature([u8; 2]),
    UnsupportedDepth(u16),
    NegativeWidth(i32),
    /// Pixel data would start inside the 54-byte header.
    BadDataOffset(u32),
    /// The buffer ends before the last pixel row.
    Truncated { expected: usize, got: usize },
}

impl fmt::Display for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmpError::TooSmall { len } => {
                write!(f, "buffer of {len} bytes is too small for a bitmap header")
            }
            BmpError::BadSignature(sig) => {
                write!(f, "invalid bitmap signature {:02x}{:02x}", sig[0], sig[1])
            }
            BmpError::UnsupportedDepth(bpp) => {
                write!(f, "unsupported depth: {bpp} bits per pixel (only 24 is supported)")
            }
            BmpError::NegativeWidth(width) => write!(f, "negative bitmap width {width}"),
            BmpError::BadDataOffset(offset) => {
                write!(f, "pixel data offset {offset} overlaps the bitmap header")
            }
            BmpError::Truncated { expected, got } => {
                write!(f, "bitmap truncated: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for BmpError {}

/// Failure turning a camera frame into a bitmap.
#[derive(Debug)]
pub enum TranscodeError {
    Length { expected: usize, got: usize },
    Image(image::ImageError),
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Length { expected, got } => {
                write!(f, "transcode error: expected {expected} RGB bytes, got {got}")
            }
            TranscodeError::Image(err) => write!(f, "transcode error: {err}"),
        }
    }
}

impl std::error::Error for TranscodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscodeError::Image(err) => Some(err),
            TranscodeError::Length { .. } => None,
        }
    }
}

impl From<image::ImageError> for TranscodeError {
    fn from(err: image::ImageError) -> Self {
        TranscodeError::Image(err)
    }
}
