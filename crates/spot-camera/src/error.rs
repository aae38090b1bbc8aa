use spot_bmp::{BmpError, TranscodeError};
use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    Device(String),
    Stream(String),
    Decode(TranscodeError),
    /// A frame arrived but is not a usable bitmap.
    Frame(BmpError),
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Frame(err) => write!(f, "frame error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<TranscodeError> for CameraError {
    fn from(err: TranscodeError) -> Self {
        CameraError::Decode(err)
    }
}

impl From<BmpError> for CameraError {
    fn from(err: BmpError) -> Self {
        CameraError::Frame(err)
    }
}
