use crate::{Camera, CameraError};
use std::path::Path;

/// Replays a fixed set of bitmap frames, cycling back to the first.
///
/// Stands in for the sensor when working from files.
#[derive(Debug, Clone)]
pub struct StillCamera {
    frames: Vec<Vec<u8>>,
    next: usize,
}

impl StillCamera {
    pub fn new(frames: Vec<Vec<u8>>) -> Self {
        Self { frames, next: 0 }
    }

    /// Loads one bitmap file as the only frame.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CameraError> {
        let frame = std::fs::read(path)?;
        Ok(Self::new(vec![frame]))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Camera for StillCamera {
    async fn recv(&mut self) -> Result<Vec<u8>, CameraError> {
        if self.frames.is_empty() {
            return Err(CameraError::Stream("no frames to replay".to_string()));
        }
        let frame = self.frames[self.next].clone();
        self.next = (self.next + 1) % self.frames.len();
        Ok(frame)
    }
}
