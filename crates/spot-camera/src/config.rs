use spot_bmp::{HEADER_SIZE, view::row_stride};

/// Capture settings for a camera feeding the tracker.
///
/// Detection cost grows with the pixel count, so the default is the small
/// QQVGA frame (160x120) the tracker is tuned for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    fps: u32,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 160,
            height: 120,
            fps: 30,
            buffer_count: 2,
        }
    }
}

impl CameraConfig {
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    /// Requested frame size. The device may round it to a size it supports.
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Frames held between the capture thread and `recv`. Older frames are
    /// not dropped, so a small value keeps detection close to real time.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// `(width, height)` in pixels.
    pub fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    /// Size in bytes of one captured frame once transcoded to a 24-bit
    /// bitmap, or `None` if it does not fit in memory.
    pub fn bitmap_len(&self) -> Option<usize> {
        row_stride(self.width as usize)?
            .checked_mul(self.height as usize)?
            .checked_add(HEADER_SIZE)
    }
}
