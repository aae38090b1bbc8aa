use crate::{Camera, CameraError};
use spot_bmp::BmpError;
use spot_detect::{
    BoundingBox, CalibrateError, Channel, ColorSignature, DetectMode, calibrate_frame,
    detect_frame, draw_border,
};
use std::time::Duration;

/// Calibration state for one camera and the operations that use it.
///
/// The signature lives here, owned by whoever drives the camera, instead of
/// in process-wide variables. Calibration replaces it; every detection
/// reads it. A session is meant to be driven from one task at a time.
#[derive(Debug, Clone, Default)]
pub struct TrackSession {
    signature: ColorSignature,
    mode: DetectMode,
}

impl TrackSession {
    pub fn new(signature: ColorSignature) -> Self {
        Self {
            signature,
            mode: DetectMode::default(),
        }
    }

    /// Row convention for `locate` and `poll`. Annotation always uses
    /// visual rows.
    pub fn with_mode(mut self, mode: DetectMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn signature(&self) -> ColorSignature {
        self.signature
    }

    pub fn mode(&self) -> DetectMode {
        self.mode
    }

    pub fn set_signature(&mut self, signature: ColorSignature) {
        self.signature = signature;
    }

    /// Overrides one level; values outside 0..=255 are clamped.
    pub fn set_level(&mut self, channel: Channel, value: i32) {
        let level = value.clamp(0, 255) as u8;
        self.signature = self.signature.with_level(channel, level);
        log::info!("{channel:?} level {level}");
    }

    /// Calibrates on `frame` and adopts the result.
    ///
    /// On failure the previous signature stays in effect.
    pub fn calibrate(&mut self, frame: &[u8]) -> Result<ColorSignature, CalibrateError> {
        match calibrate_frame(frame) {
            Ok(signature) => {
                self.signature = signature;
                Ok(signature)
            }
            Err(err) => {
                log::warn!("calibration failed, keeping {}: {err}", self.signature);
                Err(err)
            }
        }
    }

    /// Detects the object in `frame` without touching it.
    pub fn locate(&self, frame: &[u8]) -> Result<Option<BoundingBox>, BmpError> {
        detect_frame(frame, &self.signature, self.mode)
    }

    /// Detects the object and outlines it in `frame`.
    ///
    /// A box that cannot be drawn is logged and still returned; the frame is
    /// then left as captured.
    pub fn annotate(&self, frame: &mut [u8]) -> Result<Option<BoundingBox>, BmpError> {
        let found = detect_frame(frame, &self.signature, DetectMode::Visual)?;
        if let Some(bbox) = found {
            if let Err(err) = draw_border(frame, bbox) {
                log::warn!("drawing error {}: {err}", err.code());
            }
        }
        Ok(found)
    }

    /// Pulls one frame from `camera` and locates the object in it.
    pub async fn poll<C: Camera>(&self, camera: &mut C) -> Result<Option<BoundingBox>, CameraError> {
        let frame = camera.recv().await?;
        let found = self.locate(&frame)?;
        if let Some(bbox) = found {
            log::info!("Object: {bbox}");
        }
        Ok(found)
    }

    /// Polls `frames` frames, `interval` apart, handing each result to `on_frame`.
    ///
    /// Frames that are not usable bitmaps are skipped with a warning and
    /// reported as `None`. Camera failures end the loop.
    pub async fn track<C, F>(
        &self,
        camera: &mut C,
        frames: usize,
        interval: Duration,
        mut on_frame: F,
    ) -> Result<(), CameraError>
    where
        C: Camera,
        F: FnMut(Option<BoundingBox>),
    {
        for index in 0..frames {
            if index > 0 && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
            match self.poll(camera).await {
                Ok(found) => on_frame(found),
                Err(CameraError::Frame(err)) => {
                    log::warn!("skipping frame {index}: {err}");
                    on_frame(None);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}
