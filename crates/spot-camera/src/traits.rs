use crate::CameraError;

/// Async source of camera frames.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame as an uncompressed 24-bit bitmap.
    ///
    /// The caller owns the returned buffer and may annotate it in place.
    async fn recv(&mut self) -> Result<Vec<u8>, CameraError>;
}
