use crate::{CalibrateError, ColorSignature};
use spot_bmp::{BitmapView, BmpHeader};

/// Half the side of the sampled square: pixels `center - 2 .. center + 2`.
pub const PATCH_RADIUS: usize = 2;

/// Averages the 4x4 patch at the center of the frame into a signature.
///
/// The operator centers the reference object before calibrating, so the
/// patch lands on it without needing its exact position. Channel means are
/// truncated. On images narrower or shorter than the patch, the patch is
/// clipped to the image.
///
/// # Errors
///
/// Returns `CalibrateError::NoSamples` if the clipped patch is empty, which
/// only happens for zero-width or zero-height images.
pub fn calibrate<B: AsRef<[u8]>>(view: &BitmapView<B>) -> Result<ColorSignature, CalibrateError> {
    let (cx, cy) = (view.width() / 2, view.height() / 2);
    let xs = cx.saturating_sub(PATCH_RADIUS)..(cx + PATCH_RADIUS).min(view.width());
    let ys = cy.saturating_sub(PATCH_RADIUS)..(cy + PATCH_RADIUS).min(view.height());

    let mut sums = [0u32; 3];
    let mut samples = 0u32;
    for y in ys {
        for x in xs.clone() {
            let pixel = view.pixel(x, y);
            for (sum, value) in sums.iter_mut().zip(pixel.0) {
                *sum += value as u32;
            }
            samples += 1;
        }
    }

    if samples == 0 {
        return Err(CalibrateError::NoSamples);
    }

    let [red, green, blue] = sums.map(|sum| (sum / samples) as u8);
    Ok(ColorSignature { red, green, blue })
}

/// Parses `frame` as a bitmap and calibrates on it.
pub fn calibrate_frame(frame: &[u8]) -> Result<ColorSignature, CalibrateError> {
    let header = BmpHeader::parse(frame)?;
    log::debug!("calibration frame header:\n{header}");
    let view = BitmapView::from_header(&header, frame)?;
    let signature = calibrate(&view)?;
    log::info!("calibrated {signature}");
    Ok(signature)
}
