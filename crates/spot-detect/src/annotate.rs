use crate::{BoundingBox, DrawError};
use spot_bmp::{BitmapView, BmpHeader, Rgb};

/// Pure green.
pub const BORDER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draws a one pixel wide border along the edges of `bbox`, in place.
///
/// `bbox` is in visual (top-origin) coordinates and may have reversed edges.
/// Pixels inside and outside the border are left untouched. The buffer is
/// validated before anything is written, so on error it is unchanged.
///
/// # Errors
///
/// - `NullBuffer` for an empty buffer
/// - `InsufficientHeader` if it is shorter than the 54 header bytes
/// - `BadDataOffset` if the pixel data would start inside the header
/// - `BadSignature` / `UnsupportedDepth` for anything but a 24-bit bitmap
/// - `OutOfBounds` if the normalized box leaves the image
/// - `Truncated` if the pixel rows extend past the end of the buffer
pub fn draw_border(buffer: &mut [u8], bbox: BoundingBox) -> Result<(), DrawError> {
    if buffer.is_empty() {
        return Err(DrawError::NullBuffer);
    }

    let header = BmpHeader::parse(buffer)?;
    if !header.has_signature() {
        return Err(DrawError::BadSignature);
    }
    if header.bits_per_pixel != 24 {
        return Err(DrawError::UnsupportedDepth(header.bits_per_pixel));
    }

    let rect = bbox.normalized();
    let height = i64::from(header.height.unsigned_abs());
    if rect.left < 0
        || rect.top < 0
        || i64::from(rect.right) >= i64::from(header.width)
        || i64::from(rect.bottom) >= height
    {
        log::warn!(
            "rectangle {rect} outside {}x{} bitmap",
            header.width,
            height
        );
        return Err(DrawError::OutOfBounds);
    }

    let mut view = BitmapView::from_header(&header, buffer)?;

    let (left, top) = (rect.left as usize, rect.top as usize);
    let (right, bottom) = (rect.right as usize, rect.bottom as usize);
    for x in left..=right {
        view.set_pixel(x, top, BORDER_COLOR);
        view.set_pixel(x, bottom, BORDER_COLOR);
    }
    for y in top..=bottom {
        view.set_pixel(left, y, BORDER_COLOR);
        view.set_pixel(right, y, BORDER_COLOR);
    }

    Ok(())
}
