//! Producing bitmap frames.
//!
//! The camera delivers JPEG or raw RGB; everything downstream works on
//! 24-bit bitmaps, so frames pass through here first.

use crate::view::row_stride;
use crate::{HEADER_SIZE, RowOrder, TranscodeError};
use image::codecs::bmp::BmpEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb};

/// Encodes tightly packed RGB rows (top row first) as a bottom-up 24-bit bitmap.
///
/// # Errors
///
/// Returns `TranscodeError::Length` if `rgb` does not hold `width * height`
/// pixels, `TranscodeError::Image` if the encoder fails.
pub fn encode_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(TranscodeError::Length {
            expected,
            got: rgb.len(),
        });
    }

    let mut out = Vec::with_capacity(HEADER_SIZE + expected + height as usize * 3);
    BmpEncoder::new(&mut out).write_image(rgb, width, height, ExtendedColorType::Rgb8)?;
    Ok(out)
}

/// Decodes a JPEG frame and re-encodes it as a 24-bit bitmap.
pub fn jpeg_to_bmp(jpeg: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let rgb = image::load_from_memory_with_format(jpeg, image::ImageFormat::Jpeg)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("transcoding {width}x{height} jpeg frame to bitmap");
    encode_rgb(width, height, rgb.as_raw())
}

/// Builds an uncompressed 24-bit bitmap filled with one color.
///
/// Unlike `encode_rgb` this can produce either row order, which the
/// `image` encoder cannot.
pub fn blank(width: u32, height: u32, order: RowOrder, fill: Rgb<u8>) -> Vec<u8> {
    let stride = row_stride(width as usize).unwrap_or(0);
    let data_len = stride * height as usize;
    let file_size = (HEADER_SIZE + data_len) as u32;
    let signed_height = match order {
        RowOrder::BottomUp => height as i32,
        RowOrder::TopDown => -(height as i32),
    };

    let mut bytes = Vec::with_capacity(HEADER_SIZE + data_len);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&signed_height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&(data_len as u32).to_le_bytes());
    // 2835 pixels/meter = 72 dpi
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    let [r, g, b] = fill.0;
    for _ in 0..height {
        for _ in 0..width {
            bytes.extend_from_slice(&[b, g, r]);
        }
        bytes.resize(bytes.len() + stride - width as usize * 3, 0);
    }
    bytes
}
