use crate::BmpError;
use std::fmt;

/// 14-byte file header plus 40-byte BITMAPINFOHEADER.
pub const HEADER_SIZE: usize = 54;

pub const SIGNATURE: [u8; 2] = *b"BM";

/// Compression field of the info header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Rgb,
    Rle8,
    Rle4,
    Bitfields,
    Jpeg,
    Png,
    Other(u32),
}

impl From<u32> for Compression {
    fn from(value: u32) -> Self {
        match value {
            0 => Compression::Rgb,
            1 => Compression::Rle8,
            2 => Compression::Rle4,
            3 => Compression::Bitfields,
            4 => Compression::Jpeg,
            5 => Compression::Png,
            other => Compression::Other(other),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Rgb => write!(f, "BI_RGB (uncompressed)"),
            Compression::Rle8 => write!(f, "BI_RLE8"),
            Compression::Rle4 => write!(f, "BI_RLE4"),
            Compression::Bitfields => write!(f, "BI_BITFIELDS"),
            Compression::Jpeg => write!(f, "BI_JPEG"),
            Compression::Png => write!(f, "BI_PNG"),
            Compression::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Every field of the two bitmap headers, decoded little-endian.
///
/// Parsing only requires the 54 header bytes to be present. Whether the
/// signature, depth and pixel data are usable is decided by `BitmapView`.
#[derive(Debug, Clone, PartialEq)]
pub struct BmpHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub data_offset: u32,
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn i32_at(bytes: &[u8], offset: usize) -> i32 {
    u32_at(bytes, offset) as i32
}

impl BmpHeader {
    /// Decodes the header fields at their fixed offsets.
    ///
    /// # Errors
    ///
    /// Returns `BmpError::TooSmall` if `bytes` is shorter than `HEADER_SIZE`.
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < HEADER_SIZE {
            return Err(BmpError::TooSmall { len: bytes.len() });
        }

        Ok(Self {
            signature: [bytes[0], bytes[1]],
            file_size: u32_at(bytes, 2),
            reserved1: u16_at(bytes, 6),
            reserved2: u16_at(bytes, 8),
            data_offset: u32_at(bytes, 10),
            header_size: u32_at(bytes, 14),
            width: i32_at(bytes, 18),
            height: i32_at(bytes, 22),
            planes: u16_at(bytes, 26),
            bits_per_pixel: u16_at(bytes, 28),
            compression: Compression::from(u32_at(bytes, 30)),
            image_size: u32_at(bytes, 34),
            x_pixels_per_meter: i32_at(bytes, 38),
            y_pixels_per_meter: i32_at(bytes, 42),
            colors_used: u32_at(bytes, 46),
            colors_important: u32_at(bytes, 50),
        })
    }

    pub fn has_signature(&self) -> bool {
        self.signature == SIGNATURE
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

impl fmt::Display for BmpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- BMP FILE HEADER ---")?;
        writeln!(
            f,
            "Signature: {}",
            String::from_utf8_lossy(&self.signature)
        )?;
        writeln!(f, "File Size: {} bytes", self.file_size)?;
        writeln!(f, "Reserved1: 0x{:X}", self.reserved1)?;
        writeln!(f, "Reserved2: 0x{:X}", self.reserved2)?;
        writeln!(f, "Data Offset: {} bytes", self.data_offset)?;
        writeln!(f, "--- BMP INFO HEADER ---")?;
        writeln!(f, "Header Size: {} bytes", self.header_size)?;
        writeln!(f, "Width: {} pixels", self.width)?;
        writeln!(f, "Height: {} pixels", self.height)?;
        writeln!(f, "Planes: {}", self.planes)?;
        writeln!(f, "Bits Per Pixel: {}", self.bits_per_pixel)?;
        writeln!(f, "Compression: {}", self.compression)?;
        writeln!(f, "Image Size: {} bytes", self.image_size)?;
        writeln!(f, "X Resolution: {} pixels/meter", self.x_pixels_per_meter)?;
        writeln!(f, "Y Resolution: {} pixels/meter", self.y_pixels_per_meter)?;
        writeln!(f, "Colors Used: {}", self.colors_used)?;
        write!(f, "Important Colors: {}", self.colors_important)
    }
}
