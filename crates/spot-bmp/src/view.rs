use crate::{BmpError, BmpHeader, HEADER_SIZE};
use image::Rgb;

const BYTES_PER_PIXEL: usize = 3;

/// Storage order of the pixel rows, taken from the sign of the header height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// First stored row is the bottom of the picture (positive height).
    BottomUp,
    /// First stored row is the top of the picture (negative height).
    TopDown,
}

/// A validated, non-owning interpretation of a 24-bit bitmap buffer.
///
/// `B` is whatever holds the bytes: `&[u8]` for reading, `&mut [u8]` (or
/// `Vec<u8>`) when pixels are written back. The view never copies the
/// pixel data and keeps no state besides the parsed geometry.
#[derive(Debug)]
pub struct BitmapView<B> {
    buffer: B,
    width: usize,
    height: usize,
    order: RowOrder,
    row_stride: usize,
    data_offset: usize,
}

/// Row length in bytes, padded up to a multiple of 4. `None` on overflow.
pub fn row_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_add(3)
        .map(|bytes| bytes / 4 * 4)
}

impl<B: AsRef<[u8]>> BitmapView<B> {
    /// Parses the header of `buffer` and validates it for pixel access.
    ///
    /// # Errors
    ///
    /// - `TooSmall` if the buffer cannot hold the 54 header bytes
    /// - `BadSignature` if it does not start with `BM`
    /// - `UnsupportedDepth` unless it has 24 bits per pixel
    /// - `NegativeWidth` if the width field is negative
    /// - `Truncated` if the pixel rows extend past the end of the buffer
    pub fn parse(buffer: B) -> Result<Self, BmpError> {
        let header = BmpHeader::parse(buffer.as_ref())?;
        Self::from_header(&header, buffer)
    }

    /// Validates an already decoded header against `buffer`.
    pub fn from_header(header: &BmpHeader, buffer: B) -> Result<Self, BmpError> {
        if !header.has_signature() {
            return Err(BmpError::BadSignature(header.signature));
        }
        if header.bits_per_pixel != 24 {
            return Err(BmpError::UnsupportedDepth(header.bits_per_pixel));
        }
        if header.width < 0 {
            return Err(BmpError::NegativeWidth(header.width));
        }
        if (header.data_offset as usize) < HEADER_SIZE {
            return Err(BmpError::BadDataOffset(header.data_offset));
        }

        let width = header.width as usize;
        let height = header.height.unsigned_abs() as usize;
        let data_offset = header.data_offset as usize;
        let len = buffer.as_ref().len();

        let geometry = row_stride(width).and_then(|stride| {
            stride
                .checked_mul(height)
                .and_then(|data| data.checked_add(data_offset))
                .map(|expected| (stride, expected))
        });
        let (row_stride, expected) = match geometry {
            Some(geometry) => geometry,
            None => {
                return Err(BmpError::Truncated {
                    expected: usize::MAX,
                    got: len,
                });
            }
        };
        if len < expected {
            return Err(BmpError::Truncated { expected, got: len });
        }

        let order = if header.is_top_down() {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        };

        Ok(Self {
            buffer,
            width,
            height,
            order,
            row_stride,
            data_offset,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count, always positive; the row order is reported by `row_order`.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_order(&self) -> RowOrder {
        self.order
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn data_offset(&self) -> usize {
        self.data_offset
    }

    /// Index of the stored row holding visual row `y`.
    pub fn storage_row(&self, y: usize) -> usize {
        match self.order {
            RowOrder::TopDown => y,
            RowOrder::BottomUp => self.height - 1 - y,
        }
    }

    /// Byte offset of the blue component of visual pixel `(x, y)`.
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        self.data_offset + self.storage_row(y) * self.row_stride + x * BYTES_PER_PIXEL
    }

    /// Reads visual pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb<u8> {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} bitmap",
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        let bgr = &self.buffer.as_ref()[offset..offset + BYTES_PER_PIXEL];
        Rgb([bgr[2], bgr[1], bgr[0]])
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgb<u8>> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Pixel bytes (BGR, no padding) of the `index`-th row in storage order.
    pub fn stored_row(&self, index: usize) -> &[u8] {
        let start = self.data_offset + index * self.row_stride;
        &self.buffer.as_ref()[start..start + self.width * BYTES_PER_PIXEL]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitmapView<B> {
    /// Writes visual pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb<u8>) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} bitmap",
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        let [r, g, b] = color.0;
        self.buffer.as_mut()[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&[b, g, r]);
    }
}
