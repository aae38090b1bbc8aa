use crate::{BoundingBox, ColorSignature};
use spot_bmp::{BitmapView, BmpError, RowOrder};

/// Vertical convention of the reported box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectMode {
    /// Row 0 is the top of the picture. Use this to annotate.
    #[default]
    Visual,
    /// Row 0 is the bottom of the picture, for actuators whose y axis
    /// points up.
    BottomOrigin,
}

/// Finds the smallest box enclosing every pixel that matches `signature`.
///
/// Each pixel is visited once, in storage order. Rows are reduced as
/// bottom-origin indices and then flipped with `height - row - 1`, so the
/// highest matching row becomes the visual top. Returns `None` when no pixel
/// matches, which is an ordinary outcome.
pub fn detect<B: AsRef<[u8]>>(
    view: &BitmapView<B>,
    signature: &ColorSignature,
    mode: DetectMode,
) -> Option<BoundingBox> {
    let height = view.height();

    let (mut min_x, mut max_x) = (usize::MAX, 0);
    let (mut min_row, mut max_row) = (usize::MAX, 0);

    for stored in 0..height {
        let row = match view.row_order() {
            RowOrder::BottomUp => stored,
            RowOrder::TopDown => height - 1 - stored,
        };
        for (x, bgr) in view.stored_row(stored).chunks_exact(3).enumerate() {
            if signature.matches_bgr(bgr) {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_row = min_row.min(row);
                max_row = max_row.max(row);
            }
        }
    }

    if min_x == usize::MAX {
        return None;
    }

    let min_row = min_row.min(height - 1);
    let max_row = max_row.min(height - 1);
    let (top, bottom) = match mode {
        DetectMode::Visual => (height - max_row - 1, height - min_row - 1),
        DetectMode::BottomOrigin => (min_row, max_row),
    };

    Some(BoundingBox {
        left: min_x as i32,
        top: top as i32,
        right: max_x as i32,
        bottom: bottom as i32,
    })
}

/// Parses `frame` as a bitmap and runs `detect` on it.
pub fn detect_frame(
    frame: &[u8],
    signature: &ColorSignature,
    mode: DetectMode,
) -> Result<Option<BoundingBox>, BmpError> {
    let view = BitmapView::parse(frame)?;
    let found = detect(&view, signature, mode);
    match found {
        Some(bbox) => log::debug!("object {bbox} in {}x{} frame", view.width(), view.height()),
        None => log::debug!("no pixel matches {signature}"),
    }
    Ok(found)
}
