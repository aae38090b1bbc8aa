use std::fmt;

/// Inclusive pixel rectangle in top-origin coordinates.
///
/// Boxes returned by `detect` always satisfy `left <= right` and
/// `top <= bottom`. Boxes built by hand may not; `normalized` fixes that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Swaps reversed edges so that `left <= right` and `top <= bottom`.
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// `true` if `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.left, other.top) && self.contains(other.right, other.bottom)
    }

    /// Center pixel, rounded toward the top-left.
    pub fn center(&self) -> (i32, i32) {
        (
            self.left + (self.right - self.left) / 2,
            self.top + (self.bottom - self.top) / 2,
        )
    }

    /// Signed distance of the box center from the center of a
    /// `frame_width` x `frame_height` frame. Positive means right / down.
    pub fn offset_from_center(&self, frame_width: usize, frame_height: usize) -> (i32, i32) {
        let (cx, cy) = self.center();
        (cx - (frame_width / 2) as i32, cy - (frame_height / 2) as i32)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
