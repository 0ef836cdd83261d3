use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates, inclusive on both ends.
/// Ordering is (row, col) = (y, x) throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BoundingBox {
    pub fn new(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Self {
        debug_assert!(min_row <= max_row && min_col <= max_col);
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Bounding-box area in pixels. This, not the component pixel count,
    /// is the quantity the region filters threshold on.
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }
}
