//! Canonical cell to bitmap byte offset mapping.
//!
//! The bitmap engine takes one whole frame per write: `width × height`
//! pixels of four bytes each, in B, G, R, A order, row-major from the
//! top-left key.  Canonical cell `(x, y)` is pixel `(x, y)` when it exists.

use crate::domain::grid::{CanonicalPosition, GridArea};

/// Bytes per bitmap pixel (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Dimensions of a native bitmap frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapGeometry {
    pub width: usize,
    pub height: usize,
}

impl BitmapGeometry {
    /// The per-key bitmap the engine ships with: 21 columns by 6 rows.
    pub const STANDARD: BitmapGeometry = BitmapGeometry {
        width: 21,
        height: 6,
    };

    /// Total frame size in bytes.
    pub const fn byte_len(&self) -> usize {
        self.width * self.height * BYTES_PER_PIXEL
    }

    /// Byte offset of the pixel for `position`.
    ///
    /// Returns `None` when the canonical cell lies outside the native
    /// bitmap (the canonical grid is one column wider than the standard
    /// frame).
    pub fn offset(&self, position: CanonicalPosition) -> Option<usize> {
        let (x, y) = (position.x(), position.y());
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(BYTES_PER_PIXEL * (y * self.width + x))
    }

    /// Byte offsets for every cell of `area` that has a native pixel.
    pub fn offsets(&self, area: GridArea) -> impl Iterator<Item = usize> + '_ {
        area.cells().filter_map(move |cell| self.offset(cell))
    }

    /// Byte offsets for every pixel of the frame.
    pub fn all_offsets(&self) -> impl Iterator<Item = usize> {
        (0..self.width * self.height).map(|i| i * BYTES_PER_PIXEL)
    }
}
