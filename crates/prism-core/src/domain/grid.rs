//! The canonical lighting grid.
//!
//! Every backend is normalized onto one logical coordinate space: 22 columns
//! by 6 rows, zero-based, with (0, 0) in the top-left corner of the keyboard.
//! Positions and rectangles are validated against this grid once, before any
//! backend is touched.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the canonical grid, in keys.
pub const GRID_WIDTH: i32 = 22;

/// Height of the canonical grid, in keys.
pub const GRID_HEIGHT: i32 = 6;

/// The axis a range check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors raised when a coordinate or rectangle leaves the canonical grid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// The span `start .. start + len` does not fit in `0 .. limit`.
    #[error("{axis} span starting at {start} with length {len} exceeds the grid (0..{limit})")]
    OutOfRange {
        axis: Axis,
        start: i32,
        len: i32,
        limit: i32,
    },
}

/// Checks that `start .. start + len` lies within `0 .. limit`.
fn check_span(axis: Axis, start: i32, len: i32, limit: i32) -> Result<(), GridError> {
    // i64 so that huge lengths cannot wrap around into range.
    let end = i64::from(start) + i64::from(len);
    if start < 0 || len < 0 || end > i64::from(limit) {
        return Err(GridError::OutOfRange {
            axis,
            start,
            len,
            limit,
        });
    }
    Ok(())
}

/// A single cell of the canonical grid.
///
/// Construction through [`CanonicalPosition::new`] guarantees
/// `0 <= x < GRID_WIDTH` and `0 <= y < GRID_HEIGHT`.  Deserialization
/// goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct CanonicalPosition {
    x: u8,
    y: u8,
}

impl CanonicalPosition {
    /// Validates `(x, y)` against the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] naming the first offending axis.
    pub fn new(x: i32, y: i32) -> Result<Self, GridError> {
        check_span(Axis::X, x, 1, GRID_WIDTH)?;
        check_span(Axis::Y, y, 1, GRID_HEIGHT)?;
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Zero-based column.
    pub fn x(&self) -> usize {
        usize::from(self.x)
    }

    /// Zero-based row.
    pub fn y(&self) -> usize {
        usize::from(self.y)
    }
}

/// A validated rectangle of canonical cells.
///
/// Zero width or height is allowed and covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArea")]
pub struct GridArea {
    x: u8,
    y: u8,
    width: u8,
    height: u8,
}

impl GridArea {
    /// Validates the rectangle with top-left corner `(x, y)`.
    ///
    /// Requires `x, y >= 0`, `x + width <= GRID_WIDTH` and
    /// `y + height <= GRID_HEIGHT`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] naming the first offending axis.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GridError> {
        check_span(Axis::X, x, width, GRID_WIDTH)?;
        check_span(Axis::Y, y, height, GRID_HEIGHT)?;
        Ok(Self {
            x: x as u8,
            y: y as u8,
            width: width as u8,
            height: height as u8,
        })
    }

    /// The area covering a single position.
    pub fn single(position: CanonicalPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: 1,
            height: 1,
        }
    }

    /// The area covering the whole grid.
    pub fn full() -> Self {
        Self {
            x: 0,
            y: 0,
            width: GRID_WIDTH as u8,
            height: GRID_HEIGHT as u8,
        }
    }

    pub fn x(&self) -> usize {
        usize::from(self.x)
    }

    pub fn y(&self) -> usize {
        usize::from(self.y)
    }

    pub fn width(&self) -> usize {
        usize::from(self.width)
    }

    pub fn height(&self) -> usize {
        usize::from(self.height)
    }

    /// Returns `true` if the area covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterates every covered cell, column-major (x outer, y inner).
    pub fn cells(&self) -> impl Iterator<Item = CanonicalPosition> {
        let (x0, y0, w, h) = (self.x, self.y, self.width, self.height);
        (x0..x0 + w).flat_map(move |x| (y0..y0 + h).map(move |y| CanonicalPosition { x, y }))
    }
}

// ── Validated deserialization ─────────────────────────────────────────────────

/// Unchecked wire shape of a [`CanonicalPosition`].
#[derive(Deserialize)]
struct RawPosition {
    x: i32,
    y: i32,
}

impl TryFrom<RawPosition> for CanonicalPosition {
    type Error = GridError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

/// Unchecked wire shape of a [`GridArea`].
#[derive(Deserialize)]
struct RawArea {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl TryFrom<RawArea> for GridArea {
    type Error = GridError;

    fn try_from(raw: RawArea) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.width, raw.height)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
