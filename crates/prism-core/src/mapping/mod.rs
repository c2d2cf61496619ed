//! Coordinate mappers from the canonical grid to native addressing.
//!
//! Each backend addresses LEDs differently, so each gets its own mapper:
//!
//! - **`bitmap`** – canonical cell → byte offset into a B,G,R,A pixel buffer.
//!   The native bitmap may be narrower than the canonical grid; cells with
//!   no native pixel map to nothing.
//! - **`zone`** – no per-cell addressing at all; only the enumeration of
//!   the fixed keyboard and mouse zones.
//! - **`cluster`** – LED rectangles in millimeters bucketed onto canonical
//!   cells, producing a cell → LED-set lookup built once per device.

pub mod bitmap;
pub mod cluster;
pub mod zone;
