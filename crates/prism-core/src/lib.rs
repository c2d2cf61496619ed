//! # prism-core
//!
//! Shared library for Prism containing the canonical lighting grid, the
//! color model, the canonical key enumeration, and the per-backend
//! translation tables and coordinate mappers.
//!
//! This crate has zero dependencies on vendor engines, OS APIs, or devices.
//!
//! # Architecture overview
//!
//! Prism drives RGB peripherals (keyboards and mice) through several
//! unrelated vendor lighting engines.  Each engine addresses its LEDs in a
//! different way: one takes a whole per-pixel bitmap, one only knows a
//! handful of named zones, and one reports every LED as a rectangle in
//! millimeters.  Callers should not care which one is present.
//!
//! This crate (`prism-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The canonical 22×6 grid every backend is normalized
//!   onto, range validation for positions and rectangles, and the
//!   [`Color`] type with its truncating conversions.
//!
//! - **`keymap`** – The [`CanonicalKey`] enumeration and one static
//!   translation table per backend converting it to that backend's native
//!   key identifier.
//!
//! - **`mapping`** – Conversion of canonical cells and rectangles into each
//!   backend's native addressing: bitmap byte offsets, zone indices, or
//!   LED-cluster sets.

pub mod domain;
pub mod keymap;
pub mod mapping;

pub use domain::color::{Color, Rgb8, RgbPercent};
pub use domain::grid::{Axis, CanonicalPosition, GridArea, GridError, GRID_HEIGHT, GRID_WIDTH};
pub use keymap::canonical::CanonicalKey;
pub use keymap::{KeyTranslator, NativeKeyId, NO_NATIVE_KEY};
pub use mapping::cluster::{ClusterMap, LedRect};
