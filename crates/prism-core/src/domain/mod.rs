//! Domain entities for Prism.
//!
//! Pure value types with no engine or device dependencies: the canonical
//! lighting grid and the canonical color.  Everything in the outer layers
//! (providers, coordinator) is expressed in these terms before it is
//! translated into a backend's native addressing.

/// The canonical 22×6 grid and its range checks.
pub mod grid;

/// The canonical color and its per-backend conversions.
pub mod color;
