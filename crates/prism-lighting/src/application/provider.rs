//! The contract every lighting backend implements.
//!
//! A provider owns one vendor engine and speaks canonical coordinates on
//! its public side.  It receives requests that the coordinator has already
//! validated: a [`CanonicalPosition`] or [`GridArea`] handed to a provider
//! is always inside the 22×6 grid.  How much of that request a backend can
//! honor depends on its engine; a zone backend, for example, treats
//! positions and areas as no-ops.

use std::fmt;

use prism_core::{CanonicalKey, CanonicalPosition, Color, GridArea};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three backend variants, named by how their engine addresses LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    /// A fixed-size pixel frame written in one call.
    Bitmap,
    /// A handful of named regions per device.
    Zone,
    /// LEDs reported as millimeter rectangles, bucketed onto the grid.
    PositionCluster,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Bitmap => "bitmap",
            BackendKind::Zone => "zone",
            BackendKind::PositionCluster => "position-cluster",
        };
        f.write_str(name)
    }
}

/// Failure reported by a native vendor engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("native engine unavailable: {0}")]
    Unavailable(String),
    #[error("native call `{entry}` failed: {reason}")]
    Call { entry: &'static str, reason: String },
    #[error("no device with index {0}")]
    NoDevice(usize),
}

/// Error type for a single backend call.
///
/// The coordinator never surfaces these to its caller; it logs them and
/// moves on to the next backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("provider used before a successful initialize")]
    NotStarted,
}

/// A lighting backend as seen by the coordinator.
///
/// Providers are moved onto blocking threads while they are probed, so
/// they must be `Send`.  All other calls happen on the coordinator's
/// thread, one at a time.
pub trait LightingProvider: Send {
    /// Which variant this provider is.
    fn kind(&self) -> BackendKind;

    /// Brings the native engine up.  Returns `false` when the engine is
    /// absent or refuses to start; the provider then stays inert.
    fn initialize(&mut self) -> bool;

    /// Releases the native engine.  Never fails, and does nothing if the
    /// provider was never started.
    fn dispose(&mut self);

    /// Every LED on every device this backend drives.
    fn set_all(&mut self, color: Color) -> Result<(), ProviderError>;

    /// Every keyboard LED.
    fn set_keyboard_all(&mut self, color: Color) -> Result<(), ProviderError>;

    /// The keyboard LEDs at one canonical cell.
    fn set_position(&mut self, position: CanonicalPosition, color: Color)
        -> Result<(), ProviderError>;

    /// The keyboard LEDs inside a canonical rectangle.
    fn set_area(&mut self, area: GridArea, color: Color) -> Result<(), ProviderError>;

    /// The LED of one canonical key.  A key this backend cannot address
    /// is a successful no-op.
    fn set_key(&mut self, key: CanonicalKey, color: Color) -> Result<(), ProviderError>;

    /// Every mouse LED.
    fn set_mouse(&mut self, color: Color) -> Result<(), ProviderError>;
}
