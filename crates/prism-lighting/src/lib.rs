//! prism-lighting library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! share the same module tree.
//!
//! # What does prism-lighting do?
//!
//! It gives callers one color-control API over every RGB keyboard and mouse
//! on the machine, whichever vendor engine happens to drive them:
//!
//! 1. [`LightingCoordinator::initialize`] probes every registered backend
//!    independently and keeps the ones that come up.
//! 2. Each `set_*` call is validated once against the canonical 22×6 grid
//!    and then handed to every active backend.
//! 3. Each backend translates the canonical request into its engine's native
//!    addressing (a pixel bitmap, a few named zones, or LED clusters placed
//!    in millimeters) and issues the native calls.
//! 4. A backend that fails at runtime is logged and skipped; the others
//!    still receive the call.

/// Application layer: the provider contract and the coordinator.
pub mod application;

/// Infrastructure layer: backend adapters, configuration, and test doubles.
pub mod infrastructure;

pub use application::coordinator::{LightingCoordinator, LightingError, DEFAULT_PROBE_TIMEOUT};
pub use application::provider::{BackendKind, EngineError, LightingProvider, ProviderError};
pub use prism_core::{CanonicalKey, Color, GRID_HEIGHT, GRID_WIDTH};
