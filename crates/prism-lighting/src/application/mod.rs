//! Application layer for prism-lighting.
//!
//! **Dependency rule**: this layer depends only on `prism_core`.  The
//! backend adapters in `infrastructure` implement [`provider::LightingProvider`]
//! and are handed to the coordinator from outside.

pub mod coordinator;
pub mod provider;
