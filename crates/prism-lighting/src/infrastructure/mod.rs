//! Backend adapters and ambient services.
//!
//! Each backend module defines the narrow trait its vendor engine is
//! reached through, plus a provider that implements
//! [`LightingProvider`](crate::application::provider::LightingProvider) on
//! top of it.  Binding an engine trait to the real vendor library is left
//! to the host application.

pub mod bitmap;
pub mod cluster;
pub mod config;
pub mod mock;
pub mod zone;
