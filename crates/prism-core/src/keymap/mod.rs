//! Key code translation tables for per-backend key addressing.
//!
//! The canonical representation is [`CanonicalKey`].  Each backend has one
//! static table converting it to that backend's native key identifier:
//!
//! | Module         | Backend          | Native identifier                    |
//! |----------------|------------------|--------------------------------------|
//! | `bitmap_keys`  | Bitmap engine    | keyboard scan-code name              |
//! | `zone_keys`    | Zone engine      | `(row << 8) \| column` matrix key    |
//! | `cluster_keys` | Cluster engine   | LED identifier                       |
//!
//! Tables are not injective: two canonical keys may share a native id on a
//! given backend.  A key the backend cannot address yields
//! [`NO_NATIVE_KEY`], which callers treat as "no LED to update".

pub mod bitmap_keys;
pub mod canonical;
pub mod cluster_keys;
pub mod zone_keys;

pub use canonical::CanonicalKey;

/// A backend's native key identifier.
pub type NativeKeyId = u32;

/// Sentinel returned for keys a backend has no LED for.
pub const NO_NATIVE_KEY: NativeKeyId = 0;

/// Unified key translator providing every backend direction.
pub struct KeyTranslator;

impl KeyTranslator {
    /// Translates a canonical key to a bitmap-engine scan-code name.
    ///
    /// Returns [`NO_NATIVE_KEY`] if the engine has no such key.
    pub fn to_bitmap_key(key: CanonicalKey) -> NativeKeyId {
        bitmap_keys::to_native(key)
    }

    /// Translates a canonical key to a zone-engine matrix key.
    ///
    /// Returns [`NO_NATIVE_KEY`] if the engine has no such key.
    pub fn to_zone_key(key: CanonicalKey) -> NativeKeyId {
        zone_keys::to_native(key)
    }

    /// Translates a canonical key to a cluster-engine LED identifier.
    ///
    /// Returns [`NO_NATIVE_KEY`] if the engine has no such LED.
    pub fn to_cluster_led(key: CanonicalKey) -> NativeKeyId {
        cluster_keys::to_native(key)
    }
}
