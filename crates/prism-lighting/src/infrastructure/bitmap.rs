//! Bitmap backend: one pixel frame per keyboard write.
//!
//! The engine owns a 21×6 frame of B, G, R, A bytes.  Keyboard, cell and
//! area writes paint into a buffer kept here and push the whole frame;
//! whole-device, per-key and mouse writes have dedicated native calls that
//! take percentages.
//!
//! The buffer is marked dirty whenever a pixel is painted.  Native
//! whole-device and per-key calls replace whatever the last frame showed, so
//! the buffer is zeroed first to keep the next frame write from resurrecting
//! stale pixels.

use prism_core::mapping::bitmap::{BitmapGeometry, BYTES_PER_PIXEL};
use prism_core::mapping::zone::{zones_of, Zone, ZoneDevice};
use prism_core::{
    CanonicalKey, CanonicalPosition, Color, GridArea, KeyTranslator, NativeKeyId, RgbPercent,
    NO_NATIVE_KEY,
};
use tracing::{debug, info, warn};

use crate::application::provider::{BackendKind, EngineError, LightingProvider, ProviderError};

/// Entry points of the bitmap vendor engine.
#[cfg_attr(test, mockall::automock)]
pub trait BitmapEngine: Send {
    fn init(&mut self) -> Result<(), EngineError>;
    fn shutdown(&mut self);
    /// Whole device, every LED.
    fn set_lighting(&mut self, color: RgbPercent) -> Result<(), EngineError>;
    /// Full frame, `BitmapGeometry::byte_len()` bytes.
    fn set_lighting_from_bitmap(&mut self, bitmap: &[u8]) -> Result<(), EngineError>;
    fn set_lighting_for_key(&mut self, key: NativeKeyId, color: RgbPercent)
        -> Result<(), EngineError>;
    fn set_lighting_for_target_zone(&mut self, zone: Zone, color: RgbPercent)
        -> Result<(), EngineError>;
}

/// [`LightingProvider`] over a [`BitmapEngine`].
pub struct BitmapProvider<E> {
    engine: E,
    geometry: BitmapGeometry,
    bitmap: Vec<u8>,
    dirty: bool,
    started: bool,
}

impl<E: BitmapEngine> BitmapProvider<E> {
    pub fn new(engine: E) -> Self {
        let geometry = BitmapGeometry::STANDARD;
        Self {
            engine,
            geometry,
            bitmap: vec![0; geometry.byte_len()],
            dirty: false,
            started: false,
        }
    }

    fn ensure_started(&self) -> Result<(), ProviderError> {
        if self.started {
            Ok(())
        } else {
            Err(ProviderError::NotStarted)
        }
    }

    fn clear_if_dirty(&mut self) {
        if self.dirty {
            self.bitmap.fill(0);
            self.dirty = false;
        }
    }

    fn paint(&mut self, offset: usize, color: Color) {
        let rgb = color.to_rgb8();
        self.bitmap[offset..offset + BYTES_PER_PIXEL]
            .copy_from_slice(&[rgb.b, rgb.g, rgb.r, u8::MAX]);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), ProviderError> {
        self.engine.set_lighting_from_bitmap(&self.bitmap)?;
        Ok(())
    }
}

impl<E: BitmapEngine> LightingProvider for BitmapProvider<E> {
    fn kind(&self) -> BackendKind {
        BackendKind::Bitmap
    }

    fn initialize(&mut self) -> bool {
        match self.engine.init() {
            Ok(()) => {
                self.started = true;
                info!("bitmap engine started");
                true
            }
            Err(e) => {
                warn!("bitmap engine failed to start: {e}");
                false
            }
        }
    }

    fn dispose(&mut self) {
        if !self.started {
            return;
        }
        self.clear_if_dirty();
        self.engine.shutdown();
        self.started = false;
    }

    fn set_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.ensure_started()?;
        self.clear_if_dirty();
        self.engine.set_lighting(color.to_percent())?;
        Ok(())
    }

    fn set_keyboard_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.ensure_started()?;
        let offsets: Vec<usize> = self.geometry.all_offsets().collect();
        for offset in offsets {
            self.paint(offset, color);
        }
        self.flush()
    }

    fn set_position(
        &mut self,
        position: CanonicalPosition,
        color: Color,
    ) -> Result<(), ProviderError> {
        self.ensure_started()?;
        if let Some(offset) = self.geometry.offset(position) {
            self.paint(offset, color);
        }
        self.flush()
    }

    fn set_area(&mut self, area: GridArea, color: Color) -> Result<(), ProviderError> {
        self.ensure_started()?;
        let offsets: Vec<usize> = self.geometry.offsets(area).collect();
        debug!(pixels = offsets.len(), "painting bitmap area");
        for offset in offsets {
            self.paint(offset, color);
        }
        self.flush()
    }

    fn set_key(&mut self, key: CanonicalKey, color: Color) -> Result<(), ProviderError> {
        self.ensure_started()?;
        let native = KeyTranslator::to_bitmap_key(key);
        if native == NO_NATIVE_KEY {
            return Ok(());
        }
        self.clear_if_dirty();
        self.engine.set_lighting_for_key(native, color.to_percent())?;
        Ok(())
    }

    fn set_mouse(&mut self, color: Color) -> Result<(), ProviderError> {
        self.ensure_started()?;
        let percent = color.to_percent();
        for zone in zones_of(ZoneDevice::Mouse) {
            self.engine.set_lighting_for_target_zone(zone, percent)?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
