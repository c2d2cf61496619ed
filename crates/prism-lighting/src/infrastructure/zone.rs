//! Zone backend: a few fixed regions per device plus per-key writes.
//!
//! The zone engine has no notion of a grid.  Keyboard-wide, mouse and
//! whole-device requests become one native write per zone; per-key
//! requests use the engine's `(row << 8) | column` key ids.  Canonical
//! positions and areas cannot be expressed and are accepted as no-ops once
//! the engine is connected.

use prism_core::mapping::zone::{all_zones, zones_of, Zone, ZoneDevice};
use prism_core::{
    CanonicalKey, CanonicalPosition, Color, GridArea, KeyTranslator, NativeKeyId, Rgb8,
    NO_NATIVE_KEY,
};
use tracing::{debug, info, warn};

use crate::application::provider::{BackendKind, EngineError, LightingProvider, ProviderError};

/// Entry points of the zone vendor engine.
#[cfg_attr(test, mockall::automock)]
pub trait ZoneEngine: Send {
    fn connect(&mut self) -> Result<(), EngineError>;
    fn disconnect(&mut self);
    fn set_zone(&mut self, zone: Zone, color: Rgb8) -> Result<(), EngineError>;
    fn set_key(&mut self, key: NativeKeyId, color: Rgb8) -> Result<(), EngineError>;
}

/// [`LightingProvider`] over a [`ZoneEngine`].
pub struct ZoneProvider<E> {
    engine: E,
    started: bool,
}

impl<E: ZoneEngine> ZoneProvider<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            started: false,
        }
    }

    fn write_zones(
        &mut self,
        zones: impl Iterator<Item = Zone>,
        color: Color,
    ) -> Result<(), ProviderError> {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        let rgb = color.to_rgb8();
        for zone in zones {
            self.engine.set_zone(zone, rgb)?;
        }
        Ok(())
    }
}

impl<E: ZoneEngine> LightingProvider for ZoneProvider<E> {
    fn kind(&self) -> BackendKind {
        BackendKind::Zone
    }

    fn initialize(&mut self) -> bool {
        match self.engine.connect() {
            Ok(()) => {
                self.started = true;
                info!("zone engine connected");
                true
            }
            Err(e) => {
                warn!("zone engine failed to connect: {e}");
                false
            }
        }
    }

    fn dispose(&mut self) {
        if self.started {
            self.engine.disconnect();
            self.started = false;
        }
    }

    fn set_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.write_zones(all_zones(), color)
    }

    fn set_keyboard_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.write_zones(zones_of(ZoneDevice::Keyboard), color)
    }

    fn set_position(
        &mut self,
        position: CanonicalPosition,
        _color: Color,
    ) -> Result<(), ProviderError> {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        debug!(?position, "zone engine cannot address cells; ignoring");
        Ok(())
    }

    fn set_area(&mut self, area: GridArea, _color: Color) -> Result<(), ProviderError> {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        debug!(?area, "zone engine cannot address cells; ignoring");
        Ok(())
    }

    fn set_key(&mut self, key: CanonicalKey, color: Color) -> Result<(), ProviderError> {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        let native = KeyTranslator::to_zone_key(key);
        if native == NO_NATIVE_KEY {
            return Ok(());
        }
        self.engine.set_key(native, color.to_rgb8())?;
        Ok(())
    }

    fn set_mouse(&mut self, color: Color) -> Result<(), ProviderError> {
        self.write_zones(zones_of(ZoneDevice::Mouse), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn connected(mut engine: MockZoneEngine) -> ZoneProvider<MockZoneEngine> {
        engine.expect_connect().times(1).returning(|| Ok(()));
        let mut provider = ZoneProvider::new(engine);
        assert!(provider.initialize());
        provider
    }

    #[test]
    fn test_set_all_writes_all_six_zones_in_bytes() {
        // Arrange
        let mut engine = MockZoneEngine::new();
        engine
            .expect_set_zone()
            .withf(|_, rgb| *rgb == Rgb8 { r: 0, g: 255, b: 127 })
            .times(6)
            .returning(|_, _| Ok(()));
        let mut provider = connected(engine);

        // Act
        let result = provider.set_all(Color::new(0.0, 1.0, 0.5));

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_set_keyboard_all_touches_keyboard_zones_only() {
        let mut engine = MockZoneEngine::new();
        engine
            .expect_set_zone()
            .withf(|zone, _| zone.device == ZoneDevice::Keyboard)
            .times(3)
            .returning(|_, _| Ok(()));
        let mut provider = connected(engine);

        provider.set_keyboard_all(Color::new(1.0, 1.0, 1.0)).unwrap();
    }

    #[test]
    fn test_set_mouse_touches_mouse_zones_only() {
        let mut engine = MockZoneEngine::new();
        engine
            .expect_set_zone()
            .withf(|zone, _| zone.device == ZoneDevice::Mouse)
            .times(3)
            .returning(|_, _| Ok(()));
        let mut provider = connected(engine);

        provider.set_mouse(Color::new(1.0, 1.0, 1.0)).unwrap();
    }

    #[test]
    fn test_position_and_area_issue_no_native_calls() {
        // No expectations beyond connect: any native call would panic.
        let mut provider = connected(MockZoneEngine::new());
        let area = GridArea::new(0, 0, 22, 6).unwrap();

        assert!(provider.set_area(area, Color::new(1.0, 0.0, 0.0)).is_ok());
        assert!(provider
            .set_position(CanonicalPosition::new(3, 3).unwrap(), Color::new(1.0, 0.0, 0.0))
            .is_ok());
    }

    #[test]
    fn test_position_and_area_before_initialize_report_not_started() {
        // Arrange
        let mut provider = ZoneProvider::new(MockZoneEngine::new());
        let area = GridArea::new(0, 0, 2, 2).unwrap();
        let position = CanonicalPosition::new(1, 1).unwrap();

        // Act
        let area_result = provider.set_area(area, Color::new(1.0, 0.0, 0.0));
        let position_result = provider.set_position(position, Color::new(1.0, 0.0, 0.0));

        // Assert
        assert!(matches!(area_result, Err(ProviderError::NotStarted)));
        assert!(matches!(position_result, Err(ProviderError::NotStarted)));
    }

    #[test]
    fn test_set_key_uses_row_column_id() {
        let mut engine = MockZoneEngine::new();
        engine
            .expect_set_key()
            .with(eq(0x0302), eq(Rgb8 { r: 255, g: 0, b: 0 }))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut provider = connected(engine);

        provider.set_key(CanonicalKey::A, Color::new(1.0, 0.0, 0.0)).unwrap();
    }

    #[test]
    fn test_set_key_for_unmapped_key_is_silent_no_op() {
        let mut provider = connected(MockZoneEngine::new());

        assert!(provider.set_key(CanonicalKey::Select, Color::new(1.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_failed_zone_write_stops_and_reports() {
        let mut engine = MockZoneEngine::new();
        engine.expect_set_zone().times(1).returning(|_, _| {
            Err(EngineError::Call {
                entry: "set_zone",
                reason: "timeout".into(),
            })
        });
        let mut provider = connected(engine);

        assert!(provider.set_all(Color::new(1.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_dispose_disconnects_only_when_connected() {
        let mut idle = ZoneProvider::new(MockZoneEngine::new());
        idle.dispose();

        let mut engine = MockZoneEngine::new();
        engine.expect_disconnect().times(1).return_const(());
        let mut provider = connected(engine);
        provider.dispose();
        provider.dispose();
    }
}
