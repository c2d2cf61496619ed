//! End-to-end tests of the lighting coordinator.
//!
//! The first group drives the coordinator with recording mock providers.
//! The second group wires the real backend providers to in-memory engines
//! and checks what reaches each native entry point.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use prism_core::mapping::zone::Zone;
use prism_core::{CanonicalKey, Color, LedRect, NativeKeyId, Rgb8, RgbPercent};
use prism_lighting::infrastructure::bitmap::{BitmapEngine, BitmapProvider};
use prism_lighting::infrastructure::cluster::{
    ClusterDeviceInfo, ClusterEngine, ClusterProvider, LedColor,
};
use prism_lighting::infrastructure::mock::{MockProvider, ProviderCall};
use prism_lighting::infrastructure::zone::{ZoneEngine, ZoneProvider};
use prism_lighting::{
    BackendKind, EngineError, LightingCoordinator, LightingError, LightingProvider, GRID_HEIGHT,
    GRID_WIDTH,
};

fn boxed(p: impl LightingProvider + 'static) -> Box<dyn LightingProvider> {
    Box::new(p)
}

// ── Coordinator over mock providers ───────────────────────────────────────────

#[tokio::test]
async fn test_two_of_three_backends_join_and_receive_set_all() {
    // Arrange
    let bitmap = MockProvider::new(BackendKind::Bitmap);
    let zone = MockProvider::new(BackendKind::Zone);
    let cluster = MockProvider::new(BackendKind::PositionCluster).failing_init();
    let (bitmap_calls, zone_calls, cluster_calls) = (bitmap.calls(), zone.calls(), cluster.calls());
    let mut coordinator = LightingCoordinator::new(vec![boxed(bitmap), boxed(zone), boxed(cluster)]);

    // Act
    let joined = coordinator.initialize().await.unwrap();
    coordinator.set_all((0.0, 1.0, 0.0)).unwrap();

    // Assert
    assert!(joined);
    assert!(coordinator.is_enabled(BackendKind::Bitmap));
    assert!(coordinator.is_enabled(BackendKind::Zone));
    assert!(!coordinator.is_enabled(BackendKind::PositionCluster));

    let green = ProviderCall::SetAll(Color::new(0.0, 1.0, 0.0));
    assert_eq!(bitmap_calls.set_calls(), vec![green.clone()]);
    assert_eq!(zone_calls.set_calls(), vec![green]);
    assert!(cluster_calls.set_calls().is_empty());
}

#[tokio::test]
async fn test_out_of_range_area_is_rejected_before_any_backend() {
    // Arrange
    let provider = MockProvider::new(BackendKind::Bitmap);
    let calls = provider.calls();
    let mut coordinator = LightingCoordinator::new(vec![boxed(provider)]);
    coordinator.initialize().await.unwrap();

    // Act
    let wide = coordinator.set_area(20, 0, 5, 1, (1.0, 0.0, 0.0));
    let tall = coordinator.set_area(0, 3, 1, 4, (1.0, 0.0, 0.0));
    let negative = coordinator.set_area(-1, 0, 1, 1, (1.0, 0.0, 0.0));

    // Assert
    assert!(matches!(wide, Err(LightingError::Range(_))));
    assert!(matches!(tall, Err(LightingError::Range(_))));
    assert!(matches!(negative, Err(LightingError::Range(_))));
    assert!(calls.set_calls().is_empty());
}

#[tokio::test]
async fn test_area_boundaries_are_inclusive_of_the_full_grid() {
    let provider = MockProvider::new(BackendKind::Zone);
    let calls = provider.calls();
    let mut coordinator = LightingCoordinator::new(vec![boxed(provider)]);
    coordinator.initialize().await.unwrap();

    assert!(coordinator.set_area(0, 0, GRID_WIDTH, GRID_HEIGHT, (1.0, 1.0, 1.0)).is_ok());
    assert!(coordinator.set_area(21, 5, 1, 1, (1.0, 1.0, 1.0)).is_ok());
    assert!(coordinator.set_area(4, 2, 0, 0, (1.0, 1.0, 1.0)).is_ok());
    assert_eq!(calls.set_calls().len(), 3);
}

#[tokio::test]
async fn test_every_grid_cell_is_a_valid_position() {
    let mut coordinator = LightingCoordinator::new(vec![boxed(MockProvider::new(BackendKind::Bitmap))]);
    coordinator.initialize().await.unwrap();

    for x in 0..GRID_WIDTH {
        for y in 0..GRID_HEIGHT {
            assert!(coordinator.set_position(x, y, (0.2, 0.4, 0.6)).is_ok(), "({x}, {y})");
        }
    }
    assert!(matches!(
        coordinator.set_position(GRID_WIDTH, 0, (0.2, 0.4, 0.6)),
        Err(LightingError::Range(_))
    ));
    assert!(matches!(
        coordinator.set_position(0, GRID_HEIGHT, (0.2, 0.4, 0.6)),
        Err(LightingError::Range(_))
    ));
}

#[tokio::test]
async fn test_dispose_twice_leaves_every_backend_disabled() {
    // Arrange
    let mut coordinator = LightingCoordinator::new(vec![
        boxed(MockProvider::new(BackendKind::Bitmap)),
        boxed(MockProvider::new(BackendKind::Zone)),
    ]);
    coordinator.initialize().await.unwrap();

    // Act / Assert
    coordinator.dispose();
    assert!(!coordinator.is_enabled(BackendKind::Bitmap));
    assert!(!coordinator.is_enabled(BackendKind::Zone));

    coordinator.dispose();
    assert!(!coordinator.is_enabled(BackendKind::Bitmap));
    assert!(!coordinator.is_enabled(BackendKind::Zone));
    assert!(matches!(
        coordinator.set_all((1.0, 1.0, 1.0)),
        Err(LightingError::NotInitialized)
    ));
}

#[tokio::test]
async fn test_reinitialize_after_dispose_restores_active_set() {
    let mut coordinator = LightingCoordinator::new(vec![boxed(MockProvider::new(BackendKind::Zone))]);
    coordinator.initialize().await.unwrap();
    coordinator.dispose();

    let joined = coordinator.initialize().await.unwrap();

    assert!(joined);
    assert_eq!(coordinator.active_backends(), vec![BackendKind::Zone]);
}

#[tokio::test]
async fn test_slow_probe_is_abandoned_at_the_deadline() {
    // Arrange
    let slow = MockProvider::new(BackendKind::Bitmap).with_probe_delay(Duration::from_millis(400));
    let fast = MockProvider::new(BackendKind::Zone);
    let mut coordinator = LightingCoordinator::new(vec![boxed(slow), boxed(fast)])
        .with_probe_timeout(Duration::from_millis(50));

    // Act
    let joined = coordinator.initialize().await.unwrap();

    // Assert
    assert!(joined);
    assert_eq!(coordinator.active_backends(), vec![BackendKind::Zone]);
}

// ── Real providers over in-memory engines ─────────────────────────────────────

type Log = Arc<Mutex<Vec<String>>>;

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

struct MemoryBitmapEngine(Log);

impl BitmapEngine for MemoryBitmapEngine {
    fn init(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
    fn shutdown(&mut self) {
        self.0.lock().unwrap().push("shutdown".into());
    }
    fn set_lighting(&mut self, c: RgbPercent) -> Result<(), EngineError> {
        self.0.lock().unwrap().push(format!("all {} {} {}", c.r, c.g, c.b));
        Ok(())
    }
    fn set_lighting_from_bitmap(&mut self, bitmap: &[u8]) -> Result<(), EngineError> {
        self.0.lock().unwrap().push(format!("frame {}", bitmap.len()));
        Ok(())
    }
    fn set_lighting_for_key(&mut self, key: NativeKeyId, c: RgbPercent) -> Result<(), EngineError> {
        self.0.lock().unwrap().push(format!("key {key:#x} {} {} {}", c.r, c.g, c.b));
        Ok(())
    }
    fn set_lighting_for_target_zone(&mut self, zone: Zone, _: RgbPercent) -> Result<(), EngineError> {
        self.0.lock().unwrap().push(format!("zone {:?} {}", zone.device, zone.index));
        Ok(())
    }
}

struct MemoryZoneEngine {
    log: Log,
    reachable: bool,
}

impl ZoneEngine for MemoryZoneEngine {
    fn connect(&mut self) -> Result<(), EngineError> {
        if self.reachable {
            Ok(())
        } else {
            Err(EngineError::Unavailable("no SDK service".into()))
        }
    }
    fn disconnect(&mut self) {
        self.log.lock().unwrap().push("disconnect".into());
    }
    fn set_zone(&mut self, zone: Zone, _: Rgb8) -> Result<(), EngineError> {
        self.log.lock().unwrap().push(format!("zone {:?} {}", zone.device, zone.index));
        Ok(())
    }
    fn set_key(&mut self, key: NativeKeyId, _: Rgb8) -> Result<(), EngineError> {
        self.log.lock().unwrap().push(format!("key {key:#06x}"));
        Ok(())
    }
}

/// One keyboard with 22 × 6 evenly spaced LEDs, ids 1..=132 row-major.
struct MemoryClusterEngine(Log);

impl ClusterEngine for MemoryClusterEngine {
    fn handshake(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
    fn device_count(&mut self) -> Result<usize, EngineError> {
        Ok(1)
    }
    fn device_info(&mut self, device: usize) -> Result<ClusterDeviceInfo, EngineError> {
        match device {
            0 => Ok(ClusterDeviceInfo {
                logical_layout: 1,
                physical_layout: 1,
            }),
            n => Err(EngineError::NoDevice(n)),
        }
    }
    fn led_positions(&mut self, _: usize) -> Result<Vec<LedRect>, EngineError> {
        Ok((0..132u32)
            .map(|i| LedRect {
                led_id: i + 1,
                left: f64::from(i % 22) * 19.0,
                top: f64::from(i / 22) * 19.0,
                width: 19.0,
                height: 19.0,
            })
            .collect())
    }
    fn set_led_colors(&mut self, device: usize, colors: &[LedColor]) -> Result<(), EngineError> {
        let lit = colors.iter().filter(|c| c.color != Rgb8::default()).count();
        self.0.lock().unwrap().push(format!("device {device} lit {lit}"));
        Ok(())
    }
    fn flush(&mut self) -> Result<(), EngineError> {
        self.0.lock().unwrap().push("flush".into());
        Ok(())
    }
}

#[tokio::test]
async fn test_real_providers_translate_one_request_three_ways() {
    // Arrange
    let (bitmap_log, zone_log, cluster_log) = (Log::default(), Log::default(), Log::default());
    let mut coordinator = LightingCoordinator::new(vec![
        boxed(BitmapProvider::new(MemoryBitmapEngine(bitmap_log.clone()))),
        boxed(ZoneProvider::new(MemoryZoneEngine {
            log: zone_log.clone(),
            reachable: true,
        })),
        boxed(ClusterProvider::new(MemoryClusterEngine(cluster_log.clone()))),
    ]);
    assert!(coordinator.initialize().await.unwrap());

    // Act
    coordinator.set_area(0, 0, 2, 2, (1.0, 0.0, 0.0)).unwrap();

    // Assert
    assert_eq!(entries(&bitmap_log), vec!["frame 504"]);
    assert!(entries(&zone_log).is_empty());
    assert_eq!(entries(&cluster_log), vec!["device 0 lit 4", "flush"]);
}

#[tokio::test]
async fn test_key_missing_from_one_table_still_reaches_the_others() {
    // Arrange
    let (bitmap_log, zone_log, cluster_log) = (Log::default(), Log::default(), Log::default());
    let mut coordinator = LightingCoordinator::new(vec![
        boxed(BitmapProvider::new(MemoryBitmapEngine(bitmap_log.clone()))),
        boxed(ZoneProvider::new(MemoryZoneEngine {
            log: zone_log.clone(),
            reachable: true,
        })),
        boxed(ClusterProvider::new(MemoryClusterEngine(cluster_log.clone()))),
    ]);
    coordinator.initialize().await.unwrap();

    // Act: Select has a scan code but no zone id and no cluster LED.
    let result = coordinator.set_key(CanonicalKey::Select, (0.5, 0.5, 0.5));

    // Assert
    assert!(result.is_ok());
    assert_eq!(entries(&bitmap_log), vec!["key 0x15d 50 50 50"]);
    assert!(entries(&zone_log).is_empty());
    assert!(entries(&cluster_log).is_empty());
}

#[tokio::test]
async fn test_unreachable_engine_is_left_out_and_others_are_disposed() {
    // Arrange
    let (bitmap_log, zone_log) = (Log::default(), Log::default());
    let mut coordinator = LightingCoordinator::new(vec![
        boxed(BitmapProvider::new(MemoryBitmapEngine(bitmap_log.clone()))),
        boxed(ZoneProvider::new(MemoryZoneEngine {
            log: zone_log.clone(),
            reachable: false,
        })),
    ]);

    // Act
    let joined = coordinator.initialize().await.unwrap();
    coordinator.set_mouse((0.0, 0.0, 1.0)).unwrap();
    coordinator.dispose();

    // Assert
    assert!(joined);
    assert_eq!(coordinator.active_backends(), Vec::<BackendKind>::new());
    assert_eq!(
        entries(&bitmap_log),
        vec!["zone Mouse 0", "zone Mouse 1", "zone Mouse 2", "shutdown"]
    );
    assert!(entries(&zone_log).is_empty());
}
