//! Position-cluster backend: LEDs placed in millimeters, many devices.
//!
//! At initialize the engine is asked for every device, its role metadata
//! and its LED rectangles.  Each device gets a [`ClusterMap`] built once
//! from those rectangles and a color buffer holding one entry per LED.
//!
//! A write updates the buffer of every affected device, pushes each touched
//! buffer once, and finishes with exactly one global flush.
//!
//! Device roles come from layout metadata, not from the reported device
//! type: a device is a keyboard when it reports a valid logical layout, and
//! a mouse when it reports a valid physical layout but is not a keyboard.

use std::collections::HashMap;

use prism_core::{
    CanonicalKey, CanonicalPosition, ClusterMap, Color, GridArea, KeyTranslator, LedRect,
    NativeKeyId, Rgb8, NO_NATIVE_KEY,
};
use tracing::{debug, info, warn};

use crate::application::provider::{BackendKind, EngineError, LightingProvider, ProviderError};

/// Layout value a device reports when it has no such layout.
pub const INVALID_LAYOUT: u32 = 0;

/// Role metadata of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClusterDeviceInfo {
    pub logical_layout: u32,
    pub physical_layout: u32,
}

/// One entry of a device color buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedColor {
    pub led_id: NativeKeyId,
    pub color: Rgb8,
}

/// Entry points of the position-cluster vendor engine.
#[cfg_attr(test, mockall::automock)]
pub trait ClusterEngine: Send {
    fn handshake(&mut self) -> Result<(), EngineError>;
    fn device_count(&mut self) -> Result<usize, EngineError>;
    fn device_info(&mut self, device: usize) -> Result<ClusterDeviceInfo, EngineError>;
    fn led_positions(&mut self, device: usize) -> Result<Vec<LedRect>, EngineError>;
    /// Stages colors for `device`; nothing is shown until [`flush`](Self::flush).
    fn set_led_colors(&mut self, device: usize, colors: &[LedColor]) -> Result<(), EngineError>;
    fn flush(&mut self) -> Result<(), EngineError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceRole {
    Keyboard,
    Mouse,
    Other,
}

impl DeviceRole {
    fn of(info: ClusterDeviceInfo) -> Self {
        if info.logical_layout != INVALID_LAYOUT {
            DeviceRole::Keyboard
        } else if info.physical_layout != INVALID_LAYOUT {
            DeviceRole::Mouse
        } else {
            DeviceRole::Other
        }
    }
}

/// One device's role, cell map and color buffer.
#[derive(Debug)]
struct ClusterDevice {
    index: usize,
    role: DeviceRole,
    map: ClusterMap,
    colors: Vec<LedColor>,
    slot_of: HashMap<NativeKeyId, usize>,
}

impl ClusterDevice {
    fn new(index: usize, info: ClusterDeviceInfo, leds: &[LedRect]) -> Self {
        let colors: Vec<LedColor> = leds
            .iter()
            .map(|led| LedColor {
                led_id: led.led_id,
                color: Rgb8::default(),
            })
            .collect();
        let slot_of = colors.iter().enumerate().map(|(i, c)| (c.led_id, i)).collect();
        Self {
            index,
            role: DeviceRole::of(info),
            map: ClusterMap::build(leds),
            colors,
            slot_of,
        }
    }

    fn fill(&mut self, color: Rgb8) {
        for entry in &mut self.colors {
            entry.color = color;
        }
    }

    /// Recolors the given LEDs; returns whether any belonged to this device.
    fn paint(&mut self, leds: &[NativeKeyId], color: Rgb8) -> bool {
        let mut touched = false;
        for id in leds {
            if let Some(&slot) = self.slot_of.get(id) {
                self.colors[slot].color = color;
                touched = true;
            }
        }
        touched
    }
}

/// [`LightingProvider`] over a [`ClusterEngine`].
pub struct ClusterProvider<E> {
    engine: E,
    devices: Vec<ClusterDevice>,
    started: bool,
}

impl<E: ClusterEngine> ClusterProvider<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            devices: Vec::new(),
            started: false,
        }
    }

    fn discover(&mut self) -> Result<Vec<ClusterDevice>, EngineError> {
        self.engine.handshake()?;
        let count = self.engine.device_count()?;
        let mut devices = Vec::with_capacity(count);
        for index in 0..count {
            let info = self.engine.device_info(index)?;
            let leds = self.engine.led_positions(index)?;
            let device = ClusterDevice::new(index, info, &leds);
            debug!(
                device = index,
                role = ?device.role,
                leds = device.map.led_count(),
                cells = device.map.occupied_cells(),
                "cluster device discovered"
            );
            devices.push(device);
        }
        Ok(devices)
    }

    /// Applies `paint` to every device of `role` (all devices when `None`),
    /// pushes each device it touched, then flushes once.
    fn write<F>(&mut self, role: Option<DeviceRole>, mut paint: F) -> Result<(), ProviderError>
    where
        F: FnMut(&mut ClusterDevice) -> bool,
    {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        for device in &mut self.devices {
            if role.is_some_and(|r| r != device.role) {
                continue;
            }
            if paint(device) {
                self.engine.set_led_colors(device.index, &device.colors)?;
            }
        }
        self.engine.flush()?;
        Ok(())
    }
}

impl<E: ClusterEngine> LightingProvider for ClusterProvider<E> {
    fn kind(&self) -> BackendKind {
        BackendKind::PositionCluster
    }

    fn initialize(&mut self) -> bool {
        match self.discover() {
            Ok(devices) => {
                info!(devices = devices.len(), "cluster engine connected");
                self.devices = devices;
                self.started = true;
                true
            }
            Err(e) => {
                warn!("cluster engine failed to connect: {e}");
                false
            }
        }
    }

    fn dispose(&mut self) {
        self.devices.clear();
        self.started = false;
    }

    fn set_all(&mut self, color: Color) -> Result<(), ProviderError> {
        let rgb = color.to_rgb8();
        self.write(None, |device| {
            device.fill(rgb);
            true
        })
    }

    fn set_keyboard_all(&mut self, color: Color) -> Result<(), ProviderError> {
        let rgb = color.to_rgb8();
        self.write(Some(DeviceRole::Keyboard), |device| {
            device.fill(rgb);
            true
        })
    }

    fn set_position(
        &mut self,
        position: CanonicalPosition,
        color: Color,
    ) -> Result<(), ProviderError> {
        let rgb = color.to_rgb8();
        self.write(Some(DeviceRole::Keyboard), |device| {
            let leds = device.map.leds_at(position).to_vec();
            device.paint(&leds, rgb)
        })
    }

    fn set_area(&mut self, area: GridArea, color: Color) -> Result<(), ProviderError> {
        let rgb = color.to_rgb8();
        self.write(Some(DeviceRole::Keyboard), |device| {
            let leds = device.map.leds_in(area);
            device.paint(&leds, rgb)
        })
    }

    fn set_key(&mut self, key: CanonicalKey, color: Color) -> Result<(), ProviderError> {
        if !self.started {
            return Err(ProviderError::NotStarted);
        }
        let led = KeyTranslator::to_cluster_led(key);
        if led == NO_NATIVE_KEY {
            return Ok(());
        }
        let rgb = color.to_rgb8();
        let mut done = false;
        self.write(Some(DeviceRole::Keyboard), |device| {
            if done {
                return false;
            }
            done = device.paint(&[led], rgb);
            done
        })
    }

    fn set_mouse(&mut self, color: Color) -> Result<(), ProviderError> {
        let rgb = color.to_rgb8();
        self.write(Some(DeviceRole::Mouse), |device| {
            device.fill(rgb);
            true
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
