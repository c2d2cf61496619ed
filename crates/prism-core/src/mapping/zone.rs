//! Zone enumeration for engines without per-cell addressing.
//!
//! A zone engine only knows a handful of fixed regions per device.  There
//! is no mapping from a canonical cell to a zone; "all" requests are
//! expanded into one native write per zone instead.

/// The device class a zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneDevice {
    Keyboard,
    Mouse,
}

/// One addressable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone {
    pub device: ZoneDevice,
    pub index: u8,
}

/// Number of keyboard zones (indices `0..=2`).
pub const KEYBOARD_ZONE_COUNT: u8 = 3;

/// Number of mouse zones (indices `0..=2`).
pub const MOUSE_ZONE_COUNT: u8 = 3;

/// Every zone of `device`, in index order.
pub fn zones_of(device: ZoneDevice) -> impl Iterator<Item = Zone> {
    let count = match device {
        ZoneDevice::Keyboard => KEYBOARD_ZONE_COUNT,
        ZoneDevice::Mouse => MOUSE_ZONE_COUNT,
    };
    (0..count).map(move |index| Zone { device, index })
}

/// Every zone of every device: keyboard zones first, then mouse zones.
pub fn all_zones() -> impl Iterator<Item = Zone> {
    zones_of(ZoneDevice::Keyboard).chain(zones_of(ZoneDevice::Mouse))
}
