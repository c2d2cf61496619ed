//! The canonical color and its per-backend conversions.
//!
//! Callers describe colors as three floats in `[0, 1]`.  Backends take
//! either percentages (`0..=100`) or bytes (`0..=255`).  Both conversions
//! truncate toward zero rather than round, so `0.999` becomes byte `254`:
//! output must match what the vendor reference tools produce.
//!
//! Clamping is the caller's job.  Channels outside `[0, 1]` are scaled as
//! they are (`2.0` becomes percent `200`); the float-to-`u8` cast only
//! saturates at the `0` and `255` bounds.

use serde::{Deserialize, Serialize};

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A color expressed as percentages, `0..=100` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbPercent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color expressed as bytes, `0..=255` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `floor(channel * 100)` per channel.
    pub fn to_percent(self) -> RgbPercent {
        RgbPercent {
            r: truncate(self.r, 100.0),
            g: truncate(self.g, 100.0),
            b: truncate(self.b, 100.0),
        }
    }

    /// `floor(channel * 255)` per channel.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: truncate(self.r, 255.0),
            g: truncate(self.g, 255.0),
            b: truncate(self.b, 255.0),
        }
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::new(r, g, b)
    }
}

fn truncate(channel: f32, scale: f32) -> u8 {
    // `as` truncates toward zero and saturates at the u8 bounds.
    (channel * scale) as u8
}
