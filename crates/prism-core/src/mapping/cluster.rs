//! Millimeter LED layout to canonical cell bucketing.
//!
//! The cluster engine does not report key rows and columns.  It reports
//! each LED as a rectangle in millimeters, relative to an arbitrary device
//! origin.  We approximate a grid position from that layout:
//!
//! 1. Compute the device's bounding box over all LED rectangles.
//! 2. Take each LED's center, normalize it against the bounding box, and
//!    scale by the canonical grid size:
//!    `cell_x = floor((center_x - min_x) / bounding_width * GRID_WIDTH)`,
//!    and likewise for `y`.
//! 3. Group LED ids by the resulting cell.  Several LEDs may share a cell
//!    (a wide key, or two small keys that fall into one bucket).
//!
//! The map is built once when the device is first queried and never
//! changes afterwards.  A center lying exactly on a cell boundary belongs
//! to the higher cell, which is what `floor` gives.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::grid::{CanonicalPosition, GridArea, GRID_HEIGHT, GRID_WIDTH};
use crate::keymap::NativeKeyId;

/// One LED as reported by the cluster engine, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedRect {
    pub led_id: NativeKeyId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LedRect {
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Axis-aligned bounding box of a device's LEDs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    fn of(leds: &[LedRect]) -> Option<Self> {
        let first = leds.first()?;
        let (mut min_x, mut min_y) = (first.left, first.top);
        let (mut max_x, mut max_y) = (first.left + first.width, first.top + first.height);
        for led in &leds[1..] {
            min_x = min_x.min(led.left);
            min_y = min_y.min(led.top);
            max_x = max_x.max(led.left + led.width);
            max_y = max_y.max(led.top + led.height);
        }
        Some(Self {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

/// Maps a center coordinate onto `0..cells` proportionally.
///
/// A degenerate extent (all LEDs stacked on one line) maps everything to
/// cell 0.  Results are clamped to the last cell so a zero-size LED sitting
/// on the far edge cannot fall outside the grid.
pub fn bucket(center: f64, min: f64, extent: f64, cells: i32) -> usize {
    if extent <= 0.0 {
        return 0;
    }
    let cell = ((center - min) / extent * f64::from(cells)).floor();
    cell.clamp(0.0, f64::from(cells - 1)) as usize
}

/// Immutable canonical cell → LED ids lookup for one device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterMap {
    cells: HashMap<CanonicalPosition, Vec<NativeKeyId>>,
    led_count: usize,
}

impl ClusterMap {
    /// Buckets every LED of a device onto the canonical grid.
    pub fn build(leds: &[LedRect]) -> Self {
        let Some(bounds) = Bounds::of(leds) else {
            return Self::default();
        };

        let mut cells: HashMap<CanonicalPosition, Vec<NativeKeyId>> = HashMap::new();
        for led in leds {
            let x = bucket(led.center_x(), bounds.min_x, bounds.width, GRID_WIDTH);
            let y = bucket(led.center_y(), bounds.min_y, bounds.height, GRID_HEIGHT);
            // bucket() clamps into the grid, so this cannot fail.
            if let Ok(cell) = CanonicalPosition::new(x as i32, y as i32) {
                cells.entry(cell).or_default().push(led.led_id);
            }
        }

        debug!(
            leds = leds.len(),
            occupied_cells = cells.len(),
            width_mm = bounds.width,
            height_mm = bounds.height,
            "built LED cluster map"
        );

        Self {
            cells,
            led_count: leds.len(),
        }
    }

    /// LEDs bucketed into `position`; empty if none.
    pub fn leds_at(&self, position: CanonicalPosition) -> &[NativeKeyId] {
        self.cells.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All LEDs bucketed into any cell of `area`, in cell iteration order.
    pub fn leds_in(&self, area: GridArea) -> Vec<NativeKeyId> {
        area.cells()
            .flat_map(|cell| self.leds_at(cell).iter().copied())
            .collect()
    }

    /// Number of LEDs the map was built from.
    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Number of cells that received at least one LED.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn led(led_id: NativeKeyId, left: f64, top: f64, width: f64, height: f64) -> LedRect {
        LedRect {
            led_id,
            left,
            top,
            width,
            height,
        }
    }

    fn pos(x: i32, y: i32) -> CanonicalPosition {
        CanonicalPosition::new(x, y).unwrap()
    }

    /// `columns × rows` keys of `pitch` mm, ids numbered row-major from 1.
    fn uniform_layout(columns: u32, rows: u32, pitch: f64) -> Vec<LedRect> {
        (0..rows)
            .flat_map(|r| {
                (0..columns).map(move |c| {
                    led(
                        r * columns + c + 1,
                        f64::from(c) * pitch,
                        f64::from(r) * pitch,
                        pitch,
                        pitch,
                    )
                })
            })
            .collect()
    }

    #[test]
    fn test_bucket_maps_center_to_middle_cell() {
        assert_eq!(bucket(50.0, 0.0, 100.0, GRID_WIDTH), 11);
        assert_eq!(bucket(50.0, 0.0, 100.0, GRID_HEIGHT), 3);
    }

    #[test]
    fn test_bucket_truncates_rather_than_rounds() {
        // 0.99 of one cell still belongs to the cell below it
        assert_eq!(bucket(4.5, 0.0, 100.0, GRID_WIDTH), 0);
    }

    #[test]
    fn test_bucket_clamps_far_edge_into_last_cell() {
        assert_eq!(bucket(100.0, 0.0, 100.0, GRID_WIDTH), 21);
    }

    #[test]
    fn test_bucket_with_degenerate_extent_is_cell_zero() {
        assert_eq!(bucket(7.0, 7.0, 0.0, GRID_WIDTH), 0);
    }

    #[test]
    fn test_led_at_bounding_box_center_maps_to_center_cell() {
        // 11 × 5 keys: the middle key is centered exactly on the box center.
        let leds = uniform_layout(11, 5, 19.0);
        let center_led = 2 * 11 + 5 + 1;
        let map = ClusterMap::build(&leds);

        let center = pos(GRID_WIDTH / 2, GRID_HEIGHT / 2);
        assert!(map.leds_at(center).contains(&center_led));
    }

    #[test]
    fn test_full_size_layout_maps_corners_to_grid_corners() {
        let leds = uniform_layout(22, 6, 19.05);
        let map = ClusterMap::build(&leds);

        assert_eq!(map.leds_at(pos(0, 0)), &[1]);
        assert_eq!(map.leds_at(pos(21, 5)), &[22 * 6]);
        assert_eq!(map.occupied_cells(), 22 * 6);
    }

    #[test]
    fn test_offset_origin_is_normalized_away() {
        let mut leds = uniform_layout(22, 6, 10.0);
        for l in &mut leds {
            l.left += 250.0;
            l.top -= 40.0;
        }
        let map = ClusterMap::build(&leds);
        assert_eq!(map.leds_at(pos(0, 0)), &[1]);
    }

    #[test]
    fn test_wide_key_lands_in_the_cell_of_its_center() {
        // A 10-key-wide bar under a 22-key row: center (110, 15) of a
        // 220 × 20 box, i.e. column 11 and row floor(0.75 * 6) = 4.
        let mut leds = uniform_layout(22, 1, 10.0);
        leds.push(led(999, 60.0, 10.0, 100.0, 10.0));
        let map = ClusterMap::build(&leds);

        let spot = pos(11, 4);
        assert_eq!(map.leds_at(spot), &[999]);
    }

    #[test]
    fn test_several_leds_can_share_one_cell() {
        let leds = vec![
            led(1, 0.0, 0.0, 1.0, 1.0),
            led(2, 1.0, 0.0, 1.0, 1.0),
            led(3, 219.0, 59.0, 1.0, 1.0),
        ];
        let map = ClusterMap::build(&leds);
        assert_eq!(map.leds_at(pos(0, 0)), &[1, 2]);
        assert_eq!(map.led_count(), 3);
    }

    #[test]
    fn test_leds_in_area_accumulates_across_cells() {
        let leds = uniform_layout(22, 6, 10.0);
        let map = ClusterMap::build(&leds);
        let area = GridArea::new(8, 2, 2, 2).unwrap();

        let mut got = map.leds_in(area);
        got.sort_unstable();
        assert_eq!(got, vec![2 * 22 + 9, 2 * 22 + 10, 3 * 22 + 9, 3 * 22 + 10]);
    }

    #[test]
    fn test_empty_layout_builds_empty_map() {
        let map = ClusterMap::build(&[]);
        assert_eq!(map.led_count(), 0);
        assert!(map.leds_at(pos(0, 0)).is_empty());
    }
}
