use serde::{Deserialize, Serialize};

/// A continuous map position, as reported by the game for unit centers.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }

    pub fn distance_to(self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Snap this point so a square footprint of `diameter` tiles centered on
    /// it covers whole tiles.
    ///
    /// Even footprints are centered on a tile corner, odd footprints on a
    /// tile center. Each axis is tested on its first decimal digit and
    /// nudged by half a tile when the parity is wrong.
    pub fn aligned(self, diameter: i32) -> Point2 {
        Point2 {
            x: align_axis(diameter, self.x),
            y: align_axis(diameter, self.y),
        }
    }

    /// Top-left tile of a square footprint of `radius` centered on this point.
    pub fn footprint_origin(self, radius: f32) -> (i32, i32) {
        ((self.x - radius) as i32, (self.y - radius) as i32)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point2 {
        Point2 {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Absorbs f32 error in values such as 10.8, whose tenths would otherwise
/// truncate to 107.
const TENTHS_EPSILON: f32 = 1e-3;

fn align_axis(diameter: i32, value: f32) -> f32 {
    let tenths_odd = ((value * 10.0 + TENTHS_EPSILON) as i32).rem_euclid(2) == 1;
    let even_footprint = diameter % 2 == 0;
    if tenths_odd == even_footprint {
        value + 0.5
    } else {
        value
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Point2 { x, y }
    }
}
