//! Square-spiral search for the nearest legal anchor.
//!
//! The walk starts at the desired anchor and moves one tile at a time:
//! on ring `n` it takes `n` vertical steps then `n` horizontal steps, and
//! flips direction before the next ring. The first ring goes up then left,
//! the second down then right, and so on. Every position visited is
//! offered to the caller's predicate. With `R` rings at most `R * (R + 1)`
//! positions are tested after the anchor itself.

use crate::location::Point2;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Leg {
    Vertical,
    Horizontal,
}

/// Cumulative tile offsets of the spiral walk, one per single-tile move.
#[derive(Clone, Debug)]
pub struct SpiralWalk {
    rings: u32,
    ring: u32,
    step: u32,
    leg: Leg,
    positive: bool,
    dx: i32,
    dy: i32,
}

impl SpiralWalk {
    pub fn new(rings: u32) -> Self {
        SpiralWalk {
            rings,
            ring: 1,
            step: 0,
            leg: Leg::Vertical,
            positive: true,
            dx: 0,
            dy: 0,
        }
    }

    /// Number of offsets a fresh walk yields.
    pub fn position_count(&self) -> usize {
        self.rings as usize * (self.rings as usize + 1)
    }
}

impl Iterator for SpiralWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.ring > self.rings {
            return None;
        }

        let sign = if self.positive { 1 } else { -1 };
        match self.leg {
            Leg::Vertical => self.dy += sign,
            Leg::Horizontal => self.dx -= sign,
        }

        self.step += 1;
        if self.step == self.ring {
            self.step = 0;
            match self.leg {
                Leg::Vertical => self.leg = Leg::Horizontal,
                Leg::Horizontal => {
                    self.leg = Leg::Vertical;
                    self.positive = !self.positive;
                    self.ring += 1;
                }
            }
        }

        Some((self.dx, self.dy))
    }
}

/// Test `anchor` and then every spiral position around it, returning the
/// first one `is_valid` accepts.
pub fn spiral_search<F>(anchor: Point2, rings: u32, mut is_valid: F) -> Option<Point2>
where
    F: FnMut(Point2) -> bool,
{
    if is_valid(anchor) {
        return Some(anchor);
    }

    SpiralWalk::new(rings)
        .map(|(dx, dy)| anchor.offset(dx as f32, dy as f32))
        .find(|candidate| is_valid(*candidate))
}
