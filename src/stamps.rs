//! Rasterization of footprints and fields into a grid layer.
//!
//! Both stamps return the number of tiles actually written; tiles that fall
//! outside the grid are skipped.

use crate::grid::GridLayer;
use crate::location::Point2;
use itertools::iproduct;

/// Write `value` into the axis-aligned square of side `2 * radius` whose
/// top-left tile is `center - radius`, truncated.
///
/// Structure footprints are squares regardless of the radius used to size them.
pub fn square_stamp(grid: &mut GridLayer, center: Point2, radius: f32, value: u8) -> usize {
    let (x0, y0) = center.footprint_origin(radius);
    let size = (radius * 2.0).ceil() as i32;

    iproduct!(x0..x0 + size, y0..y0 + size)
        .filter(|&(x, y)| grid.set(x, y, value))
        .count()
}

/// Write `value` into every tile of the bounding square whose coordinate
/// lies within `radius` of `center`.
///
/// The bounding square starts at `center - radius` rounded half to even and
/// spans `2 * radius` tiles, truncated.
pub fn circle_stamp(grid: &mut GridLayer, center: Point2, radius: f32, value: u8) -> usize {
    let x0 = (center.x - radius).round_ties_even() as i32;
    let y0 = (center.y - radius).round_ties_even() as i32;
    let size = (radius * 2.0) as i32;

    iproduct!(x0..x0 + size, y0..y0 + size)
        .filter(|&(x, y)| center.distance_to(x as f32, y as f32) <= radius)
        .filter(|&(x, y)| grid.set(x, y, value))
        .count()
}
