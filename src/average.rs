//! Saturating integer mean over a neighbour list.

use crate::grid::HeightGrid;
use crate::neighbors::Coord;

/// Mean of the samples at `coords`, truncated toward zero and clamped to `u8`.
///
/// Samples are summed in `u32` so four (or more) full-scale values cannot
/// overflow. An empty list yields `0`; the refinement passes never produce one.
pub fn average(coords: &[Coord], grid: &HeightGrid) -> u8 {
    if coords.is_empty() {
        return 0;
    }
    let sum: u32 = coords
        .iter()
        .map(|c| u32::from(grid.get(c.row, c.col)))
        .sum();
    saturate(sum / coords.len() as u32)
}

#[inline]
fn saturate(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}
