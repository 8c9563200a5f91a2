//! Neighbour selection for the diamond and square sampling patterns.
//!
//! Given a target coordinate and a half-step `offset`, [`locate`] produces the
//! in-bounds neighbours in a fixed order:
//!
//! - Diamond (diagonal corners): NW, NE, SW, SE.
//! - Square (orthogonal midpoints): North, West, East, South.
//!
//! Candidates outside `[0, max_dim]` on either axis are dropped while the
//! relative order of the survivors is kept. The order is part of the contract:
//! observers record it and tests assert it.

use serde::Serialize;

/// Grid coordinate addressed as `(row, col)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sampling pattern used to gather neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Diamond,
    Square,
}

impl Pattern {
    /// Signed `(d_row, d_col)` unit offsets in emission order.
    const fn directions(self) -> [(isize, isize); 4] {
        match self {
            Pattern::Diamond => [(-1, -1), (-1, 1), (1, -1), (1, 1)],
            Pattern::Square => [(-1, 0), (0, -1), (0, 1), (1, 0)],
        }
    }
}

/// Up to four neighbour coordinates stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborList {
    coords: [Coord; 4],
    len: usize,
}

impl NeighborList {
    #[inline]
    fn push(&mut self, coord: Coord) {
        self.coords[self.len] = coord;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a NeighborList {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect the in-bounds neighbours of `center` at distance `offset`.
pub fn locate(center: Coord, offset: usize, max_dim: usize, pattern: Pattern) -> NeighborList {
    let mut out = NeighborList::default();
    for (dr, dc) in pattern.directions() {
        let row = shift(center.row, dr, offset, max_dim);
        let col = shift(center.col, dc, offset, max_dim);
        if let (Some(row), Some(col)) = (row, col) {
            out.push(Coord::new(row, col));
        }
    }
    out
}

#[inline]
fn shift(v: usize, dir: isize, offset: usize, max_dim: usize) -> Option<usize> {
    let shifted = match dir {
        0 => Some(v),
        d if d < 0 => v.checked_sub(offset),
        _ => v.checked_add(offset),
    };
    shifted.filter(|&s| s <= max_dim)
}
