//! Square 8-bit height field with `2^n + 1` samples per side.
//!
//! The buffer is a single owned row-major `Vec<u8>`; `(row, col)` maps to
//! `row * size + col`. Construction is the only fallible step: sizes that are
//! not `2^n + 1` (n >= 1) are rejected with [`GridError::InvalidSize`] and never
//! rounded to a neighbouring valid size.

mod corners;

pub use corners::Corners;

use crate::error::GridError;
use crate::raster::{GridView, RasterView, RasterViewMut};

/// Returns `true` when `size == 2^n + 1` for some `n >= 1`.
#[inline]
pub fn is_valid_size(size: usize) -> bool {
    size >= 3 && (size - 1).is_power_of_two()
}

/// Side length `2^levels + 1`, or `None` on overflow.
pub fn size_for_levels(levels: u32) -> Option<usize> {
    1usize
        .checked_shl(levels)
        .and_then(|span| span.checked_add(1))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    size: usize,
    data: Vec<u8>,
}

impl HeightGrid {
    /// Zero-initialized grid of `size × size` samples.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !is_valid_size(size) {
            return Err(GridError::InvalidSize { size });
        }
        let len = size
            .checked_mul(size)
            .ok_or(GridError::TooLarge { size })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { size })?;
        data.resize(len, 0);
        Ok(Self { size, data })
    }

    /// Zero-initialized grid with the four corners seeded.
    pub fn with_corners(size: usize, corners: Corners) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        for ((row, col), value) in corners.placed(grid.max_dim()) {
            grid.set(row, col, value);
        }
        Ok(grid)
    }

    /// Grid of `2^levels + 1` samples per side.
    pub fn with_levels(levels: u32) -> Result<Self, GridError> {
        let size = size_for_levels(levels).ok_or(GridError::LevelsOverflow { levels })?;
        Self::new(size)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest valid coordinate, `size - 1`.
    #[inline]
    pub fn max_dim(&self) -> usize {
        self.size - 1
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let i = self.idx(row, col);
        self.data[i] = value;
    }

    /// Current corner samples.
    pub fn corners(&self) -> Corners {
        let m = self.max_dim();
        Corners::new(self.get(0, 0), self.get(0, m), self.get(m, 0), self.get(m, m))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_view(&self) -> GridView<'_> {
        GridView {
            size: self.size,
            data: &self.data,
        }
    }
}

impl RasterView for HeightGrid {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.size
    }
    #[inline]
    fn height(&self) -> usize {
        self.size
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.size;
        &self.data[start..start + self.size]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl RasterViewMut for HeightGrid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.size;
        &mut self.data[start..start + self.size]
    }
}
