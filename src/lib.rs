#![doc = include_str!("../README.md")]

// Core surface
pub mod average;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod refine;

// Peripheral helpers for tools and tests
pub mod config;
pub mod diagnostics;
pub mod raster;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::GridError;
pub use crate::grid::{is_valid_size, Corners, HeightGrid};
pub use crate::refine::{interpolate, Interpolator};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use diamond_square::prelude::*;
///
/// let mut grid = HeightGrid::with_corners(3, Corners::new(14, 64, 64, 110)).unwrap();
/// Interpolator::new().interpolate(&mut grid);
/// assert_eq!(grid.get(1, 1), 63);
/// assert_eq!(grid.get(2, 1), 79);
/// ```
pub mod prelude {
    pub use crate::grid::{Corners, HeightGrid};
    pub use crate::raster::RasterView;
    pub use crate::refine::{Interpolator, NoopObserver, Phase, RefineObserver};
    pub use crate::GridError;
}
