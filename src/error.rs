//! Error type for grid construction.
//!
//! Only construction can fail: once a [`HeightGrid`](crate::grid::HeightGrid)
//! exists every refinement operation is total.

/// Failure raised when a grid cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Requested dimension is not of the form `2^n + 1` with `n >= 1`.
    #[error("invalid grid size {size}: expected 2^n + 1 with n >= 1 (3, 5, 9, 17, ...)")]
    InvalidSize { size: usize },
    /// `2^levels + 1` does not fit in `usize`.
    #[error("invalid grid depth {levels}: 2^{levels} + 1 overflows the grid size")]
    LevelsOverflow { levels: u32 },
    /// The `size × size` buffer overflows `usize` or could not be allocated.
    #[error("grid size {size} exceeds addressable memory")]
    TooLarge { size: usize },
}
