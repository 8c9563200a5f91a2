//! Step-size schedule and per-phase target traversal.

use crate::neighbors::Coord;

/// Step sizes visited by a full interpolation: `max_dim, max_dim / 2, ..., 2`.
#[derive(Clone, Copy, Debug)]
pub struct StepSchedule {
    step: usize,
}

impl StepSchedule {
    /// Schedule for a grid with `size` samples per side.
    pub fn new(size: usize) -> Self {
        Self {
            step: size.saturating_sub(1),
        }
    }
}

impl Iterator for StepSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step < 2 {
            return None;
        }
        let step = self.step;
        self.step /= 2;
        Some(step)
    }
}

/// Centres of every macro-cell of width `step`.
///
/// Anchors run over `0, step, 2·step, ...` strictly below `max_dim` on both
/// axes; each target sits `step / 2` below and right of its anchor.
pub fn diamond_targets(step: usize, max_dim: usize) -> impl Iterator<Item = Coord> {
    let offset = step / 2;
    (0..max_dim).step_by(step.max(1)).flat_map(move |r| {
        (0..max_dim)
            .step_by(step.max(1))
            .map(move |c| Coord::new(r + offset, c + offset))
    })
}

/// Edge midpoints for the square phase, in checkerboard order.
///
/// Rows advance by `step / 2` up to and including `max_dim`. Rows with even
/// index start at column `step / 2`, odd rows at column `0`; columns advance
/// by `step` in both cases.
pub fn square_targets(step: usize, max_dim: usize) -> impl Iterator<Item = Coord> {
    let offset = (step / 2).max(1);
    let stride = step.max(1);
    (0..=max_dim)
        .step_by(offset)
        .enumerate()
        .flat_map(move |(i, r)| {
            let start = if i % 2 == 0 { offset } else { 0 };
            (start..=max_dim)
                .step_by(stride)
                .map(move |c| Coord::new(r, c))
        })
}
