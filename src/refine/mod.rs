//! Diamond-Square refinement without a roughness term.
//!
//! Overview
//! - Starting at `step = size - 1`, each pass runs the diamond phase (macro-cell
//!   centres from their four diagonal corners) followed by the square phase
//!   (edge midpoints from up to four orthogonal neighbours), then halves the
//!   step. The loop ends once `step < 2`.
//! - Every value written is the truncated integer mean of the in-bounds
//!   neighbours, clamped to `u8`. There is no random displacement, so the result
//!   is a pure function of the grid size and the corner seeds.
//!
//! Instrumentation
//! - [`Interpolator::interpolate_observed`] threads a [`RefineObserver`] through
//!   both phases. The observer is a generic parameter; the production path uses
//!   [`NoopObserver`], which compiles away.
//!
//! Parallelism
//! - Writes within one phase never land on a cell read by another target of the
//!   same phase. With the `parallel` feature, [`Interpolator::interpolate`]
//!   evaluates each phase with rayon and writes back afterwards; results are
//!   bit-identical to the sequential walk. The observed path is always
//!   sequential so recorded order stays deterministic.

pub mod observer;
#[cfg(feature = "parallel")]
mod parallel;
pub mod schedule;

pub use observer::{NoopObserver, Phase, RefineObserver};
pub use schedule::{diamond_targets, square_targets, StepSchedule};

use crate::average::average;
use crate::diagnostics::{GridStats, InterpolationReport, PassReport, TimingBreakdown};
use crate::grid::HeightGrid;
use crate::neighbors::{locate, Coord};
use log::debug;
use std::time::Instant;

/// Drives the diamond/square schedule over a [`HeightGrid`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpolator;

impl Interpolator {
    pub fn new() -> Self {
        Self
    }

    /// Run every pass until all cells are defined.
    pub fn interpolate(&self, grid: &mut HeightGrid) {
        debug!(
            "Interpolator::interpolate size={} passes={}",
            grid.size(),
            StepSchedule::new(grid.size()).count()
        );
        for step in StepSchedule::new(grid.size()) {
            self.run_pass(grid, step);
        }
    }

    /// Same as [`interpolate`](Self::interpolate) but reports every neighbour
    /// list and write to `observer`, in traversal order.
    pub fn interpolate_observed<O: RefineObserver>(&self, grid: &mut HeightGrid, mut observer: O) {
        for step in StepSchedule::new(grid.size()) {
            observer.on_pass(step);
            let diamond = self.diamond_phase(grid, step, &mut observer);
            let square = self.square_phase(grid, step, &mut observer);
            debug!("Interpolator pass step={step} diamond={diamond} square={square}");
        }
    }

    /// Interpolate and collect per-pass timing plus final grid statistics.
    pub fn interpolate_with_report(&self, grid: &mut HeightGrid) -> InterpolationReport {
        let corners = grid.corners();
        let total_start = Instant::now();
        let mut passes = Vec::new();
        let mut timing = TimingBreakdown::default();
        for step in StepSchedule::new(grid.size()) {
            let pass_start = Instant::now();
            let (diamond_writes, square_writes) = self.run_pass(grid, step);
            let elapsed_ms = pass_start.elapsed().as_secs_f64() * 1000.0;
            timing.push(format!("pass_step_{step}"), elapsed_ms);
            passes.push(PassReport {
                step,
                offset: step / 2,
                diamond_writes,
                square_writes,
                elapsed_ms,
            });
        }
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        InterpolationReport {
            size: grid.size(),
            corners,
            passes,
            stats: GridStats::from_grid(grid),
            timing,
        }
    }

    /// Fill every macro-cell centre at `step`. Returns the number of writes.
    ///
    /// `step` must be an even divisor of `max_dim`; smaller steps are a no-op.
    pub fn diamond_phase<O: RefineObserver>(
        &self,
        grid: &mut HeightGrid,
        step: usize,
        observer: O,
    ) -> usize {
        if step < 2 {
            return 0;
        }
        let targets = diamond_targets(step, grid.max_dim());
        run_phase(grid, Phase::Diamond, step, targets, observer)
    }

    /// Fill every edge midpoint at `step`. Returns the number of writes.
    pub fn square_phase<O: RefineObserver>(
        &self,
        grid: &mut HeightGrid,
        step: usize,
        observer: O,
    ) -> usize {
        if step < 2 {
            return 0;
        }
        let targets = square_targets(step, grid.max_dim());
        run_phase(grid, Phase::Square, step, targets, observer)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_pass(&self, grid: &mut HeightGrid, step: usize) -> (usize, usize) {
        let diamond = self.diamond_phase(grid, step, NoopObserver);
        let square = self.square_phase(grid, step, NoopObserver);
        debug!("Interpolator pass step={step} diamond={diamond} square={square}");
        (diamond, square)
    }

    #[cfg(feature = "parallel")]
    fn run_pass(&self, grid: &mut HeightGrid, step: usize) -> (usize, usize) {
        let diamond = parallel::run_phase(grid, Phase::Diamond, step);
        let square = parallel::run_phase(grid, Phase::Square, step);
        debug!("Interpolator pass (parallel) step={step} diamond={diamond} square={square}");
        (diamond, square)
    }
}

/// Convenience wrapper around [`Interpolator::interpolate`].
pub fn interpolate(grid: &mut HeightGrid) {
    Interpolator::new().interpolate(grid);
}

fn run_phase<I, O>(
    grid: &mut HeightGrid,
    phase: Phase,
    step: usize,
    targets: I,
    mut observer: O,
) -> usize
where
    I: Iterator<Item = Coord>,
    O: RefineObserver,
{
    let offset = step / 2;
    let max_dim = grid.max_dim();
    let mut written = 0usize;
    for target in targets {
        let neighbors = locate(target, offset, max_dim, phase.pattern());
        observer.on_neighbors(phase, step, target, neighbors.as_slice());
        let value = average(neighbors.as_slice(), grid);
        grid.set(target.row, target.col, value);
        observer.on_write(phase, step, target, value);
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Corners;

    #[test]
    fn three_by_three_phases() {
        let mut grid = HeightGrid::with_corners(3, Corners::new(14, 64, 64, 110)).unwrap();
        let interp = Interpolator::new();

        assert_eq!(interp.diamond_phase(&mut grid, 2, NoopObserver), 1);
        assert_eq!(grid.get(1, 1), 63);

        assert_eq!(interp.square_phase(&mut grid, 2, NoopObserver), 4);
        assert_eq!(grid.get(0, 1), 47);
        assert_eq!(grid.get(1, 0), 47);
        assert_eq!(grid.get(1, 2), 79);
        assert_eq!(grid.get(2, 1), 79);
    }

    #[test]
    fn phases_below_step_two_do_nothing() {
        let mut grid = HeightGrid::with_corners(3, Corners::uniform(50)).unwrap();
        let before = grid.clone();
        let interp = Interpolator::new();
        assert_eq!(interp.diamond_phase(&mut grid, 1, NoopObserver), 0);
        assert_eq!(interp.square_phase(&mut grid, 0, NoopObserver), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn unseeded_grid_stays_zero() {
        let mut grid = HeightGrid::new(9).unwrap();
        interpolate(&mut grid);
        assert!(grid.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn report_counts_writes_per_pass() {
        let mut grid = HeightGrid::with_corners(9, Corners::new(0, 80, 160, 240)).unwrap();
        let report = Interpolator::new().interpolate_with_report(&mut grid);
        let steps: Vec<usize> = report.passes.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![8, 4, 2]);
        let diamonds: Vec<usize> = report.passes.iter().map(|p| p.diamond_writes).collect();
        assert_eq!(diamonds, vec![1, 4, 16]);
        let squares: Vec<usize> = report.passes.iter().map(|p| p.square_writes).collect();
        assert_eq!(squares, vec![4, 12, 40]);
        let writes: usize = diamonds.iter().chain(squares.iter()).sum();
        assert_eq!(writes, 81 - 4);
        assert_eq!(report.corners, Corners::new(0, 80, 160, 240));
        assert_eq!(report.timing.stages.len(), 3);
    }
}
