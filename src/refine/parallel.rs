use super::schedule::{diamond_targets, square_targets};
use super::Phase;
use crate::average::average;
use crate::grid::HeightGrid;
use crate::neighbors::{locate, Coord};
use rayon::prelude::*;

/// Evaluate one phase across the rayon pool, then write the results back.
///
/// Targets of a single phase never read each other, so every average can be
/// taken from the grid as it stood before the phase started.
pub(super) fn run_phase(grid: &mut HeightGrid, phase: Phase, step: usize) -> usize {
    if step < 2 {
        return 0;
    }
    let offset = step / 2;
    let max_dim = grid.max_dim();
    let targets: Vec<Coord> = match phase {
        Phase::Diamond => diamond_targets(step, max_dim).collect(),
        Phase::Square => square_targets(step, max_dim).collect(),
    };

    let snapshot: &HeightGrid = grid;
    let values: Vec<(Coord, u8)> = targets
        .into_par_iter()
        .map(|target| {
            let neighbors = locate(target, offset, max_dim, phase.pattern());
            (target, average(neighbors.as_slice(), snapshot))
        })
        .collect();

    for &(target, value) in &values {
        grid.set(target.row, target.col, value);
    }
    values.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Corners;
    use crate::refine::{Interpolator, NoopObserver, StepSchedule};

    #[test]
    fn matches_sequential_walk() {
        let corners = Corners::new(3, 250, 91, 17);
        let mut par = HeightGrid::with_corners(65, corners).unwrap();
        let mut seq = par.clone();
        let interp = Interpolator::new();
        for step in StepSchedule::new(65) {
            run_phase(&mut par, Phase::Diamond, step);
            run_phase(&mut par, Phase::Square, step);
            interp.diamond_phase(&mut seq, step, NoopObserver);
            interp.square_phase(&mut seq, step, NoopObserver);
        }
        assert_eq!(par, seq);
    }
}
