use crate::neighbors::{Coord, Pattern};
use serde::Serialize;

/// One half of a refinement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Fill macro-cell centres from their four diagonal corners.
    Diamond,
    /// Fill edge midpoints from up to four orthogonal neighbours.
    Square,
}

impl Phase {
    #[inline]
    pub const fn pattern(self) -> Pattern {
        match self {
            Phase::Diamond => Pattern::Diamond,
            Phase::Square => Pattern::Square,
        }
    }
}

/// Hooks invoked by the interpolator while it walks the grid.
///
/// All methods default to no-ops. Observers see events in exact traversal
/// order: for each target, `on_neighbors` fires before the average is taken
/// and `on_write` fires after the target cell was updated.
pub trait RefineObserver {
    /// A (diamond, square) pass at `step` is about to start.
    fn on_pass(&mut self, _step: usize) {}

    /// `neighbors` will be averaged to produce the value of `target`.
    fn on_neighbors(&mut self, _phase: Phase, _step: usize, _target: Coord, _neighbors: &[Coord]) {
    }

    /// `target` now holds `value`.
    fn on_write(&mut self, _phase: Phase, _step: usize, _target: Coord, _value: u8) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RefineObserver for NoopObserver {}

impl<O: RefineObserver + ?Sized> RefineObserver for &mut O {
    #[inline]
    fn on_pass(&mut self, step: usize) {
        (**self).on_pass(step);
    }

    #[inline]
    fn on_neighbors(&mut self, phase: Phase, step: usize, target: Coord, neighbors: &[Coord]) {
        (**self).on_neighbors(phase, step, target, neighbors);
    }

    #[inline]
    fn on_write(&mut self, phase: Phase, step: usize, target: Coord, value: u8) {
        (**self).on_write(phase, step, target, value);
    }
}
