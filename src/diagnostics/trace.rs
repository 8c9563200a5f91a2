//! Recording observer for access-order verification.
//!
//! [`AccessRecorder`] keeps every event emitted by the interpolator as a flat
//! list of [`AccessEvent`]s. Helpers slice the list by phase and step so tests
//! and tools can compare the exact sequence of reads and writes.

use crate::neighbors::Coord;
use crate::refine::{Phase, RefineObserver};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AccessEvent {
    /// A new pass started at `step`.
    Pass { step: usize },
    /// `coord` was read while computing `target`.
    Read {
        phase: Phase,
        step: usize,
        target: Coord,
        coord: Coord,
    },
    /// `target` received `value`.
    Write {
        phase: Phase,
        step: usize,
        target: Coord,
        value: u8,
    },
}

#[derive(Clone, Debug, Default)]
pub struct AccessRecorder {
    events: Vec<AccessEvent>,
}

impl AccessRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<AccessEvent> {
        self.events
    }

    /// Events of `phase` at `step`, in the order they were emitted.
    pub fn phase_events(&self, phase: Phase, step: usize) -> impl Iterator<Item = &AccessEvent> {
        self.events.iter().filter(move |e| match e {
            AccessEvent::Read { phase: p, step: s, .. }
            | AccessEvent::Write { phase: p, step: s, .. } => *p == phase && *s == step,
            AccessEvent::Pass { .. } => false,
        })
    }

    /// Coordinates read for `target` during `phase` at `step`.
    pub fn reads_for(&self, phase: Phase, step: usize, target: Coord) -> Vec<Coord> {
        self.phase_events(phase, step)
            .filter_map(|e| match e {
                AccessEvent::Read { target: t, coord, .. } if *t == target => Some(*coord),
                _ => None,
            })
            .collect()
    }

    /// Targets written during `phase` at `step`, in write order.
    pub fn writes(&self, phase: Phase, step: usize) -> Vec<(Coord, u8)> {
        self.phase_events(phase, step)
            .filter_map(|e| match e {
                AccessEvent::Write { target, value, .. } => Some((*target, *value)),
                _ => None,
            })
            .collect()
    }

    /// Steps of every recorded pass.
    pub fn passes(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AccessEvent::Pass { step } => Some(*step),
                _ => None,
            })
            .collect()
    }
}

impl RefineObserver for AccessRecorder {
    fn on_pass(&mut self, step: usize) {
        self.events.push(AccessEvent::Pass { step });
    }

    fn on_neighbors(&mut self, phase: Phase, step: usize, target: Coord, neighbors: &[Coord]) {
        self.events
            .extend(neighbors.iter().map(|&coord| AccessEvent::Read {
                phase,
                step,
                target,
                coord,
            }));
    }

    fn on_write(&mut self, phase: Phase, step: usize, target: Coord, value: u8) {
        self.events.push(AccessEvent::Write {
            phase,
            step,
            target,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Corners, HeightGrid};
    use crate::refine::Interpolator;

    #[test]
    fn diamond_reads_precede_write() {
        let mut grid = HeightGrid::with_corners(3, Corners::new(14, 64, 64, 110)).unwrap();
        let mut recorder = AccessRecorder::new();
        Interpolator::new().diamond_phase(&mut grid, 2, &mut recorder);

        let center = Coord::new(1, 1);
        let read = |row, col| AccessEvent::Read {
            phase: Phase::Diamond,
            step: 2,
            target: center,
            coord: Coord::new(row, col),
        };
        let expected = vec![
            read(0, 0),
            read(0, 2),
            read(2, 0),
            read(2, 2),
            AccessEvent::Write {
                phase: Phase::Diamond,
                step: 2,
                target: center,
                value: 63,
            },
        ];
        assert_eq!(recorder.events(), expected.as_slice());
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = AccessEvent::Write {
            phase: Phase::Square,
            step: 4,
            target: Coord::new(0, 2),
            value: 58,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "write");
        assert_eq!(json["phase"], "square");
        assert_eq!(json["target"]["col"], 2);
    }
}
