use super::timing::TimingBreakdown;
use crate::grid::{Corners, HeightGrid};
use serde::Serialize;

/// Work done by one (diamond, square) pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassReport {
    pub step: usize,
    pub offset: usize,
    pub diamond_writes: usize,
    pub square_writes: usize,
    pub elapsed_ms: f64,
}

/// Summary statistics over every sample of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    pub min: u8,
    pub max: u8,
    pub mean: f32,
}

impl GridStats {
    pub fn from_grid(grid: &HeightGrid) -> Self {
        let samples = grid.as_slice();
        let (min, max, sum) = samples
            .iter()
            .fold((u8::MAX, u8::MIN, 0u64), |(lo, hi, sum), &v| {
                (lo.min(v), hi.max(v), sum + u64::from(v))
            });
        let denom = samples.len().max(1) as f64;
        Self {
            min,
            max,
            mean: (sum as f64 / denom) as f32,
        }
    }
}

/// Everything recorded during a reported interpolation run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationReport {
    pub size: usize,
    pub corners: Corners,
    pub passes: Vec<PassReport>,
    pub stats: GridStats,
    pub timing: TimingBreakdown,
}

impl InterpolationReport {
    pub fn total_writes(&self) -> usize {
        self.passes
            .iter()
            .map(|p| p.diamond_writes + p.square_writes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_over_seeded_grid() {
        let grid = HeightGrid::with_corners(3, Corners::new(9, 0, 18, 9)).unwrap();
        let stats = GridStats::from_grid(&grid);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 18);
        assert!((stats.mean - 4.0).abs() < 1e-6);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = InterpolationReport {
            size: 3,
            corners: Corners::uniform(1),
            passes: vec![PassReport {
                step: 2,
                offset: 1,
                diamond_writes: 1,
                square_writes: 4,
                elapsed_ms: 0.0,
            }],
            stats: GridStats::default(),
            timing: TimingBreakdown::default(),
        };
        assert_eq!(report.total_writes(), 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passes"][0]["diamondWrites"], 1);
        assert_eq!(json["corners"]["se"], 1);
        assert_eq!(json["timing"]["totalMs"], 0.0);
    }
}
