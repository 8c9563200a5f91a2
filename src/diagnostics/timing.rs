use serde::{Deserialize, Serialize};

/// Elapsed time of one labelled refinement pass (`pass_step_<step>`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Wall time of a reported run plus its per-pass timings, coarsest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Time spent inside the passes; `total_ms` minus this is loop overhead.
    pub fn stages_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_sum_per_pass_timings() {
        let mut timing = TimingBreakdown::default();
        timing.push("pass_step_4", 1.5);
        timing.push("pass_step_2", 0.25);
        timing.total_ms = 2.0;
        assert_eq!(timing.stages.len(), 2);
        assert_eq!(timing.stages[0].label, "pass_step_4");
        assert!((timing.stages_ms() - 1.75).abs() < 1e-12);
        assert!(timing.stages_ms() <= timing.total_ms);
    }
}
