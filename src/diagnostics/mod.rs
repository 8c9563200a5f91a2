//! Diagnostics data model for interpolation runs.
//!
//! - [`report`]: per-pass counters and final grid statistics returned by
//!   [`Interpolator::interpolate_with_report`](crate::refine::Interpolator::interpolate_with_report).
//! - [`trace`]: an observer that records every neighbour read and cell write.
//! - [`timing`]: labelled stage timings.

pub mod report;
pub mod timing;
pub mod trace;

pub use report::{GridStats, InterpolationReport, PassReport};
pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{AccessEvent, AccessRecorder};
