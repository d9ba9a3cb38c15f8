//! Per-tick metrics for the simulation engine.
//!
//! [`TickMetrics`] captures timing and transfer counts for a single tick.
//! Hosts read it from [`Simulation::last_metrics`](crate::Simulation::last_metrics)
//! or from the return value of [`tick()`](crate::Simulation::tick).

use crate::commit::CommitStats;

/// Timing and transfer counts collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent applying the paint stroke, in microseconds.
    pub paint_us: u64,
    /// Time spent in the update pass, in microseconds. Zero while paused.
    pub update_us: u64,
    /// Time spent resolving and applying proposals, in microseconds.
    pub commit_us: u64,
    /// Cells overwritten by painting this tick.
    pub painted_cells: usize,
    /// Counters from the commit resolver.
    pub commit: CommitStats,
}
