//! Per-step metrics for the fluid engine.

use seep_core::TickId;

/// Timing and flow statistics collected during a single step.
///
/// All durations are in microseconds. Per-pass vectors are in pipeline
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// The tick this step produced.
    pub tick_id: TickId,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Per-pass execution times: `(rule name, microseconds)`.
    pub pass_us: Vec<(String, u64)>,
    /// Per-pass donor counts: cells that gave fluid to a neighbour.
    pub donors: Vec<usize>,
    /// Total fluid before the first pass.
    pub mass_before: f64,
    /// Total fluid after the last pass.
    pub mass_after: f64,
    /// Open cells holding any fluid after the step.
    pub wet_cells: usize,
}

impl StepMetrics {
    /// Change in total fluid over the step. Nonzero only through float drift.
    pub fn mass_drift(&self) -> f64 {
        self.mass_after - self.mass_before
    }

    /// Sum of donors over all passes.
    pub fn total_donors(&self) -> usize {
        self.donors.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.tick_id, TickId(0));
        assert!(m.pass_us.is_empty());
        assert_eq!(m.total_donors(), 0);
        assert_eq!(m.mass_drift(), 0.0);
    }
}
