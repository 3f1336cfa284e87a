//! Gravity: fluid falls into the cell directly beneath.

use crate::defaults::{DEFAULT_CAPACITY, DEFAULT_MIN_TRANSFER};
use crate::grid_helpers::transfer;
use seep_rule::{FlowRule, PassContext, PassOutcome, WriteMode};

/// Vertical flow rule.
///
/// For every open cell with an open cell beneath it:
///
/// ```text
/// if src > min_transfer and below < capacity:
///     moved = min(src, capacity - below)
///     src -= moved; below += moved
/// ```
///
/// All three quantities come from the pass snapshot. Each cell has at most
/// one donor above it, so the receiving cell never passes `capacity`
/// within this pass.
///
/// # Construction
///
/// ```
/// use seep_rules::VerticalFlow;
///
/// let rule = VerticalFlow::builder()
///     .min_transfer(0.05)
///     .build()
///     .unwrap();
/// assert_eq!(rule.min_transfer(), 0.05);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VerticalFlow {
    capacity: f64,
    min_transfer: f64,
}

/// Builder for [`VerticalFlow`].
///
/// Defaults: `capacity` 1.0, `min_transfer` 0.02.
#[derive(Clone, Debug)]
pub struct VerticalFlowBuilder {
    capacity: f64,
    min_transfer: f64,
}

impl VerticalFlow {
    /// Create a new builder with the default constants.
    pub fn builder() -> VerticalFlowBuilder {
        VerticalFlowBuilder {
            capacity: DEFAULT_CAPACITY,
            min_transfer: DEFAULT_MIN_TRANSFER,
        }
    }

    /// Saturation level of a receiving cell.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Exclusive lower bound on a falling cell's fill.
    pub fn min_transfer(&self) -> f64 {
        self.min_transfer
    }
}

impl Default for VerticalFlow {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_transfer: DEFAULT_MIN_TRANSFER,
        }
    }
}

impl VerticalFlowBuilder {
    /// Set the saturation level (default 1.0). Must be finite and > 0.
    pub fn capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the stability threshold (default 0.02). Must be in `[0, capacity)`.
    pub fn min_transfer(mut self, min_transfer: f64) -> Self {
        self.min_transfer = min_transfer;
        self
    }

    /// Build the rule, validating the constants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `capacity` is not finite and positive, or if
    /// `min_transfer` is not finite or lies outside `[0, capacity)`.
    pub fn build(self) -> Result<VerticalFlow, String> {
        if !self.capacity.is_finite() || !(self.capacity > 0.0) {
            return Err(format!(
                "capacity must be finite and > 0, got {}",
                self.capacity
            ));
        }
        if !self.min_transfer.is_finite()
            || !(self.min_transfer >= 0.0)
            || !(self.min_transfer < self.capacity)
        {
            return Err(format!(
                "min_transfer must be in [0, {}), got {}",
                self.capacity, self.min_transfer
            ));
        }
        Ok(VerticalFlow {
            capacity: self.capacity,
            min_transfer: self.min_transfer,
        })
    }
}

impl FlowRule for VerticalFlow {
    fn name(&self) -> &str {
        "vertical_flow"
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Incremental
    }

    fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome {
        let dims = ctx.dims();
        let (reads, writes) = ctx.split();
        let mut donors = 0;

        for (i, src) in reads.iter().enumerate() {
            if !src.is_open() || !(src.fill > self.min_transfer) {
                continue;
            }
            let Some(b) = dims.below(i) else {
                continue;
            };
            let below = reads[b];
            if !below.is_open() || !(below.fill < self.capacity) {
                continue;
            }

            let room = self.capacity - below.fill;
            let moved = if room >= src.fill { src.fill } else { room };
            transfer(writes, i, b, moved);
            donors += 1;
        }

        PassOutcome { donors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_core::CellState;
    use seep_test_utils::{assert_close, grid_from_ascii, run_pass, total_mass};

    fn fills(states: &[CellState]) -> Vec<f64> {
        states.iter().map(|s| s.fill).collect()
    }

    #[test]
    fn full_cell_falls_one_row() {
        let g = grid_from_ascii(&["W", ".", "."]);
        let (next, outcome) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_eq!(fills(&next), [0.0, 1.0, 0.0]);
        assert_eq!(outcome.donors, 1);
    }

    #[test]
    fn partial_absorption_fills_to_capacity() {
        let g = grid_from_ascii(&["W", "5"]);
        let (next, _) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_close(next[0].fill, 0.5, 1e-12);
        assert_close(next[1].fill, 1.0, 1e-12);
    }

    #[test]
    fn threshold_is_exclusive() {
        let dims = seep_grid::GridDims::new(2, 1).unwrap();
        let at = vec![CellState::fluid(0.02), CellState::DRY];
        let (next, outcome) = run_pass(&VerticalFlow::default(), dims, &at);
        assert_eq!(next, at);
        assert_eq!(outcome.donors, 0);

        let above = vec![CellState::fluid(0.021), CellState::DRY];
        let (next, _) = run_pass(&VerticalFlow::default(), dims, &above);
        assert_eq!(next[0].fill, 0.0);
        assert_eq!(next[1].fill, 0.021);
    }

    #[test]
    fn saturated_cell_below_blocks() {
        let g = grid_from_ascii(&["5", "W"]);
        let (next, outcome) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_eq!(next, g.states);
        assert_eq!(outcome.donors, 0);
    }

    #[test]
    fn solids_neither_give_nor_take() {
        let mut g = grid_from_ascii(&["W", "#", "."]);
        g.states[1].fill = 0.7; // stray fill on a solid must stay put
        let (next, _) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_eq!(next, g.states);
    }

    #[test]
    fn bottom_row_keeps_its_fluid() {
        let g = grid_from_ascii(&["W"]);
        let (next, _) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_eq!(next[0].fill, 1.0);
    }

    #[test]
    fn whole_column_moves_from_snapshot() {
        // Each cell reads its own pre-pass fill, so the column shifts down
        // by one row instead of collapsing to the floor.
        let g = grid_from_ascii(&["4", "4", "."]);
        let (next, outcome) = run_pass(&VerticalFlow::default(), g.dims, &g.states);
        assert_close(next[0].fill, 0.0, 1e-12);
        assert_close(next[1].fill, 0.4, 1e-12);
        assert_close(next[2].fill, 0.4, 1e-12);
        assert_eq!(outcome.donors, 2);
        assert_close(total_mass(&next), total_mass(&g.states), 1e-12);
    }

    #[test]
    fn custom_capacity_caps_the_receiver() {
        let rule = VerticalFlow::builder()
            .capacity(0.5)
            .min_transfer(0.0)
            .build()
            .unwrap();
        let g = grid_from_ascii(&["W", "2"]);
        let (next, _) = run_pass(&rule, g.dims, &g.states);
        assert_close(next[0].fill, 0.7, 1e-12);
        assert_close(next[1].fill, 0.5, 1e-12);
    }

    #[test]
    fn builder_rejects_bad_constants() {
        assert!(VerticalFlow::builder().capacity(0.0).build().is_err());
        assert!(VerticalFlow::builder().capacity(f64::NAN).build().is_err());
        assert!(VerticalFlow::builder().min_transfer(-0.1).build().is_err());
        assert!(VerticalFlow::builder().min_transfer(1.0).build().is_err());
        let err = VerticalFlow::builder()
            .capacity(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(err.contains("capacity"), "{err}");
    }

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(VerticalFlow::builder().build().unwrap(), VerticalFlow::default());
    }
}
