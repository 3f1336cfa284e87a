//! Leveling: grounded fluid spreads sideways toward lower neighbours.

use crate::defaults::{DEFAULT_CAPACITY, DEFAULT_DAMPING};
use crate::grid_helpers::{is_grounded, transfer};
use seep_rule::{FlowRule, PassContext, PassOutcome, WriteMode};

/// Lateral flow rule.
///
/// Only grounded cells spread: a cell on the bottom row, above a solid, or
/// above a cell holding at least `capacity`. For each grounded open cell
/// `s` and each open left/right neighbour `n` with `n < s`:
///
/// ```text
/// delta = (s - n) / damping
/// ```
///
/// Both sides are evaluated from the same snapshot value of `s`. With
/// `damping >= 2` the two transfers together never exceed `s`.
///
/// # Construction
///
/// ```
/// use seep_rules::LateralFlow;
///
/// let rule = LateralFlow::builder().damping(4.0).build().unwrap();
/// assert_eq!(rule.damping(), 4.0);
/// assert!(LateralFlow::builder().damping(1.5).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LateralFlow {
    capacity: f64,
    damping: f64,
}

/// Builder for [`LateralFlow`].
///
/// Defaults: `capacity` 1.0, `damping` 3.0.
#[derive(Clone, Debug)]
pub struct LateralFlowBuilder {
    capacity: f64,
    damping: f64,
}

impl LateralFlow {
    /// Create a new builder with the default constants.
    pub fn builder() -> LateralFlowBuilder {
        LateralFlowBuilder {
            capacity: DEFAULT_CAPACITY,
            damping: DEFAULT_DAMPING,
        }
    }

    /// Fill at which a cell below counts as a floor.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Divisor applied to each lateral difference.
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl Default for LateralFlow {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl LateralFlowBuilder {
    /// Set the saturation level used by the grounded check (default 1.0).
    pub fn capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the damping divisor (default 3.0). Must be finite and >= 2.
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Build the rule, validating the constants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `capacity` is not finite and positive, or if
    /// `damping` is not finite or is below 2.
    pub fn build(self) -> Result<LateralFlow, String> {
        if !self.capacity.is_finite() || !(self.capacity > 0.0) {
            return Err(format!(
                "capacity must be finite and > 0, got {}",
                self.capacity
            ));
        }
        if !self.damping.is_finite() || !(self.damping >= 2.0) {
            return Err(format!(
                "damping must be finite and >= 2, got {}",
                self.damping
            ));
        }
        Ok(LateralFlow {
            capacity: self.capacity,
            damping: self.damping,
        })
    }
}

impl FlowRule for LateralFlow {
    fn name(&self) -> &str {
        "lateral_flow"
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Incremental
    }

    fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome {
        let dims = ctx.dims();
        let (reads, writes) = ctx.split();
        let mut donors = 0;

        for (i, src) in reads.iter().enumerate() {
            if !src.is_open() || !is_grounded(reads, dims, i, self.capacity) {
                continue;
            }

            let mut gave = false;
            for n in dims.lateral_neighbours(i) {
                let neighbour = reads[n];
                if neighbour.is_open() && neighbour.fill < src.fill {
                    let delta = (src.fill - neighbour.fill) / self.damping;
                    transfer(writes, i, n, delta);
                    gave = true;
                }
            }
            if gave {
                donors += 1;
            }
        }

        PassOutcome { donors }
    }
}
