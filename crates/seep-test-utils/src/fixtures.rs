//! Reusable rule fixtures for pipeline and engine tests.
//!
//! - [`IdentityRule`] copies the snapshot into the next state (Full mode).
//! - [`ConstFillRule`] sets every open cell to a constant fill (Full mode).

use seep_core::CellState;
use seep_rule::{FlowRule, PassContext, PassOutcome, WriteMode};

/// Copies the snapshot unchanged (Full write mode).
///
/// Chained after another rule, the output shows what that rule wrote.
pub struct IdentityRule {
    pub name: String,
}

impl IdentityRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FlowRule for IdentityRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Full
    }

    fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome {
        let (reads, writes) = ctx.split();
        writes.copy_from_slice(reads);
        PassOutcome::default()
    }
}

/// Sets every open cell to `fill`; solids pass through (Full write mode).
pub struct ConstFillRule {
    pub name: String,
    pub fill: f64,
}

impl ConstFillRule {
    pub fn new(name: impl Into<String>, fill: f64) -> Self {
        Self {
            name: name.into(),
            fill,
        }
    }
}

impl FlowRule for ConstFillRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Full
    }

    fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome {
        let (reads, writes) = ctx.split();
        for (out, cur) in writes.iter_mut().zip(reads) {
            *out = if cur.is_open() {
                CellState::fluid(self.fill)
            } else {
                *cur
            };
        }
        PassOutcome::default()
    }
}
