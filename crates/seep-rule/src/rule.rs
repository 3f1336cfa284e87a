//! The [`FlowRule`] trait, [`WriteMode`], and [`PassOutcome`].

use crate::context::PassContext;

/// How the engine prepares the next-state buffer before a pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Buffer is not seeded from the snapshot. The rule MUST write every
    /// cell: unwritten cells hold stale state from an earlier pass, or NaN
    /// in debug builds.
    Full,

    /// Buffer is seeded from the pass snapshot. The rule applies only the
    /// changes it makes, typically as debit/credit pairs.
    #[default]
    Incremental,
}

/// What a pass did, for metrics and logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// Number of cells that gave fluid to a neighbour.
    pub donors: usize,
}

/// One grid-wide update rule, run as a single pass of each step.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same snapshot produces the same
///   next state.
/// - `&self`: rules are stateless; all state lives in the cell buffers.
/// - Every value read must come from [`PassContext::reads`], never from
///   the write buffer, so a pass is independent of visiting order.
/// - Solid cells must be left exactly as they are in the snapshot.
///
/// # Object safety
///
/// The engine stores rules as `Vec<Box<dyn FlowRule>>`.
///
/// # Examples
///
/// A rule that drains every open cell (not mass conserving, but a valid
/// `Full`-mode rule):
///
/// ```
/// use seep_core::CellState;
/// use seep_rule::{FlowRule, PassContext, PassOutcome, WriteMode};
///
/// struct Drain;
///
/// impl FlowRule for Drain {
///     fn name(&self) -> &str { "drain" }
///
///     fn write_mode(&self) -> WriteMode { WriteMode::Full }
///
///     fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome {
///         let (reads, writes) = ctx.split();
///         for (out, cur) in writes.iter_mut().zip(reads) {
///             *out = if cur.is_open() { CellState::DRY } else { *cur };
///         }
///         PassOutcome::default()
///     }
/// }
///
/// assert_eq!(Drain.name(), "drain");
/// ```
pub trait FlowRule: Send + 'static {
    /// Human-readable name for metrics and logging. Unique per pipeline.
    fn name(&self) -> &str;

    /// Buffer initialisation strategy. Default: [`WriteMode::Incremental`].
    fn write_mode(&self) -> WriteMode {
        WriteMode::Incremental
    }

    /// Run the pass: read the snapshot, write the next state.
    fn apply(&self, ctx: &mut PassContext<'_>) -> PassOutcome;
}
