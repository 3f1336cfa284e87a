//! The fluid grid engine.
//!
//! # Ownership model
//!
//! `FluidEngine` is [`Send`] (can be moved to another thread) but not
//! required to be [`Sync`]. All mutating methods take `&mut self` and
//! [`snapshot()`](FluidEngine::snapshot) borrows `&self`, so the borrow
//! checker rejects stepping or editing while a snapshot is alive.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use seep_core::{CellKind, CellState, EditError, TickId};
use seep_grid::{GridDims, GridGeometry};
use seep_rule::{validate_rules, FlowRule, PassContext, RulePlan};

use crate::buffer::CellBuffers;
use crate::config::{ConfigError, EngineConfig};
use crate::edit::{CellEdit, EditReceipt};
use crate::metrics::StepMetrics;
use crate::snapshot::Snapshot;

// Compile-time assertion: FluidEngine is Send.
// Fails to compile if any field (including the boxed rules) is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FluidEngine>();
    }
};

/// Microseconds since `start`, saturating at `u64::MAX`.
fn elapsed_us(start: Instant) -> u64 {
    micros(start.elapsed())
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Owns the grid and runs the rule pipeline one step at a time.
///
/// # Example
///
/// ```
/// use seep_core::{CellKind, GridSnapshot};
/// use seep_engine::{EngineConfig, FluidEngine};
///
/// let mut engine = FluidEngine::new(EngineConfig::from_dims(3, 1)?)?;
/// engine.set_cell(0, 0, CellKind::Empty, 1.0)?;
///
/// engine.step();
/// engine.step();
///
/// let snap = engine.snapshot();
/// assert_eq!(snap.cell(2, 0).map(|c| c.fill), Some(1.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct FluidEngine {
    geometry: GridGeometry,
    dims: GridDims,
    rules: Vec<Box<dyn FlowRule>>,
    plan: RulePlan,
    buffers: CellBuffers,
    tick_id: TickId,
    last_metrics: StepMetrics,
}

impl FluidEngine {
    /// Create an engine from an [`EngineConfig`].
    ///
    /// Validates the rule pipeline and allocates both buffers. Every cell
    /// starts empty and dry.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let plan = validate_rules(&config.rules)?;
        let dims = config.geometry.dims();
        debug!(
            "fluid engine: {}x{} grid, rules [{}]",
            dims.rows(),
            dims.cols(),
            plan.names().collect::<Vec<_>>().join(", ")
        );
        Ok(Self {
            geometry: config.geometry,
            dims,
            rules: config.rules,
            plan,
            buffers: CellBuffers::new(dims.cell_count()),
            tick_id: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Overwrite one cell's kind and fill. Neighbours are untouched.
    ///
    /// Any finite fill is stored as given, including negative values. The
    /// passes never drive a fill below zero on their own, but a negative
    /// edit is carried into its neighbours by lateral flow, so fills stay
    /// non-negative only while every edit is non-negative.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidCoordinate`] outside the grid and
    /// [`EditError::NonFiniteFill`] for NaN or infinite fill. The grid is
    /// unchanged on error.
    pub fn set_cell(
        &mut self,
        row: u32,
        col: u32,
        kind: CellKind,
        fill: f64,
    ) -> Result<(), EditError> {
        if !self.dims.contains(row, col) {
            let err = EditError::InvalidCoordinate {
                row,
                col,
                rows: self.dims.rows(),
                cols: self.dims.cols(),
            };
            warn!("rejected edit: {err}");
            return Err(err);
        }
        if !fill.is_finite() {
            let err = EditError::NonFiniteFill { row, col, fill };
            warn!("rejected edit: {err}");
            return Err(err);
        }
        let index = self.dims.index_of(row, col);
        self.buffers.front_mut()[index] = CellState::new(kind, fill);
        Ok(())
    }

    /// Apply a batch of edits in submission order.
    ///
    /// Returns one receipt per edit. A rejected edit does not stop the
    /// edits after it.
    pub fn apply_edits(&mut self, edits: Vec<CellEdit>) -> Vec<EditReceipt> {
        edits
            .into_iter()
            .enumerate()
            .map(|(i, e)| EditReceipt::from_result(i, self.set_cell(e.row, e.col, e.kind, e.fill)))
            .collect()
    }

    /// Advance one tick: run every rule as a pass, in pipeline order.
    ///
    /// Never fails. The metrics are also kept as
    /// [`last_metrics()`](Self::last_metrics).
    pub fn step(&mut self) -> StepMetrics {
        let step_start = Instant::now();
        let next_tick = self.tick_id.next();
        let mass_before = self.total_mass();

        let mut pass_us = Vec::with_capacity(self.rules.len());
        let mut donors = Vec::with_capacity(self.rules.len());

        for (i, rule) in self.rules.iter().enumerate() {
            let pass_start = Instant::now();
            self.buffers
                .prepare(self.plan.write_mode(i).unwrap_or_default());
            let outcome = {
                let (reads, writes) = self.buffers.split();
                let mut ctx = PassContext::new(reads, writes, self.dims, next_tick);
                rule.apply(&mut ctx)
            };
            self.buffers.swap();
            pass_us.push((
                rule.name().to_string(),
                elapsed_us(pass_start),
            ));
            donors.push(outcome.donors);
        }

        self.tick_id = next_tick;
        let mass_after = self.total_mass();
        let wet_cells = self
            .buffers
            .front()
            .iter()
            .filter(|s| s.is_open() && s.fill > 0.0)
            .count();

        let metrics = StepMetrics {
            tick_id: next_tick,
            total_us: elapsed_us(step_start),
            pass_us,
            donors,
            mass_before,
            mass_after,
            wet_cells,
        };
        trace!(
            "tick {}: mass {:.6} -> {:.6}, donors {:?}, wet {}",
            metrics.tick_id,
            metrics.mass_before,
            metrics.mass_after,
            metrics.donors,
            metrics.wet_cells
        );
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Read-only view of the current grid.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.buffers.front(), self.dims, self.tick_id)
    }

    /// Return every cell to empty and dry, and the tick to 0.
    ///
    /// Dimensions and rules are kept.
    pub fn reset(&mut self) {
        self.buffers.clear();
        self.tick_id = TickId(0);
        self.last_metrics = StepMetrics::default();
        debug!("fluid engine reset at {}x{}", self.dims.rows(), self.dims.cols());
    }

    /// Sum of fluid over open cells. Solids are excluded whatever their fill.
    pub fn total_mass(&self) -> f64 {
        self.buffers.front().iter().map(CellState::mass).sum()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Number of completed steps since construction or reset.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Pixel geometry the grid was derived from.
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }
}

impl std::fmt::Debug for FluidEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluidEngine")
            .field("rows", &self.dims.rows())
            .field("cols", &self.dims.cols())
            .field("rules", &self.plan.names().collect::<Vec<_>>())
            .field("tick_id", &self.tick_id)
            .finish()
    }
}
