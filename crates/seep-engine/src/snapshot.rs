//! Read-only views of the grid handed to rendering collaborators.

use seep_core::{CellState, GridSnapshot, TickId};
use seep_grid::GridDims;

/// A borrowed view of the engine's current grid.
///
/// Borrows the engine, so it cannot outlive the next
/// [`step()`](crate::FluidEngine::step) or edit.
#[derive(Debug)]
pub struct Snapshot<'a> {
    states: &'a [CellState],
    dims: GridDims,
    tick_id: TickId,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(states: &'a [CellState], dims: GridDims, tick_id: TickId) -> Self {
        Self {
            states,
            dims,
            tick_id,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Copy the view into an [`OwnedSnapshot`] detached from the engine.
    pub fn to_owned(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            states: self.states.to_vec(),
            dims: self.dims,
            tick_id: self.tick_id,
        }
    }
}

impl GridSnapshot for Snapshot<'_> {
    fn rows(&self) -> u32 {
        self.dims.rows()
    }

    fn cols(&self) -> u32 {
        self.dims.cols()
    }

    fn states(&self) -> &[CellState] {
        self.states
    }

    fn tick_id(&self) -> TickId {
        self.tick_id
    }
}

/// An owned copy of the grid at one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedSnapshot {
    states: Vec<CellState>,
    dims: GridDims,
    tick_id: TickId,
}

impl OwnedSnapshot {
    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }
}

impl GridSnapshot for OwnedSnapshot {
    fn rows(&self) -> u32 {
        self.dims.rows()
    }

    fn cols(&self) -> u32 {
        self.dims.cols()
    }

    fn states(&self) -> &[CellState] {
        &self.states
    }

    fn tick_id(&self) -> TickId {
        self.tick_id
    }
}
