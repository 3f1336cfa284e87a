//! Read-only snapshot access for collaborators outside the engine.

use crate::cell::{Cell, CellState};
use crate::id::{CellCoord, TickId};

/// Read-only access to a grid snapshot.
///
/// Decouples the rendering side from the engine's storage: a renderer
/// takes `&dyn GridSnapshot` and never sees the buffers directly. States
/// are row-major, `rows * cols` long.
pub trait GridSnapshot {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// All cell states in row-major order.
    fn states(&self) -> &[CellState];

    /// The tick at which this snapshot was taken.
    fn tick_id(&self) -> TickId;

    /// The cell at `(row, col)`, or `None` if out of bounds.
    fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let index = row as usize * self.cols() as usize + col as usize;
        self.states()
            .get(index)
            .map(|&s| Cell::from_state(s, CellCoord::new(row, col)))
    }

    /// Iterate all cells in row-major order.
    fn cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let cols = self.cols().max(1) as usize;
        Box::new(self.states().iter().enumerate().map(move |(i, &s)| {
            let coord = CellCoord::new((i / cols) as u32, (i % cols) as u32);
            Cell::from_state(s, coord)
        }))
    }

    /// Sum of fluid over all open cells.
    fn total_mass(&self) -> f64 {
        self.states().iter().map(CellState::mass).sum()
    }
}
