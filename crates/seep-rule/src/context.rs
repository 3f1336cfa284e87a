//! Execution context passed to a rule for one pass.

use seep_core::{CellState, TickId};
use seep_grid::GridDims;

/// Execution context for a single pass.
///
/// # Split-borrow semantics
///
/// - **`reads()`** is the frozen snapshot taken at the start of the pass.
///   For the second pass of a step this is the grid as the first pass
///   left it.
/// - **`writes()`** is the next-state buffer. Under
///   [`WriteMode::Incremental`](crate::WriteMode::Incremental) it starts
///   as a copy of the snapshot.
///
/// The two never alias; [`split`](Self::split) hands out both at once for
/// rules that read and write in the same loop.
pub struct PassContext<'a> {
    reads: &'a [CellState],
    writes: &'a mut [CellState],
    dims: GridDims,
    tick_id: TickId,
}

impl<'a> PassContext<'a> {
    /// Construct a pass context.
    ///
    /// Called by the engine; tests build one directly from two buffers.
    ///
    /// # Panics
    ///
    /// Panics if either buffer length differs from `dims.cell_count()`.
    pub fn new(
        reads: &'a [CellState],
        writes: &'a mut [CellState],
        dims: GridDims,
        tick_id: TickId,
    ) -> Self {
        assert_eq!(reads.len(), dims.cell_count(), "snapshot size mismatch");
        assert_eq!(writes.len(), dims.cell_count(), "buffer size mismatch");
        Self {
            reads,
            writes,
            dims,
            tick_id,
        }
    }

    /// Frozen pass snapshot.
    pub fn reads(&self) -> &[CellState] {
        self.reads
    }

    /// Next-state buffer.
    pub fn writes(&mut self) -> &mut [CellState] {
        self.writes
    }

    /// Both views at once.
    pub fn split(&mut self) -> (&[CellState], &mut [CellState]) {
        (self.reads, self.writes)
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The tick this pass is producing.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_both_buffers() {
        let dims = GridDims::new(1, 2).unwrap();
        let snapshot = vec![CellState::fluid(1.0), CellState::DRY];
        let mut next = snapshot.clone();

        let mut ctx = PassContext::new(&snapshot, &mut next, dims, TickId(3));
        assert_eq!(ctx.reads()[0].fill, 1.0);
        ctx.writes()[1].fill = 0.5;
        assert_eq!(ctx.tick_id(), TickId(3));
        assert_eq!(ctx.dims().cell_count(), 2);

        // Writes never show through the snapshot.
        assert_eq!(ctx.reads()[1].fill, 0.0);
        drop(ctx);
        assert_eq!(next[1].fill, 0.5);
    }

    #[test]
    fn split_gives_disjoint_views() {
        let dims = GridDims::new(1, 3).unwrap();
        let snapshot = vec![CellState::fluid(0.3); 3];
        let mut next = vec![CellState::DRY; 3];
        let mut ctx = PassContext::new(&snapshot, &mut next, dims, TickId(0));
        let (r, w) = ctx.split();
        for (o, s) in w.iter_mut().zip(r) {
            o.fill = s.fill * 2.0;
        }
        drop(ctx);
        assert!(next.iter().all(|s| (s.fill - 0.6).abs() < 1e-12));
    }

    #[test]
    #[should_panic(expected = "buffer size mismatch")]
    fn mismatched_buffer_panics() {
        let dims = GridDims::new(2, 2).unwrap();
        let snapshot = vec![CellState::DRY; 4];
        let mut next = vec![CellState::DRY; 3];
        let _ = PassContext::new(&snapshot, &mut next, dims, TickId(0));
    }
}
