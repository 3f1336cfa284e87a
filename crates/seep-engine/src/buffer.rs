//! Double-buffered cell storage.
//!
//! [`CellBuffers`] holds two equally sized row-major buffers. The *front*
//! buffer is the current grid; the *back* buffer receives the next state
//! during a pass. Per pass:
//!
//! 1. [`prepare()`](CellBuffers::prepare) seeds the back buffer from the
//!    front for [`WriteMode::Incremental`] rules
//! 2. the rule reads the front and writes the back via
//!    [`split()`](CellBuffers::split)
//! 3. [`swap()`](CellBuffers::swap) makes the back buffer current
//!
//! Both buffers are allocated once and reused for the engine's lifetime.

use seep_core::CellState;
use seep_rule::WriteMode;

/// Front/back pair of cell buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct CellBuffers {
    front: Vec<CellState>,
    back: Vec<CellState>,
}

impl CellBuffers {
    /// Two dry buffers of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            front: vec![CellState::DRY; len],
            back: vec![CellState::DRY; len],
        }
    }

    /// Number of cells per buffer.
    pub fn len(&self) -> usize {
        self.front.len()
    }

    /// Whether the buffers hold zero cells.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Current grid.
    pub fn front(&self) -> &[CellState] {
        &self.front
    }

    /// Current grid, for edits between steps.
    pub fn front_mut(&mut self) -> &mut [CellState] {
        &mut self.front
    }

    /// Prepare the back buffer for a pass with the given write mode.
    ///
    /// `Full` passes get whatever the back buffer last held in release
    /// builds. Debug builds fill it with NaN cells instead, so a `Full`
    /// rule that skips a cell shows up as a non-finite fill.
    pub fn prepare(&mut self, mode: WriteMode) {
        match mode {
            WriteMode::Incremental => self.back.copy_from_slice(&self.front),
            WriteMode::Full => {
                #[cfg(debug_assertions)]
                self.back.fill(CellState::fluid(f64::NAN));
            }
        }
    }

    /// Front for reading, back for writing.
    pub fn split(&mut self) -> (&[CellState], &mut [CellState]) {
        (&self.front, &mut self.back)
    }

    /// Make the back buffer current.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Return both buffers to all-dry.
    pub fn clear(&mut self) {
        self.front.fill(CellState::DRY);
        self.back.fill(CellState::DRY);
    }
}
