//! Queued cell edits and their receipts.

use seep_core::{CellCoord, CellKind, EditError};

/// One overwrite of a cell's kind and fill, queued by an input layer.
///
/// The presets match the paint tools of an interactive host:
///
/// ```
/// use seep_core::CellKind;
/// use seep_engine::CellEdit;
///
/// let wall = CellEdit::solid(3, 4);
/// assert_eq!(wall.kind, CellKind::Solid);
/// assert_eq!(CellEdit::fluid(0, 0).fill, 1.0);
/// assert_eq!(CellEdit::erase(0, 0).fill, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellEdit {
    /// Target row.
    pub row: u32,
    /// Target column.
    pub col: u32,
    /// New kind.
    pub kind: CellKind,
    /// New fill.
    pub fill: f64,
}

impl CellEdit {
    /// An arbitrary edit.
    pub fn new(row: u32, col: u32, kind: CellKind, fill: f64) -> Self {
        Self {
            row,
            col,
            kind,
            fill,
        }
    }

    /// Place a solid obstacle.
    pub fn solid(row: u32, col: u32) -> Self {
        Self::new(row, col, CellKind::Solid, 0.0)
    }

    /// Pour a full cell of fluid.
    pub fn fluid(row: u32, col: u32) -> Self {
        Self::new(row, col, CellKind::Empty, 1.0)
    }

    /// Clear the cell to dry empty space.
    pub fn erase(row: u32, col: u32) -> Self {
        Self::new(row, col, CellKind::Empty, 0.0)
    }

    /// Target coordinate.
    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.col)
    }
}

/// Outcome of one edit in a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct EditReceipt {
    /// Whether the edit was applied.
    pub accepted: bool,
    /// Why the edit was rejected, if it was.
    pub reason: Option<EditError>,
    /// Position of the edit within the submitted batch.
    pub edit_index: usize,
}

impl EditReceipt {
    pub(crate) fn from_result(edit_index: usize, result: Result<(), EditError>) -> Self {
        match result {
            Ok(()) => Self {
                accepted: true,
                reason: None,
                edit_index,
            },
            Err(e) => Self {
                accepted: false,
                reason: Some(e),
                edit_index,
            },
        }
    }
}
