//! Error types for grid construction and coordinate checks.

use seep_core::CellCoord;
use std::fmt;

/// Errors arising from grid construction or coordinate queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// `rows * cols` does not fit in a `u32` cell count.
    TooLarge {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A coordinate is outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A pixel geometry cannot produce a usable grid.
    InvalidGeometry {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid {rows}x{cols} exceeds u32::MAX cells")
            }
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
