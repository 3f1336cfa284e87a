//! Error types for cell edits.

use std::error::Error;
use std::fmt;

/// Reasons a cell edit is rejected.
///
/// Edits arrive from the input-handling layer between steps. A rejected
/// edit leaves the grid untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum EditError {
    /// The coordinate lies outside the grid.
    InvalidCoordinate {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// The fill value is NaN or infinite.
    NonFiniteFill {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// The offending value.
        fill: f64,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "coordinate ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
            ),
            Self::NonFiniteFill { row, col, fill } => {
                write!(f, "fill {fill} at ({row}, {col}) is not finite")
            }
        }
    }
}

impl Error for EditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinate_display_names_bounds() {
        let err = EditError::InvalidCoordinate {
            row: 9,
            col: 2,
            rows: 3,
            cols: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("(9, 2)"));
        assert!(msg.contains("[0, 3) x [0, 4)"));
    }

    #[test]
    fn non_finite_display() {
        let err = EditError::NonFiniteFill {
            row: 0,
            col: 1,
            fill: f64::NAN,
        };
        assert!(err.to_string().contains("not finite"));
    }
}
