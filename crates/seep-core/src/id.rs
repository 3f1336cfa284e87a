//! Strongly-typed identifiers: [`TickId`] and [`CellCoord`].

use std::fmt;

/// Monotonically increasing step counter.
///
/// Zero at engine construction and after a reset; incremented once per
/// completed `step()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A grid position. Row 0 is the top; gravity increases the row index.
///
/// Position is identity: a cell never moves, so a coordinate names the
/// same cell for the lifetime of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Row index, `0..rows`.
    pub row: u32,
    /// Column index, `0..cols`.
    pub col: u32,
}

impl CellCoord {
    /// Create a coordinate from a row and column.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId::default(), TickId(0));
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let a = CellCoord::new(0, 5);
        let b = CellCoord::new(1, 0);
        assert!(a < b);
        assert_eq!(CellCoord::from((2, 3)), CellCoord::new(2, 3));
        assert_eq!(format!("{}", CellCoord::new(2, 3)), "(2, 3)");
    }
}
