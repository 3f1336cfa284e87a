//! Row-major grid dimensions and neighbour lookup.

use crate::error::GridError;
use seep_core::CellCoord;
use smallvec::SmallVec;

/// Dimensions of a fixed-size 2D grid.
///
/// Cells are stored row-major: index `row * cols + col`. Row 0 is the top
/// and gravity points toward increasing row index, so "below" is
/// `index + cols`.
///
/// # Examples
///
/// ```
/// use seep_grid::GridDims;
///
/// let dims = GridDims::new(3, 4).unwrap();
/// assert_eq!(dims.cell_count(), 12);
/// assert_eq!(dims.index_of(1, 2), 6);
/// assert_eq!(dims.below(6), Some(10));
/// assert_eq!(dims.below(10), None); // bottom row
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
}

impl GridDims {
    /// Create grid dimensions.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::TooLarge)` if the cell count overflows `u32`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::TooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Flat index of `(row, col)`. The caller guarantees the coordinate is
    /// in bounds; use [`check`](Self::check) for untrusted input.
    #[inline]
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        debug_assert!(self.contains(row, col));
        row as usize * self.cols as usize + col as usize
    }

    /// Bounds-checked flat index.
    pub fn check(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(self.index_of(row, col))
        } else {
            Err(GridError::OutOfBounds {
                coord: CellCoord::new(row, col),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn coord_of(&self, index: usize) -> CellCoord {
        let cols = self.cols as usize;
        CellCoord::new((index / cols) as u32, (index % cols) as u32)
    }

    /// Whether the cell sits in the bottom row (nothing below it).
    #[inline]
    pub fn is_bottom_row(&self, index: usize) -> bool {
        index / self.cols as usize == self.rows as usize - 1
    }

    /// Index of the cell directly below, or `None` in the bottom row.
    #[inline]
    pub fn below(&self, index: usize) -> Option<usize> {
        if self.is_bottom_row(index) {
            None
        } else {
            Some(index + self.cols as usize)
        }
    }

    /// Index of the left neighbour, or `None` in column 0.
    #[inline]
    pub fn left(&self, index: usize) -> Option<usize> {
        if index % self.cols as usize == 0 {
            None
        } else {
            Some(index - 1)
        }
    }

    /// Index of the right neighbour, or `None` in the last column.
    #[inline]
    pub fn right(&self, index: usize) -> Option<usize> {
        if index % self.cols as usize == self.cols as usize - 1 {
            None
        } else {
            Some(index + 1)
        }
    }

    /// Left then right neighbour, omitting those past the grid edge.
    pub fn lateral_neighbours(&self, index: usize) -> SmallVec<[usize; 2]> {
        let mut out = SmallVec::new();
        if let Some(l) = self.left(index) {
            out.push(l);
        }
        if let Some(r) = self.right(index) {
            out.push(r);
        }
        out
    }

    /// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(&self) -> Vec<CellCoord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push(CellCoord::new(r, c));
            }
        }
        out
    }
}
