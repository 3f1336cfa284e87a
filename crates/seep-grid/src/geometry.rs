//! Pixel geometry: simulated area, cell edge length, and pointer mapping.

use crate::dims::GridDims;
use crate::error::GridError;
use seep_core::CellCoord;

/// A pixel rectangle covering one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

/// Simulated area and cell edge length, fixed at startup.
///
/// Grid dimensions are `height_px / cell_px` rows by `width_px / cell_px`
/// columns (integer division; a partial strip at the right or bottom is
/// not simulated).
///
/// # Examples
///
/// ```
/// use seep_grid::GridGeometry;
///
/// let geo = GridGeometry::default();
/// assert_eq!(geo.dims().rows(), 30);
/// assert_eq!(geo.dims().cols(), 45);
///
/// // Pointer positions map to the cell under them, clamped to the grid.
/// let c = geo.cell_at_pixel(95, 41);
/// assert_eq!((c.row, c.col), (2, 4));
/// let c = geo.cell_at_pixel(-10, 10_000);
/// assert_eq!((c.row, c.col), (29, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    width_px: u32,
    height_px: u32,
    cell_px: u32,
    dims: GridDims,
}

impl GridGeometry {
    /// Default simulated area width.
    pub const DEFAULT_WIDTH_PX: u32 = 900;
    /// Default simulated area height.
    pub const DEFAULT_HEIGHT_PX: u32 = 600;
    /// Default cell edge length.
    pub const DEFAULT_CELL_PX: u32 = 20;

    /// Derive a grid from a pixel area and cell edge length.
    ///
    /// Returns `Err(GridError::InvalidGeometry)` if `cell_px` is zero or
    /// larger than either side of the area.
    pub fn new(width_px: u32, height_px: u32, cell_px: u32) -> Result<Self, GridError> {
        if cell_px == 0 {
            return Err(GridError::InvalidGeometry {
                reason: "cell edge length must be at least 1 pixel".to_string(),
            });
        }
        let dims = GridDims::new(height_px / cell_px, width_px / cell_px).map_err(|e| {
            match e {
                GridError::EmptyGrid => GridError::InvalidGeometry {
                    reason: format!(
                        "area {width_px}x{height_px} px holds no {cell_px} px cell"
                    ),
                },
                other => other,
            }
        })?;
        Ok(Self {
            width_px,
            height_px,
            cell_px,
            dims,
        })
    }

    /// Geometry for an explicit grid size with the given cell edge.
    pub fn from_dims(rows: u32, cols: u32, cell_px: u32) -> Result<Self, GridError> {
        let width = cols.checked_mul(cell_px);
        let height = rows.checked_mul(cell_px);
        match (width, height) {
            (Some(w), Some(h)) => Self::new(w, h, cell_px),
            _ => Err(GridError::TooLarge { rows, cols }),
        }
    }

    /// Grid dimensions derived from the area.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Cell edge length in pixels.
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Area width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Area height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// The cell under a pointer position, clamped to the grid.
    ///
    /// Accepts signed input because pointer coordinates can fall outside
    /// the drawing area while a button is held.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> CellCoord {
        let col = (x.max(0) as u32 / self.cell_px).min(self.dims.cols - 1);
        let row = (y.max(0) as u32 / self.cell_px).min(self.dims.rows - 1);
        CellCoord::new(row, col)
    }

    /// Pixel rectangle covered by a cell.
    pub fn cell_rect(&self, coord: CellCoord) -> PixelRect {
        PixelRect {
            x: coord.col * self.cell_px,
            y: coord.row * self.cell_px,
            w: self.cell_px,
            h: self.cell_px,
        }
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            width_px: Self::DEFAULT_WIDTH_PX,
            height_px: Self::DEFAULT_HEIGHT_PX,
            cell_px: Self::DEFAULT_CELL_PX,
            dims: GridDims {
                rows: Self::DEFAULT_HEIGHT_PX / Self::DEFAULT_CELL_PX,
                cols: Self::DEFAULT_WIDTH_PX / Self::DEFAULT_CELL_PX,
            },
        }
    }
}
