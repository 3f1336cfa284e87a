//! The cell model: [`CellKind`], stored [`CellState`], and the [`Cell`] view.

use crate::id::CellCoord;

/// Classification of a grid cell.
///
/// A closed enumeration rather than an integer flag: fill levels only mean
/// something for [`CellKind::Empty`] cells, and matching on the kind makes
/// that explicit at every use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open space that can hold and transmit fluid.
    #[default]
    Empty,
    /// An obstacle. Never holds, receives, or donates fluid.
    Solid,
}

impl CellKind {
    /// Returns `true` for [`CellKind::Solid`].
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    /// Returns `true` for [`CellKind::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The other kind. Input layers use this for a paint-mode toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Empty => Self::Solid,
            Self::Solid => Self::Empty,
        }
    }
}

/// Per-cell state as stored in the engine's buffers.
///
/// Buffers are row-major `Vec<CellState>`; the coordinate of a state is
/// implied by its index, so position cannot drift from storage.
///
/// `fill` is a fraction of the cell's volume. It is nominally in `[0, 1]`
/// but is not clamped: values slightly above 1 (or float noise around 0)
/// are tolerated and interpreted by the rendering side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellState {
    /// Cell classification.
    pub kind: CellKind,
    /// Fluid fill level.
    pub fill: f64,
}

impl CellState {
    /// An empty cell with no fluid.
    pub const DRY: Self = Self {
        kind: CellKind::Empty,
        fill: 0.0,
    };

    /// A solid cell.
    pub const SOLID: Self = Self {
        kind: CellKind::Solid,
        fill: 0.0,
    };

    /// Create a state from a kind and fill level.
    pub fn new(kind: CellKind, fill: f64) -> Self {
        Self { kind, fill }
    }

    /// An empty cell holding `fill` units of fluid.
    pub fn fluid(fill: f64) -> Self {
        Self {
            kind: CellKind::Empty,
            fill,
        }
    }

    /// Whether this cell participates in flow at all.
    pub fn is_open(&self) -> bool {
        self.kind.is_empty()
    }

    /// Fluid mass contributed by this cell. Solid cells contribute nothing,
    /// whatever their stored fill.
    pub fn mass(&self) -> f64 {
        match self.kind {
            CellKind::Empty => self.fill,
            CellKind::Solid => 0.0,
        }
    }
}

/// A materialised cell: state plus its fixed grid position.
///
/// This is what snapshot iteration yields to the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Cell classification.
    pub kind: CellKind,
    /// Fluid fill level.
    pub fill: f64,
    /// Row index (0 = top).
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl Cell {
    /// Pair a stored state with its coordinate.
    pub fn from_state(state: CellState, coord: CellCoord) -> Self {
        Self {
            kind: state.kind,
            fill: state.fill,
            row: coord.row,
            col: coord.col,
        }
    }

    /// The cell's coordinate.
    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.col)
    }

    /// The stored state without position.
    pub fn state(&self) -> CellState {
        CellState::new(self.kind, self.fill)
    }
}
