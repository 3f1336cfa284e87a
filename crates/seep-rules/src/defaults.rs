//! Default flow constants.

/// Fill level at which a cell counts as saturated.
pub const DEFAULT_CAPACITY: f64 = 1.0;

/// A cell must hold strictly more than this to fall.
pub const DEFAULT_MIN_TRANSFER: f64 = 0.02;

/// Lateral transfers move `(src - neighbour) / damping`.
pub const DEFAULT_DAMPING: f64 = 3.0;
