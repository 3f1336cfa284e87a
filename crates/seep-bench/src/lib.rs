//! Benchmark profiles for the Seep fluid grid engine.
//!
//! - [`basin_profile`]: the default 30x45 grid, walled basin, random fluid
//! - [`stress_profile`]: 200x200 grid (40K cells), random obstacles and fluid
//! - [`random_edits`]: deterministic edit batch via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::CellKind;
use seep_engine::{CellEdit, ConfigError, EngineConfig, FluidEngine};
use seep_grid::{GridDims, GridGeometry};

/// Default-geometry engine: solid walls and floor, top half randomly wet.
pub fn basin_profile(seed: u64) -> Result<FluidEngine, ConfigError> {
    let mut engine = FluidEngine::new(EngineConfig::new(GridGeometry::default()))?;
    let dims = engine.dims();
    let mut edits = Vec::new();
    for row in 0..dims.rows() {
        edits.push(CellEdit::solid(row, 0));
        edits.push(CellEdit::solid(row, dims.cols() - 1));
    }
    for col in 0..dims.cols() {
        edits.push(CellEdit::solid(dims.rows() - 1, col));
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for row in 0..dims.rows() / 2 {
        for col in 1..dims.cols() - 1 {
            edits.push(CellEdit::new(row, col, CellKind::Empty, rng.random::<f64>()));
        }
    }
    engine.apply_edits(edits);
    Ok(engine)
}

/// 200x200 engine: every cell edited with [`random_edits`] at 10% solids.
pub fn stress_profile(seed: u64) -> Result<FluidEngine, ConfigError> {
    let mut engine = FluidEngine::new(EngineConfig::from_dims(200, 200)?)?;
    let edits = random_edits(engine.dims(), seed, 0.1);
    engine.apply_edits(edits);
    Ok(engine)
}

/// One edit per cell in row-major order: solid with probability
/// `solid_ratio`, otherwise empty with a random fill in `[0, 1)`.
pub fn random_edits(dims: GridDims, seed: u64, solid_ratio: f64) -> Vec<CellEdit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    dims.canonical_ordering()
        .into_iter()
        .map(|c| {
            if rng.random_bool(solid_ratio) {
                CellEdit::solid(c.row, c.col)
            } else {
                CellEdit::new(c.row, c.col, CellKind::Empty, rng.random::<f64>())
            }
        })
        .collect()
}
