//! Test utilities and fixtures for Seep development.
//!
//! Provides grid builders ([`grid_from_ascii`], [`random_states`]), mass
//! assertions, and [`run_pass`], a harness that drives a single
//! [`FlowRule`] the way the engine does without constructing an engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstFillRule, IdentityRule};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::{CellKind, CellState, TickId};
use seep_grid::GridDims;
use seep_rule::{FlowRule, PassContext, PassOutcome, WriteMode};

/// A grid built from a fixture.
#[derive(Clone, Debug, PartialEq)]
pub struct TestGrid {
    pub dims: GridDims,
    pub states: Vec<CellState>,
}

impl TestGrid {
    pub fn fill(&self, row: u32, col: u32) -> f64 {
        self.states[self.dims.index_of(row, col)].fill
    }

    pub fn kind(&self, row: u32, col: u32) -> CellKind {
        self.states[self.dims.index_of(row, col)].kind
    }

    pub fn total_mass(&self) -> f64 {
        total_mass(&self.states)
    }
}

/// Build a grid from rows of ASCII art.
///
/// | char | cell |
/// |------|------|
/// | `#` | solid |
/// | `.` | empty, dry |
/// | `1`..`9` | empty, fill `n / 10` |
/// | `W` | empty, fill 1.0 |
///
/// ```
/// let g = seep_test_utils::grid_from_ascii(&["W.", "#5"]);
/// assert_eq!(g.dims.rows(), 2);
/// assert_eq!(g.fill(0, 0), 1.0);
/// assert_eq!(g.fill(1, 1), 0.5);
/// ```
///
/// # Panics
///
/// Panics on ragged rows, an empty picture, or an unknown character.
pub fn grid_from_ascii(rows: &[&str]) -> TestGrid {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    let dims = GridDims::new(rows.len() as u32, cols as u32).expect("fixture must be non-empty");
    let mut states = Vec::with_capacity(dims.cell_count());
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "row {r} is ragged");
        for ch in line.chars() {
            states.push(match ch {
                '#' => CellState::SOLID,
                '.' => CellState::DRY,
                'W' => CellState::fluid(1.0),
                d @ '1'..='9' => CellState::fluid(f64::from(d as u8 - b'0') / 10.0),
                other => panic!("unknown fixture character {other:?}"),
            });
        }
    }
    TestGrid { dims, states }
}

/// Deterministic random grid: each cell is solid with probability
/// `solid_ratio`, otherwise empty with a fill drawn from `[0, 1)`.
pub fn random_states(rows: u32, cols: u32, seed: u64, solid_ratio: f64) -> TestGrid {
    let dims = GridDims::new(rows, cols).expect("random grid must be non-empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let states = (0..dims.cell_count())
        .map(|_| {
            if rng.random_bool(solid_ratio) {
                CellState::SOLID
            } else {
                CellState::fluid(rng.random::<f64>())
            }
        })
        .collect();
    TestGrid { dims, states }
}

/// Sum of fluid over open cells.
pub fn total_mass(states: &[CellState]) -> f64 {
    states.iter().map(CellState::mass).sum()
}

/// Assert `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a} (tolerance {tol})");
}

/// Assert every fill is finite and non-negative.
#[track_caller]
pub fn assert_well_formed(states: &[CellState]) {
    for (i, s) in states.iter().enumerate() {
        assert!(s.fill.is_finite(), "cell {i} has non-finite fill {}", s.fill);
        assert!(s.fill >= 0.0, "cell {i} has negative fill {}", s.fill);
    }
}

/// Run one pass of `rule` over `snapshot` and return the next state.
///
/// Mirrors the engine's buffer preparation: an `Incremental` rule gets a
/// buffer seeded from the snapshot; a `Full` rule gets a buffer of NaN
/// cells, so any cell the rule forgets to write shows up in assertions.
pub fn run_pass(
    rule: &dyn FlowRule,
    dims: GridDims,
    snapshot: &[CellState],
) -> (Vec<CellState>, PassOutcome) {
    let mut next = match rule.write_mode() {
        WriteMode::Incremental => snapshot.to_vec(),
        WriteMode::Full => vec![CellState::fluid(f64::NAN); snapshot.len()],
    };
    let outcome = {
        let mut ctx = PassContext::new(snapshot, &mut next, dims, TickId(1));
        rule.apply(&mut ctx)
    };
    (next, outcome)
}
