//! Integration tests for the standard flow pipeline.
//!
//! Rule-level properties run each rule through the single-pass harness;
//! step-level properties run the full pipeline through `FluidEngine`.

use proptest::prelude::*;
use seep_core::{CellKind, CellState, GridSnapshot};
use seep_engine::{CellEdit, EngineConfig, FluidEngine};
use seep_grid::GridDims;
use seep_rules::{LateralFlow, VerticalFlow};
use seep_test_utils::{run_pass, total_mass};

/// Random grid: dims up to 12 x 12, ~20% solid, fills in [0, 1].
fn arb_grid() -> impl Strategy<Value = (GridDims, Vec<CellState>)> {
    (1u32..12, 1u32..12).prop_flat_map(|(rows, cols)| {
        let cell = prop_oneof![
            1 => Just(CellState::SOLID),
            4 => (0.0f64..=1.0).prop_map(CellState::fluid),
        ];
        proptest::collection::vec(cell, (rows * cols) as usize)
            .prop_map(move |states| (GridDims::new(rows, cols).unwrap(), states))
    })
}

fn engine_from(dims: GridDims, states: &[CellState]) -> FluidEngine {
    let mut engine =
        FluidEngine::new(EngineConfig::from_dims(dims.rows(), dims.cols()).unwrap()).unwrap();
    let edits = dims
        .canonical_ordering()
        .into_iter()
        .zip(states)
        .map(|(c, s)| CellEdit::new(c.row, c.col, s.kind, s.fill))
        .collect();
    engine.apply_edits(edits);
    engine
}

fn is_grounded(dims: GridDims, states: &[CellState], i: usize) -> bool {
    match dims.below(i) {
        None => true,
        Some(b) => states[b].kind == CellKind::Solid || states[b].fill >= 1.0,
    }
}

proptest! {
    #[test]
    fn steps_conserve_mass_and_stay_non_negative(
        (dims, states) in arb_grid(),
        steps in 1usize..40,
    ) {
        let mut engine = engine_from(dims, &states);
        let initial = engine.total_mass();
        for _ in 0..steps {
            let m = engine.step();
            prop_assert!((m.mass_after - m.mass_before).abs() < 1e-9);
        }
        prop_assert!((engine.total_mass() - initial).abs() < 1e-9 * steps as f64);
        for s in engine.snapshot().states() {
            prop_assert!(s.fill >= 0.0, "negative fill {}", s.fill);
        }
    }

    #[test]
    fn solids_never_change((dims, states) in arb_grid()) {
        let mut engine = engine_from(dims, &states);
        for _ in 0..10 {
            engine.step();
        }
        let snap = engine.snapshot();
        for (before, after) in states.iter().zip(snap.states()) {
            if before.kind == CellKind::Solid {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_eq!(after.kind, CellKind::Empty);
            }
        }
    }

    #[test]
    fn vertical_pass_never_overfills((dims, states) in arb_grid()) {
        let (next, _) = run_pass(&VerticalFlow::default(), dims, &states);
        for s in next.iter().filter(|s| s.is_open()) {
            prop_assert!(s.fill <= 1.0 + 1e-12, "fill {}", s.fill);
        }
        prop_assert!((total_mass(&next) - total_mass(&states)).abs() < 1e-9);
    }

    #[test]
    fn ungrounded_cells_never_give_laterally((dims, states) in arb_grid()) {
        let (next, _) = run_pass(&LateralFlow::default(), dims, &states);
        for i in 0..states.len() {
            if states[i].is_open() && !is_grounded(dims, &states, i) {
                prop_assert!(next[i].fill >= states[i].fill);
            }
        }
        prop_assert!((total_mass(&next) - total_mass(&states)).abs() < 1e-9);
    }
}

#[test]
fn threshold_drop_neither_falls_nor_spreads_unsupported() {
    let mut engine = FluidEngine::new(EngineConfig::from_dims(3, 3).unwrap()).unwrap();
    engine.set_cell(0, 1, CellKind::Empty, 0.02).unwrap();
    for _ in 0..5 {
        engine.step();
    }
    let snap = engine.snapshot();
    assert_eq!(snap.cell(0, 1).unwrap().fill, 0.02);
    assert_eq!(snap.cell(0, 0).unwrap().fill, 0.0);
    assert_eq!(snap.cell(1, 1).unwrap().fill, 0.0);
}

#[test]
fn fluid_spreads_along_a_ledge_then_falls_off() {
    // Ledge under columns 0..=2; open drop at column 3.
    let mut engine = FluidEngine::new(EngineConfig::from_dims(4, 4).unwrap()).unwrap();
    engine.apply_edits(vec![
        CellEdit::solid(1, 0),
        CellEdit::solid(1, 1),
        CellEdit::solid(1, 2),
        CellEdit::fluid(0, 0),
    ]);
    for _ in 0..200 {
        engine.step();
    }
    let snap = engine.snapshot();
    let below_ledge: f64 = (2..4)
        .flat_map(|r| (0..4).map(move |c| (r, c)))
        .map(|(r, c)| snap.cell(r, c).unwrap().fill)
        .sum();
    assert!(below_ledge > 0.5, "only {below_ledge} reached the floor");
    assert!((engine.total_mass() - 1.0).abs() < 1e-9);
}
