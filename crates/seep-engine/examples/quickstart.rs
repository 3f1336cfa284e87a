//! Seep quickstart: pour fluid into a walled basin and watch it settle.
//!
//! Run with: `cargo run --example quickstart -p seep-engine`

use seep_core::GridSnapshot;
use seep_engine::{CellEdit, EngineConfig, FluidEngine};
use seep_view::TextView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A 12 x 24 grid with the standard gravity + leveling pipeline.
    let mut engine = FluidEngine::new(EngineConfig::from_dims(12, 24)?)?;

    // 2. Walls, a floor, and a ledge halfway down.
    let mut edits = Vec::new();
    for row in 0..12 {
        edits.push(CellEdit::solid(row, 0));
        edits.push(CellEdit::solid(row, 23));
    }
    for col in 0..24 {
        edits.push(CellEdit::solid(11, col));
    }
    for col in 4..12 {
        edits.push(CellEdit::solid(6, col));
    }
    let rejected = engine
        .apply_edits(edits)
        .into_iter()
        .filter(|r| !r.accepted)
        .count();
    println!("edits rejected: {rejected}");

    let view = TextView::new().with_border(true);

    // 3. Pour a few cells every step for a while, then let it settle.
    for step in 0..120u32 {
        if step < 40 {
            engine.apply_edits(vec![CellEdit::fluid(0, 6), CellEdit::fluid(0, 7)]);
        }
        let metrics = engine.step();

        if step % 20 == 19 {
            println!(
                "tick {} | mass {:.3} | wet {} | {} us",
                metrics.tick_id, metrics.mass_after, metrics.wet_cells, metrics.total_us
            );
            println!("{}", view.render(&engine.snapshot()));
        }
    }

    let snap = engine.snapshot();
    println!("final mass: {:.3} over {} ticks", snap.total_mass(), snap.tick_id());
    Ok(())
}
