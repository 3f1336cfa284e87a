//! Shared topology checks for the flow rules.

use seep_core::CellState;
use seep_grid::GridDims;

/// Whether the cell at `index` has nowhere to fall.
///
/// True on the bottom row, above a solid, or above a cell holding at
/// least `capacity`.
pub(crate) fn is_grounded(
    reads: &[CellState],
    dims: GridDims,
    index: usize,
    capacity: f64,
) -> bool {
    match dims.below(index) {
        None => true,
        Some(b) => {
            let below = reads[b];
            below.kind.is_solid() || below.fill >= capacity
        }
    }
}

/// Move `amount` from `from` to `to` in the next-state buffer.
pub(crate) fn transfer(writes: &mut [CellState], from: usize, to: usize, amount: f64) {
    writes[from].fill -= amount;
    writes[to].fill += amount;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(cells: &[CellState]) -> (GridDims, Vec<CellState>) {
        (GridDims::new(cells.len() as u32, 1).unwrap(), cells.to_vec())
    }

    #[test]
    fn bottom_row_is_grounded() {
        let (dims, reads) = column(&[CellState::DRY, CellState::DRY]);
        assert!(!is_grounded(&reads, dims, 0, 1.0));
        assert!(is_grounded(&reads, dims, 1, 1.0));
    }

    #[test]
    fn solid_or_saturated_below_grounds() {
        let (dims, reads) = column(&[CellState::DRY, CellState::SOLID]);
        assert!(is_grounded(&reads, dims, 0, 1.0));

        let (dims, reads) = column(&[CellState::DRY, CellState::fluid(1.0)]);
        assert!(is_grounded(&reads, dims, 0, 1.0));

        let (dims, reads) = column(&[CellState::DRY, CellState::fluid(0.99)]);
        assert!(!is_grounded(&reads, dims, 0, 1.0));
    }

    #[test]
    fn transfer_moves_without_creating() {
        let mut writes = vec![CellState::fluid(0.75), CellState::fluid(0.25)];
        transfer(&mut writes, 0, 1, 0.5);
        assert_eq!(writes[0].fill, 0.25);
        assert_eq!(writes[1].fill, 0.75);
    }
}
