use diagoku_core::Cell;
use tinyvec::ArrayVec;

use crate::{
    grid::RuleGrid,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "eliminate";

/// Removes each solved cell's digit from the candidates of its peers.
///
/// The solved-cell list is taken once at the start of the pass; peers that
/// become solved during the pass are picked up by the next round of the
/// fixpoint driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut RuleGrid<'_>) -> bool {
        let mut solved = ArrayVec::<[Cell; 81]>::new();
        solved.extend(
            Cell::ALL
                .into_iter()
                .filter(|cell| grid.candidates(*cell).len() == 1),
        );

        let mut changed = false;
        for cell in solved {
            // The cell may have lost its digit to an earlier elimination in
            // this same pass (two identical givens in one unit); the empty
            // set is left for the fixpoint driver to flag.
            let Some(digit) = grid.candidates(cell).as_single() else {
                continue;
            };
            for peer in cell.peers() {
                changed |= grid.eliminate(peer, digit);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::{Board, Digit, DigitSet};

    use super::*;
    use crate::trace::Trace;

    #[test]
    fn test_removes_solved_digit_from_peers() {
        let mut board = Board::new();
        let cell = Cell::new(0, 0);
        board.set_candidates(cell, DigitSet::only(Digit::D5));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        assert!(Eliminate::new().apply(&mut grid));

        for peer in cell.peers() {
            assert!(!grid.candidates(peer).contains(Digit::D5), "{peer}");
        }
        // Cells sharing no unit with A1 are untouched.
        assert!(grid.candidates(Cell::new(1, 4)).contains(Digit::D5));
        // The solved cell keeps its digit.
        assert_eq!(grid.candidates(cell).as_single(), Some(Digit::D5));
    }

    #[test]
    fn test_diagonal_peers_are_pruned() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(4, 4), DigitSet::only(Digit::D9));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        Eliminate::new().apply(&mut grid);

        // Both diagonals pass through the center cell.
        assert!(!grid.candidates(Cell::new(0, 0)).contains(Digit::D9));
        assert!(!grid.candidates(Cell::new(8, 8)).contains(Digit::D9));
        assert!(!grid.candidates(Cell::new(0, 8)).contains(Digit::D9));
        assert!(!grid.candidates(Cell::new(8, 0)).contains(Digit::D9));
    }

    #[test]
    fn test_idempotent_on_propagated_board() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(2, 3), DigitSet::only(Digit::D1));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        let rule = Eliminate::new();
        assert!(rule.apply(&mut grid));
        assert!(!rule.apply(&mut grid));
    }

    #[test]
    fn test_conflicting_givens_empty_a_cell() {
        // Two 5s in row A: eliminating from A1 empties A2 (and vice versa).
        let mut board = Board::new();
        board.set_candidates(Cell::new(0, 0), DigitSet::only(Digit::D5));
        board.set_candidates(Cell::new(0, 1), DigitSet::only(Digit::D5));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        Eliminate::new().apply(&mut grid);

        assert!(grid.contradicted_cell().is_some());
    }
}
