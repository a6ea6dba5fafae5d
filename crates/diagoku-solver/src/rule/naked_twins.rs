use diagoku_core::Unit;

use crate::{
    grid::RuleGrid,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "naked twins";

/// Eliminates using pairs of cells that share an identical two-digit set.
///
/// When two cells of a unit both hold exactly the same two candidates,
/// those two digits are claimed by the pair and can be removed from every
/// other cell of the unit. All pairs found in a unit are processed in the
/// same pass; a twin never eliminates against itself or its partner.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut RuleGrid<'_>) -> bool {
        let mut changed = false;
        for unit in Unit::ALL {
            let cells = unit.cells();
            for (i, &first) in cells.iter().enumerate() {
                let pair = grid.candidates(first);
                if pair.len() != 2 {
                    continue;
                }
                for &second in &cells[i + 1..] {
                    if grid.candidates(second) != pair {
                        continue;
                    }
                    for &other in &cells {
                        if other == first || other == second {
                            continue;
                        }
                        let current = grid.candidates(other);
                        let remaining = current.difference(pair);
                        if remaining != current {
                            changed |= grid.assign(other, remaining);
                        }
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::{Board, Cell, Digit, DigitSet};

    use super::*;
    use crate::trace::Trace;

    fn pair(a: Digit, b: Digit) -> DigitSet {
        DigitSet::from_iter([a, b])
    }

    #[test]
    fn test_eliminates_pair_from_rest_of_row() {
        let mut board = Board::new();
        let twins = pair(Digit::D1, Digit::D2);
        board.set_candidates(Cell::new(0, 0), twins);
        board.set_candidates(Cell::new(0, 4), twins);

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        assert!(NakedTwins::new().apply(&mut grid));

        for col in 0..9 {
            let cell = Cell::new(0, col);
            let candidates = grid.candidates(cell);
            if col == 0 || col == 4 {
                assert_eq!(candidates, twins, "twin {cell} must keep its pair");
            } else {
                assert!(!candidates.contains(Digit::D1), "{cell}");
                assert!(!candidates.contains(Digit::D2), "{cell}");
            }
        }
    }

    #[test]
    fn test_no_change_without_matching_partner() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(0, 0), pair(Digit::D1, Digit::D2));
        board.set_candidates(Cell::new(0, 4), pair(Digit::D1, Digit::D3));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        assert!(!NakedTwins::new().apply(&mut grid));
    }

    #[test]
    fn test_processes_every_pair_in_a_unit() {
        // Two disjoint pairs in the same row: both must eliminate.
        let mut board = Board::new();
        let ab = pair(Digit::D1, Digit::D2);
        let cd = pair(Digit::D3, Digit::D4);
        board.set_candidates(Cell::new(0, 0), ab);
        board.set_candidates(Cell::new(0, 1), ab);
        board.set_candidates(Cell::new(0, 2), cd);
        board.set_candidates(Cell::new(0, 3), cd);

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        assert!(NakedTwins::new().apply(&mut grid));

        for col in 4..9 {
            let candidates = grid.candidates(Cell::new(0, col));
            for digit in [Digit::D1, Digit::D2, Digit::D3, Digit::D4] {
                assert!(!candidates.contains(digit), "column {col}");
            }
        }
        // Each pair is shielded from the other pair's digits only by its
        // own membership; the first pair loses nothing to the second.
        assert_eq!(grid.candidates(Cell::new(0, 0)), ab);
        assert_eq!(grid.candidates(Cell::new(0, 2)), cd);
    }

    #[test]
    fn test_twins_on_diagonal_unit() {
        let mut board = Board::new();
        let twins = pair(Digit::D8, Digit::D9);
        board.set_candidates(Cell::new(1, 1), twins);
        board.set_candidates(Cell::new(7, 7), twins);

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        assert!(NakedTwins::new().apply(&mut grid));

        // The rest of the main diagonal loses both digits...
        assert!(!grid.candidates(Cell::new(4, 4)).contains(Digit::D8));
        assert!(!grid.candidates(Cell::new(4, 4)).contains(Digit::D9));
        // ...but cells off the shared unit keep theirs.
        assert!(grid.candidates(Cell::new(4, 5)).contains(Digit::D8));
    }

    #[test]
    fn test_pair_solving_a_cell_is_recorded() {
        let mut board = Board::new();
        let twins = pair(Digit::D1, Digit::D2);
        board.set_candidates(Cell::new(0, 0), twins);
        board.set_candidates(Cell::new(0, 1), twins);
        board.set_candidates(Cell::new(0, 2), DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]));

        let mut trace = Trace::new();
        let mut grid = RuleGrid::new(board, &mut trace);
        NakedTwins::new().apply(&mut grid);

        assert_eq!(grid.candidates(Cell::new(0, 2)).as_single(), Some(Digit::D3));
        assert_eq!(trace.len(), 1);
    }
}
