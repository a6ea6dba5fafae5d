//! Solver state wrapper around a board.

use diagoku_core::{Board, Cell, Digit, DigitSet};

use crate::trace::Trace;

/// A board under propagation, bound to the trace that records its
/// assignments.
///
/// `RuleGrid` is the only surface the propagation rules use to mutate
/// candidates: every write funnels through [`assign`](Self::assign), which
/// is what guarantees the trace sees every digit-finalization event no
/// matter which rule produced it.
#[derive(Debug)]
pub struct RuleGrid<'t> {
    board: Board,
    trace: &'t mut Trace,
}

impl<'t> RuleGrid<'t> {
    /// Wraps a board and a trace sink for one propagation run.
    pub fn new(board: Board, trace: &'t mut Trace) -> Self {
        Self { board, trace }
    }

    /// Returns the wrapped board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Releases the board, ending the propagation run.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.board.candidates(cell)
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.board.solved_count()
    }

    /// Returns the first cell whose candidate set is empty, if any.
    #[must_use]
    pub fn contradicted_cell(&self) -> Option<Cell> {
        self.board.contradicted_cell()
    }

    /// Replaces a cell's candidate set. The sole mutation point.
    ///
    /// Writing the set the cell already holds is a no-op: the board is
    /// untouched and nothing is recorded. Otherwise the set is written,
    /// and if it has exactly one element a full-board snapshot is appended
    /// to the trace.
    ///
    /// Returns `true` if the board changed.
    pub fn assign(&mut self, cell: Cell, candidates: DigitSet) -> bool {
        if self.board.candidates(cell) == candidates {
            return false;
        }
        self.board.set_candidates(cell, candidates);
        if candidates.len() == 1 {
            self.trace.record(&self.board);
        }
        true
    }

    /// Removes one digit from a cell's candidates via [`assign`](Self::assign).
    ///
    /// Returns `true` if the digit was present.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        let mut candidates = self.candidates(cell);
        if !candidates.remove(digit) {
            return false;
        }
        self.assign(cell, candidates)
    }

    /// Read-only view of the bound trace, for inspecting recorded snapshots
    /// while the grid still holds its `&mut Trace` borrow.
    #[cfg(test)]
    fn trace(&self) -> &Trace {
        self.trace
    }
}
