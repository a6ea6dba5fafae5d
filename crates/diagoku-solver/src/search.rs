//! Depth-first backtracking search.

use diagoku_core::{Board, Cell, DigitSet};

use crate::{
    error::SolveError,
    grid::RuleGrid,
    propagator::Propagator,
    trace::Trace,
};

/// Depth-first branch-and-bound search over candidate boards.
///
/// Each node first runs the propagation fixpoint. A contradiction fails the
/// branch; a fully solved board succeeds; anything else branches on the
/// unsolved cell with the fewest remaining candidates (ties broken in
/// row-major order), trying each candidate digit in ascending order on an
/// independent clone of the board. Sibling branches never share state, so
/// a failed attempt cannot leak into the next one.
///
/// Recursion depth is bounded by the 81 cells: every branch level solves at
/// least one more cell.
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    propagator: Propagator,
}

impl BacktrackSolver {
    /// Creates a solver using the standard propagation rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver using a custom propagation driver.
    #[must_use]
    pub fn with_propagator(propagator: Propagator) -> Self {
        Self { propagator }
    }

    /// Searches for a solution, appending every committed assignment to
    /// `trace`, including those made in branches that end up abandoned.
    ///
    /// Returns `None` when the search tree is exhausted, which proves the
    /// puzzle unsolvable under the diagonal constraint set.
    #[must_use]
    pub fn solve(&self, board: &Board, trace: &mut Trace) -> Option<Board> {
        self.search(board.clone(), trace)
    }

    fn search(&self, board: Board, trace: &mut Trace) -> Option<Board> {
        let mut grid = RuleGrid::new(board, trace);
        if self.propagator.reduce(&mut grid).is_err() {
            return None;
        }
        let board = grid.into_board();
        if board.is_solved() {
            return Some(board);
        }

        // Minimum remaining values: the fewest-candidate cell keeps the
        // branching factor small. `min_by_key` keeps the first of equals,
        // so ties fall back to row-major order.
        let cell = branch_cell(&board)?;
        for digit in board.candidates(cell) {
            let mut guess = board.clone();
            guess.set_candidates(cell, DigitSet::only(digit));
            if let Some(solved) = self.search(guess, trace) {
                return Some(solved);
            }
        }
        None
    }
}

/// Picks the unsolved cell with the fewest candidates.
///
/// Propagation has already rejected empty sets, so every unsolved cell here
/// has at least two candidates; `None` only occurs on a solved board, which
/// the caller has already handled.
fn branch_cell(board: &Board) -> Option<Cell> {
    Cell::ALL
        .into_iter()
        .filter(|cell| board.candidates(*cell).len() > 1)
        .min_by_key(|cell| board.candidates(*cell).len())
}

/// Solves a puzzle given in its 81-character text form.
///
/// Decodes the input into a board, then searches from the root. The
/// returned [`Solution`] carries the solved board together with the
/// assignment trace the caller may drain for replay.
///
/// # Errors
///
/// - [`SolveError::Malformed`] if the input does not decode to 81 cells
///   over `1`-`9` and `.` (nothing is searched in that case), or
/// - [`SolveError::Unsolvable`] if the whole search tree fails. This
///   result is definitive; there is nothing to retry.
///
/// # Examples
///
/// ```
/// use diagoku_solver::solve_text;
///
/// let solution = solve_text(
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
/// )?;
/// assert!(solution.board().is_solved());
/// # Ok::<(), diagoku_solver::SolveError>(())
/// ```
pub fn solve_text(input: &str) -> Result<Solution, SolveError> {
    let board: Board = input.parse()?;
    let mut trace = Trace::new();
    let solved = BacktrackSolver::new()
        .solve(&board, &mut trace)
        .ok_or(SolveError::Unsolvable)?;
    Ok(Solution {
        board: solved,
        trace,
    })
}

/// A solved board together with the trace of the search that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    board: Board,
    trace: Trace,
}

impl Solution {
    /// Returns the solved board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the recorded assignment trace.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Splits the solution into its board and trace.
    #[must_use]
    pub fn into_parts(self) -> (Board, Trace) {
        (self.board, self.trace)
    }
}
