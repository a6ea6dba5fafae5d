//! Solving engine for the diagonal sudoku variant.
//!
//! The engine layers three pieces over the board state from
//! [`diagoku_core`]:
//!
//! 1. **Propagation** - the [`rule`] module's three pruning rules
//!    (eliminate, only choice, naked twins) driven to a fixpoint by
//!    [`Propagator`].
//! 2. **Search** - [`BacktrackSolver`], a depth-first search that branches
//!    on the fewest-candidates cell whenever propagation stalls.
//! 3. **Tracing** - [`Trace`], an append-only log of every committed
//!    single-digit assignment, fed through the [`RuleGrid`] assignment
//!    primitive and exposed for external replay.
//!
//! [`solve_text`] ties everything together for the common case:
//!
//! ```
//! use diagoku_solver::{SolveError, solve_text};
//!
//! let solution = solve_text(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//! )?;
//! assert!(solution.board().is_solved());
//! assert!(!solution.trace().is_empty());
//! # Ok::<(), SolveError>(())
//! ```

pub use self::{error::*, grid::*, propagator::*, search::*, trace::*};

mod error;
mod grid;
mod propagator;
pub mod rule;
mod search;
mod trace;
