//! The constraint-propagation fixpoint driver.

use crate::{
    error::Contradiction,
    grid::RuleGrid,
    rule::{self, BoxedRule},
};

/// Applies a rule list round by round until the board stabilizes.
///
/// One round applies every rule once, in list order. Rounds repeat until a
/// full round leaves the solved-cell count unchanged; after each round, an
/// emptied candidate set anywhere on the board aborts with
/// [`Contradiction`].
///
/// # Examples
///
/// ```
/// use diagoku_core::Board;
/// use diagoku_solver::{Propagator, RuleGrid, Trace};
///
/// let board: Board =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///         .parse()
///         .unwrap();
///
/// let mut trace = Trace::new();
/// let mut grid = RuleGrid::new(board, &mut trace);
/// let propagator = Propagator::with_standard_rules();
/// propagator.reduce(&mut grid).expect("consistent puzzle");
/// assert!(grid.solved_count() > 17);
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
}

impl Propagator {
    /// Creates a driver over the given rules, applied in order each round.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a driver over the standard three rules: eliminate, only
    /// choice, naked twins.
    #[must_use]
    pub fn with_standard_rules() -> Self {
        Self::new(rule::standard_rules())
    }

    /// Runs rounds of propagation until the board stalls.
    ///
    /// On success the grid holds the stabilized board, which may or may
    /// not be fully solved; the search driver handles the difference.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any cell's candidate set becomes
    /// empty. The grid is left in its contradicted state; callers discard
    /// it.
    pub fn reduce(&self, grid: &mut RuleGrid<'_>) -> Result<(), Contradiction> {
        loop {
            let solved_before = grid.solved_count();
            for rule in &self.rules {
                rule.apply(grid);
            }
            if grid.contradicted_cell().is_some() {
                return Err(Contradiction);
            }
            if grid.solved_count() == solved_before {
                return Ok(());
            }
        }
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::with_standard_rules()
    }
}
