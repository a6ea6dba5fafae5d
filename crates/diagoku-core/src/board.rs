//! The candidate board.
//!
//! A [`Board`] maps each of the 81 cells to its current candidate set. A
//! cell whose set has exactly one element is solved; an empty set marks a
//! contradiction and the board holding it is about to be discarded by the
//! solver. Boards are cheap to clone, which is what makes the search
//! driver's copy-on-branch discipline practical.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

/// Candidate state for the whole board.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Board, Cell, Digit};
///
/// let board: Board =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///         .parse()?;
/// assert_eq!(board.digit_at(Cell::new(0, 0)), Some(Digit::D2));
/// assert_eq!(board.solved_count(), 17);
/// # Ok::<(), diagoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates a board where every cell still admits all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index() as usize]
    }

    /// Overwrites the candidate set of a cell.
    ///
    /// This is the low-level write used by the parser and by the search
    /// driver when forcing a branch guess. Propagation goes through the
    /// solver's assignment primitive instead, which layers the no-op check
    /// and trace recording on top of this.
    pub const fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index() as usize] = candidates;
    }

    /// Returns the digit of a solved cell, or `None` while the cell still
    /// has several (or zero) candidates.
    #[must_use]
    pub const fn digit_at(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).as_single()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if all 81 cells are solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == 81
    }

    /// Returns the first cell (row-major) whose candidate set is empty, if
    /// any.
    ///
    /// An empty set means some earlier deduction removed a cell's last
    /// candidate; the fixpoint driver checks this after every round.
    #[must_use]
    pub fn contradicted_cell(&self) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .find(|cell| self.candidates(*cell).is_empty())
    }

    /// Renders the board as an 81-character row-major line, `'.'` for every
    /// unsolved cell.
    ///
    /// For boards whose cells are all either solved or untouched this
    /// round-trips with [`FromStr`].
    #[must_use]
    pub fn to_line(&self) -> String {
        Cell::ALL
            .into_iter()
            .map(|cell| self.digit_at(cell).map_or('.', Digit::to_ascii))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses an 81-cell puzzle description.
    ///
    /// Accepted characters are `'1'`-`'9'` (a known digit), `'.'` (an
    /// unknown cell), and ASCII whitespace, which is ignored so that
    /// grid-shaped literals parse. Anything else, or a count other than 81
    /// cells, is rejected.
    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let mut cells = [DigitSet::FULL; 81];
        let mut count = 0usize;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let set = match Digit::from_ascii(ch) {
                Some(digit) => DigitSet::only(digit),
                None if ch == '.' => DigitSet::FULL,
                None => return Err(ParseBoardError::InvalidCharacter { found: ch }),
            };
            if count < 81 {
                cells[count] = set;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { found: count });
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    /// Renders a 3x3-grouped grid, each cell showing its remaining
    /// candidates, column width sized to the widest set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|set| usize::from(set.len()))
            .max()
            .unwrap_or(1)
            + 1;
        let band = "-".repeat(width * 3);
        let line = format!("{band}+{band}+{band}");
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
                if row % 3 == 0 {
                    writeln!(f, "{line}")?;
                }
            }
            for col in 0..9 {
                let set = self.candidates(Cell::new(row, col));
                write!(f, "{:^width$}", set.to_string())?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
        }
        Ok(())
    }
}

/// Error returned when a puzzle description does not decode to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found in the input.
        found: usize,
    },
    /// The input contained a character outside `1`-`9`, `.`, and
    /// whitespace.
    #[display("invalid character {found:?} in puzzle")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}
