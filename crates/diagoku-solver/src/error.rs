use derive_more::{Display, Error, From};
use diagoku_core::ParseBoardError;

/// Signal that propagation emptied some cell's candidate set.
///
/// This is search-internal control flow: it fails the current branch, not
/// the whole solve. The top-level entry points never surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("a cell lost its last candidate")]
pub struct Contradiction;

/// Error returned by the top-level solve.
///
/// Callers can distinguish all three outcomes of a solve attempt: a
/// solution, a puzzle proven unsolvable, and input that never decoded to a
/// board in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The input did not decode to an 81-cell board.
    #[display("malformed puzzle: {_0}")]
    #[from]
    Malformed(ParseBoardError),
    /// Every branch of the search tree ended in a contradiction.
    #[display("the puzzle has no solution")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts() {
        let parse_err = "".parse::<diagoku_core::Board>().unwrap_err();
        let err: SolveError = parse_err.into();
        assert_eq!(err, SolveError::Malformed(parse_err));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "the puzzle has no solution"
        );
        assert!(
            SolveError::Malformed(ParseBoardError::WrongCellCount { found: 80 })
                .to_string()
                .contains("80")
        );
    }
}
