use diagoku_core::{Cell, Digit, DigitSet, Unit};
use tinyvec::ArrayVec;

use crate::{
    grid::RuleGrid,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "only choice";

/// Finalizes digits that fit in exactly one cell of a unit.
///
/// Even if that cell still lists other candidates, being the unit's only
/// home for the digit decides it (a hidden single).
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut RuleGrid<'_>) -> bool {
        let mut changed = false;
        for unit in Unit::ALL {
            for digit in Digit::ALL {
                let mut places = ArrayVec::<[Cell; 9]>::new();
                places.extend(
                    unit.cells()
                        .into_iter()
                        .filter(|cell| grid.candidates(*cell).contains(digit)),
                );
                if let [only] = places.as_slice() {
                    changed |= grid.assign(*only, DigitSet::only(digit));
                }
            }
        }
        changed
    }
}
