//! Propagation rules.
//!
//! Each rule prunes candidates from a [`RuleGrid`] without ever failing:
//! a rule either makes progress or leaves the board alone. Emptied
//! candidate sets are the fixpoint driver's concern, checked after every
//! full round.

use std::fmt::Debug;

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};
use crate::grid::RuleGrid;

mod eliminate;
mod naked_twins;
mod only_choice;

/// The three rules in their fixed application order.
///
/// Elimination runs first in every round: only-choice and naked twins both
/// work on candidate sets that elimination has already narrowed.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A local pruning rule over the candidate board.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once over the whole board.
    ///
    /// Returns `true` if any candidate set changed. Applying a rule to a
    /// board it has already fully processed returns `false`.
    fn apply(&self, grid: &mut RuleGrid<'_>) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
