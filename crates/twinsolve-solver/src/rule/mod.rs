//! Deduction rules for solving without guessing.
//!
//! Each rule implements the [`Rule`] trait and performs one kind of logical
//! inference over a grid's digits and candidate sets. The
//! [`Deducer`](crate::Deducer) drives them to a fixed point.

use std::fmt::Debug;

use twinsolve_core::Grid;

pub use self::{eliminate::Eliminate, hidden_single::HiddenSingle, naked_single::NakedSingle};

mod eliminate;
mod hidden_single;
mod naked_single;

/// Returns the three deduction rules in their fixed application order.
///
/// 1. [`Eliminate`]: prune candidates of cells that see a placed digit
/// 2. [`NakedSingle`]: fill cells whose candidate set has collapsed to one
/// 3. [`HiddenSingle`]: fill cells holding a digit's last home in a house
///
/// The order matters: elimination feeds the two single rules, and naked
/// singles are cheaper to detect than hidden ones.
///
/// # Examples
///
/// ```
/// use twinsolve_solver::rule;
///
/// let rules = rule::standard_rules();
/// assert_eq!(rules.len(), 3);
/// ```
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
    ]
}

/// A trait representing one deduction rule.
///
/// Rules mutate the grid directly and report how many changes they made;
/// there is no error path, because a rule faced with a contradictory grid
/// simply stops finding deductions (or fills the board full-but-incorrect,
/// which [`Grid::is_solved`] catches).
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once across the whole grid.
    ///
    /// Returns the number of changes made: candidate bits removed for
    /// [`Eliminate`], cells filled for the two single rules. Zero means the
    /// rule found nothing, and applying it again without other changes in
    /// between will find nothing either.
    fn apply(&self, grid: &mut Grid) -> usize;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
