//! Hand evaluation.
//!
//! Evaluation runs in three steps:
//! 1. the exclusive five-card hands (Five Dukes, then Five Small),
//! 2. a search over every rank assignment and every three-card body whose
//!    values sum to a multiple of ten,
//! 3. selection of the highest-scoring tail, or No Niu when no body exists.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::error::HandError;
use crate::hand::Hand;
use crate::options::RuleSet;
use crate::result::{Category, EvaluationResult};

mod search;
mod special;
mod tail;

/// Evaluates five card codes under the default rules.
///
/// Input order does not matter. Malformed input never panics: a wrong
/// number of codes yields [`Category::Waiting`] and an undecodable code
/// yields [`Category::Error`].
///
/// # Example
///
/// ```
/// use niurs::{Category, evaluate};
///
/// let result = evaluate(&["10h", "10d", "10c", "As", "Kh"]);
/// assert_eq!(result.category, Category::NgauTonku);
/// assert_eq!(result.multiplier, 5);
///
/// let waiting = evaluate(&["10h", "10d"]);
/// assert_eq!(waiting.category, Category::Waiting);
/// ```
#[must_use]
pub fn evaluate<S: AsRef<str>>(codes: &[S]) -> EvaluationResult {
    evaluate_with(codes, &RuleSet::default())
}

/// Evaluates five card codes under the given rules.
///
/// # Example
///
/// ```
/// use niurs::{Category, RuleSet, evaluate_with};
///
/// let result = evaluate_with(&["3d", "7h", "10c", "3s", "6h"], &RuleSet::revised());
/// assert_eq!(result.category, Category::DoubleOx(6));
/// assert_eq!(result.multiplier, 3);
/// ```
#[must_use]
pub fn evaluate_with<S: AsRef<str>>(codes: &[S], rules: &RuleSet) -> EvaluationResult {
    match Hand::from_codes(codes, rules) {
        Ok(hand) => hand.evaluate(rules),
        Err(HandError::WrongCardCount(count)) => {
            debug!("waiting for 5 cards, got {count}");
            EvaluationResult::waiting()
        }
        Err(err @ HandError::Decode(_)) => {
            debug!("rejecting hand: {err}");
            EvaluationResult::error(&err)
        }
    }
}

impl Hand {
    /// Evaluates the hand under the given rules.
    #[must_use]
    pub fn evaluate(&self, rules: &RuleSet) -> EvaluationResult {
        let result = if let Some(category) = special::detect(self, rules) {
            EvaluationResult::new(category, rules, self.codes(), Vec::new())
        } else if let Some(outcome) = search::best_outcome(self) {
            EvaluationResult::new(
                outcome.category,
                rules,
                self.codes_at(&outcome.decomposition.body),
                self.codes_at(&outcome.decomposition.tail),
            )
        } else {
            EvaluationResult::new(Category::NoNiu, rules, Vec::new(), self.codes())
        };

        debug!("{:?} -> {result}", self.codes());
        result
    }
}
