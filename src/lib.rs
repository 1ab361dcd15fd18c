//! A Bull Bull (Niu Niu) hand evaluator with optional `no_std` support.
//!
//! The crate scores a five-card hand under regional house rules: Threes and
//! Sixes may stand in for each other, Five Dukes and Five Small win outright,
//! and otherwise the best three-card body leaves a two-card tail that sets
//! the payout, with the Ace of Spades plus a face card paying a bonus.
//!
//! # Example
//!
//! ```
//! use niurs::{Category, evaluate};
//!
//! let result = evaluate(&["3d", "7h", "10c", "3s", "6h"]);
//! assert_eq!(result.category, Category::DoubleOx(6));
//! assert_eq!(result.multiplier, 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{CandidateValues, Card, DECK_SIZE, Face, Rank, Suit};
pub use deck::Deck;
pub use error::{DecodeError, HandError};
pub use eval::{evaluate, evaluate_with};
pub use hand::{HAND_SIZE, Hand};
pub use options::{
    DEFAULT_FIVE_SMALL_LIMIT, DEFAULT_PAIR_MULTIPLIER, REVISED_PAIR_MULTIPLIER, RankValidation,
    RuleSet,
};
pub use result::{Category, Color, EvaluationResult};
