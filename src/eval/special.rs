//! Exclusive five-card hands, checked before any search.

use crate::card::Rank;
use crate::hand::Hand;
use crate::options::RuleSet;
use crate::result::Category;

/// Returns the instant-win category of the hand, if any.
///
/// Five Dukes takes priority over Five Small.
pub(crate) fn detect(hand: &Hand, rules: &RuleSet) -> Option<Category> {
    if is_five_dukes(hand) {
        Some(Category::FiveDukes)
    } else if is_five_small(hand, rules.five_small_limit) {
        Some(Category::FiveSmall)
    } else {
        None
    }
}

fn is_five_dukes(hand: &Hand) -> bool {
    hand.cards().iter().all(|card| card.is_face())
}

// Threes count as 3 here, never 6.
fn is_five_small(hand: &Hand, limit: u8) -> bool {
    let small = hand.cards().iter().all(|card| {
        matches!(
            card.rank(),
            Rank::Ace | Rank::Number(2) | Rank::Three | Rank::Number(4)
        )
    });
    if !small {
        return false;
    }

    let total: u16 = hand
        .cards()
        .iter()
        .map(|card| u16::from(card.values().primary()))
        .sum();
    total <= u16::from(limit)
}
