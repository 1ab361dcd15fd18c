//! Tail scoring.

use crate::card::Card;
use crate::result::Category;

/// Score of No Niu and of categories the search never produces.
const NO_NIU_SCORE: i16 = -1;

const NGAU_TONKU_SCORE: i16 = 500;
const PAIR_SCORE: i16 = 300;
const SUPER_NIU_SCORE: i16 = 100;
const NIU_SCORE: i16 = 10;

/// Classifies a two-card tail.
///
/// Rules are checked in order and the first match wins:
/// 1. the Ace of Spades together with a face card is Ngau Tonku,
/// 2. equal assigned values are a pair (Double Ox),
/// 3. otherwise the tail sum modulo ten gives the Niu points, 0 being
///    Super Niu.
///
/// `values` are the values assigned to the two cards, so a Three counted
/// as 6 pairs with a Six.
pub(crate) fn classify(cards: [&Card; 2], values: [u8; 2]) -> Category {
    let spade_ace = cards.iter().any(|card| card.is_spade_ace());
    let face = cards.iter().any(|card| card.is_face());
    if spade_ace && face {
        return Category::NgauTonku;
    }

    if values[0] == values[1] {
        return Category::DoubleOx(values[0]);
    }

    match (values[0] + values[1]) % 10 {
        0 => Category::SuperNiu,
        points => Category::Niu(points),
    }
}

/// Ranking score used to pick the best decomposition.
pub(crate) fn score(category: Category) -> i16 {
    match category {
        Category::NgauTonku => NGAU_TONKU_SCORE,
        Category::DoubleOx(value) => PAIR_SCORE + i16::from(value),
        Category::SuperNiu => SUPER_NIU_SCORE,
        Category::Niu(points) => NIU_SCORE + i16::from(points),
        _ => NO_NIU_SCORE,
    }
}
