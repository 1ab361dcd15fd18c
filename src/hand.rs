//! Five-card hand representation.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DecodeError, HandError};
use crate::options::{RankValidation, RuleSet};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Five decoded cards.
///
/// Cards are kept in a canonical order, so two hands built from the same
/// multiset of codes are equal regardless of input order. Duplicate codes
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five decoded cards.
    #[must_use]
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { cards }
    }

    /// Decodes five card codes into a hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongCardCount`] unless exactly five codes are
    /// given, or [`HandError::Decode`] if a code fails to decode under the
    /// rules' validation mode.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::{Hand, HandError, RuleSet};
    ///
    /// let rules = RuleSet::default();
    /// let hand = Hand::from_codes(&["Kh", "As", "10c", "10d", "10h"], &rules).unwrap();
    /// assert_eq!(hand.codes(), ["As", "10h", "10d", "10c", "Kh"]);
    ///
    /// let short = Hand::from_codes(&["Kh"], &rules);
    /// assert_eq!(short.unwrap_err(), HandError::WrongCardCount(1));
    /// ```
    pub fn from_codes<S: AsRef<str>>(codes: &[S], rules: &RuleSet) -> Result<Self, HandError> {
        if codes.len() != HAND_SIZE {
            return Err(HandError::WrongCardCount(codes.len()));
        }

        let decode: fn(&str) -> Result<Card, DecodeError> = match rules.validation {
            RankValidation::Lenient => Card::decode,
            RankValidation::Strict => Card::decode_strict,
        };

        let mut cards = Vec::with_capacity(HAND_SIZE);
        for code in codes {
            cards.push(decode(code.as_ref())?);
        }

        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|rest: Vec<Card>| HandError::WrongCardCount(rest.len()))?;
        Ok(Self::new(cards))
    }

    /// Returns the cards in canonical order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the card codes in canonical order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.code().to_string()).collect()
    }

    /// Returns the codes of the cards at the given positions.
    pub(crate) fn codes_at(&self, positions: &[usize]) -> Vec<String> {
        positions
            .iter()
            .map(|&i| self.cards[i].code().to_string())
            .collect()
    }
}
