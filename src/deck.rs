//! Seeded shoe of card codes.
//!
//! The evaluator only needs codes, so the deck deals codes rather than
//! decoded cards. Useful for demos and simulations.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::hand::HAND_SIZE;

const RANKS: [&str; 13] = [
    "a", "2", "3", "4", "5", "6", "7", "8", "9", "10", "j", "q", "k",
];
const SUITS: [char; 4] = ['s', 'h', 'd', 'c'];

/// A shuffled 52-card deck of card codes.
///
/// # Example
///
/// ```
/// use niurs::{Deck, evaluate};
///
/// let mut deck = Deck::new(42);
/// let hand = deck.deal_hand().unwrap();
/// let _ = evaluate(&hand);
/// assert_eq!(deck.remaining(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Codes left to deal; the next card is at the end.
    cards: Vec<String>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reshuffle();
        deck
    }

    /// Collects all cards back and shuffles them.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        for suit in SUITS {
            for rank in RANKS {
                self.cards.push(format!("{rank}{suit}"));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Deals one card code.
    pub fn deal(&mut self) -> Option<String> {
        self.cards.pop()
    }

    /// Deals five card codes.
    ///
    /// Returns `None` and deals nothing if fewer than five cards remain.
    pub fn deal_hand(&mut self) -> Option<[String; HAND_SIZE]> {
        if self.cards.len() < HAND_SIZE {
            return None;
        }
        let start = self.cards.len() - HAND_SIZE;
        let mut hand = self.cards.split_off(start);
        hand.reverse();
        hand.try_into().ok()
    }
}
