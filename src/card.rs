//! Card codes and their decoded form.
//!
//! A card code is a short token such as `"As"`, `"10h"` or `"QD"`: the last
//! character is the suit symbol and everything before it is the rank token.
//! Decoding is case-insensitive.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::DecodeError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// A trailing character that is not one of `s`, `h`, `d`, `c`.
    ///
    /// The original character is kept so the code can be displayed as-is.
    Other(char),
}

impl Suit {
    /// Parses a suit symbol, case-insensitively.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol.to_ascii_lowercase() {
            's' => Self::Spades,
            'h' => Self::Hearts,
            'd' => Self::Diamonds,
            'c' => Self::Clubs,
            _ => Self::Other(symbol),
        }
    }

    /// Returns the suit pip used in display labels.
    #[must_use]
    pub const fn pip(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Other(symbol) => symbol,
        }
    }
}

/// Face card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// Rank category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, always worth 1.
    Ace,
    /// Plain numeric rank: 2, 4, 5, 7, 8, 9 or 10.
    Number(u8),
    /// Three, worth 3 or 6.
    Three,
    /// Six, worth 6 or 3.
    Six,
    /// Jack, Queen or King, worth 10.
    Face(Face),
    /// Unrecognized rank token.
    ///
    /// Decoding is permissive: such a card takes part in scoring as a
    /// zero-value numeric card instead of failing the whole hand.
    Unknown,
}

impl Rank {
    /// Parses a lowercase rank token. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "a" => Self::Ace,
            "j" => Self::Face(Face::Jack),
            "q" => Self::Face(Face::Queen),
            "k" => Self::Face(Face::King),
            "3" => Self::Three,
            "6" => Self::Six,
            "2" | "4" | "5" | "7" | "8" | "9" | "10" => {
                token.parse().map_or(Self::Unknown, Self::Number)
            }
            _ => Self::Unknown,
        }
    }

    /// Returns the values this rank may contribute to a sum.
    #[must_use]
    pub const fn values(self) -> CandidateValues {
        match self {
            Self::Ace => CandidateValues::one(1),
            Self::Number(n) => CandidateValues::one(n),
            Self::Three => CandidateValues::two(3, 6),
            Self::Six => CandidateValues::two(6, 3),
            Self::Face(_) => CandidateValues::one(10),
            Self::Unknown => CandidateValues::one(0),
        }
    }

    /// Ordinal used to sort cards: Unknown, A, 2..10, J, Q, K.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Ace => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Number(n) => n,
            Self::Face(Face::Jack) => 11,
            Self::Face(Face::Queen) => 12,
            Self::Face(Face::King) => 13,
        }
    }

    /// Returns the rank symbol used in display labels.
    ///
    /// Returns `None` for [`Rank::Unknown`].
    #[must_use]
    pub fn symbol(self) -> Option<String> {
        let symbol = match self {
            Self::Ace => "A".to_string(),
            Self::Three => "3".to_string(),
            Self::Six => "6".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Face(Face::Jack) => "J".to_string(),
            Self::Face(Face::Queen) => "Q".to_string(),
            Self::Face(Face::King) => "K".to_string(),
            Self::Unknown => return None,
        };
        Some(symbol)
    }
}

/// Ordered set of one or two values a card may contribute to a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateValues {
    values: [u8; 2],
    len: usize,
}

impl CandidateValues {
    const fn one(value: u8) -> Self {
        Self {
            values: [value, value],
            len: 1,
        }
    }

    const fn two(first: u8, second: u8) -> Self {
        Self {
            values: [first, second],
            len: 2,
        }
    }

    /// Returns the values as a slice. Never empty.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }

    /// Returns the first value (3 for a Three, 6 for a Six).
    #[must_use]
    pub const fn primary(&self) -> u8 {
        self.values[0]
    }

    /// Returns the number of candidate values (1 or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A decoded card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    code: String,
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Decodes a card code permissively.
    ///
    /// Unrecognized rank tokens decode to [`Rank::Unknown`] (worth 0) and
    /// unrecognized suit symbols to [`Suit::Other`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] if the code has no characters, since
    /// there is no suit symbol to read.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::{Card, Rank, Suit};
    ///
    /// let card = Card::decode("10h").unwrap();
    /// assert_eq!(card.rank(), Rank::Number(10));
    /// assert_eq!(card.suit(), Suit::Hearts);
    ///
    /// let odd = Card::decode("Xs").unwrap();
    /// assert_eq!(odd.rank(), Rank::Unknown);
    /// assert_eq!(odd.values().as_slice(), &[0]);
    /// ```
    pub fn decode(code: &str) -> Result<Self, DecodeError> {
        let mut chars = code.chars();
        let symbol = chars.next_back().ok_or(DecodeError::Empty)?;
        let token = chars.as_str().to_ascii_lowercase();

        Ok(Self {
            code: code.to_string(),
            rank: Rank::from_token(&token),
            suit: Suit::from_symbol(symbol),
        })
    }

    /// Decodes a card code, rejecting unknown ranks and suits.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] for an empty code,
    /// [`DecodeError::UnknownRank`] for an unrecognized rank token and
    /// [`DecodeError::UnknownSuit`] for an unrecognized suit symbol.
    pub fn decode_strict(code: &str) -> Result<Self, DecodeError> {
        let card = Self::decode(code)?;
        if card.rank == Rank::Unknown {
            let mut chars = code.chars();
            chars.next_back();
            return Err(DecodeError::UnknownRank(chars.as_str().to_string()));
        }
        if let Suit::Other(symbol) = card.suit {
            return Err(DecodeError::UnknownSuit(symbol));
        }
        Ok(card)
    }

    /// Returns the original code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the rank category.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the values this card may contribute to a sum.
    #[must_use]
    pub const fn values(&self) -> CandidateValues {
        self.rank.values()
    }

    /// Returns whether the card is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        matches!(self.rank, Rank::Face(_))
    }

    /// Returns whether the card is the Ace of Spades.
    #[must_use]
    pub fn is_spade_ace(&self) -> bool {
        self.rank == Rank::Ace && self.suit == Suit::Spades
    }

    /// Returns a human-readable label such as `"A♠"` or `"10♥"`.
    ///
    /// Cards with an unknown rank are labelled with their raw code.
    #[must_use]
    pub fn label(&self) -> String {
        self.rank
            .symbol()
            .map_or_else(|| self.code.clone(), |rank| format!("{rank}{}", self.suit.pip()))
    }

    /// Key giving every card a total order independent of input order.
    pub(crate) fn sort_key(&self) -> (u8, Suit, String, &str) {
        (
            self.rank.ordinal(),
            self.suit,
            self.code.to_ascii_lowercase(),
            &self.code,
        )
    }
}

impl FromStr for Card {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
