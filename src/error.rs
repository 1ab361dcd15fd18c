//! Error types for decoding cards and building hands.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while decoding a card code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The code is empty, so there is no suit symbol.
    #[error("empty card code")]
    Empty,
    /// The rank token is not recognized (strict validation only).
    #[error("unknown rank `{0}`")]
    UnknownRank(String),
    /// The suit symbol is not recognized (strict validation only).
    #[error("unknown suit `{0}`")]
    UnknownSuit(char),
}

/// Errors that can occur while building a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not have exactly five cards.
    #[error("expected 5 cards, got {0}")]
    WrongCardCount(usize),
    /// A card code could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
