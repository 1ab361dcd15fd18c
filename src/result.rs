//! Evaluation result types.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::options::RuleSet;

/// Display color attached to a hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Gold, used for Five Dukes and pair tails.
    pub const GOLD: Self = Self::rgb(255, 215, 0);
    /// Cyan, used for Five Small.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Violet, used for Ngau Tonku.
    pub const VIOLET: Self = Self::rgb(138, 43, 226);
    /// Red, used for Super Niu and errors.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green, used for plain Niu points.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Gray, used for No Niu.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Light gray, used while waiting for a full hand.
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Category of an evaluated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fewer or more than five cards were supplied.
    Waiting,
    /// A card code could not be decoded.
    Error,
    /// No three cards sum to a multiple of ten.
    NoNiu,
    /// Tail points 1 through 9.
    Niu(u8),
    /// Tail sums to a multiple of ten.
    SuperNiu,
    /// Tail is a pair of equal values (Double Ox).
    DoubleOx(u8),
    /// Tail holds the Ace of Spades and a face card (black jack).
    NgauTonku,
    /// All five cards are A, 2, 3 or 4 with a small total.
    FiveSmall,
    /// All five cards are face cards.
    FiveDukes,
}

impl Category {
    /// Returns the category name, e.g. `"Niu 7"` or `"Double Ox 6"`.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Waiting => "Waiting...".to_string(),
            Self::Error => "Error".to_string(),
            Self::NoNiu => "No Niu".to_string(),
            Self::Niu(points) => format!("Niu {points}"),
            Self::SuperNiu => "Super Niu".to_string(),
            Self::DoubleOx(value) => format!("Double Ox {value}"),
            Self::NgauTonku => "Ngau Tonku".to_string(),
            Self::FiveSmall => "Five Small".to_string(),
            Self::FiveDukes => "Five Dukes".to_string(),
        }
    }

    /// Returns the payout multiplier under the given rules.
    #[must_use]
    pub const fn multiplier(self, rules: &RuleSet) -> u8 {
        match self {
            Self::Waiting | Self::Error => 0,
            Self::NoNiu | Self::Niu(_) | Self::SuperNiu => 1,
            Self::DoubleOx(_) => rules.pair_multiplier,
            Self::NgauTonku => 5,
            Self::FiveSmall => 6,
            Self::FiveDukes => 7,
        }
    }

    /// Returns the display color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Waiting => Color::LIGHT_GRAY,
            Self::Error | Self::SuperNiu => Color::RED,
            Self::NoNiu => Color::GRAY,
            Self::Niu(_) => Color::GREEN,
            Self::DoubleOx(_) | Self::FiveDukes => Color::GOLD,
            Self::NgauTonku => Color::VIOLET,
            Self::FiveSmall => Color::CYAN,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Result of evaluating one hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluationResult {
    /// Human-readable label.
    pub label: String,
    /// The hand category.
    pub category: Category,
    /// Payout multiplier.
    pub multiplier: u8,
    /// Display color.
    pub color: Color,
    /// Codes of the body cards (3), all five for instant hands, or empty.
    pub body: Vec<String>,
    /// Codes of the tail cards (2), all five for No Niu, or empty.
    pub tail: Vec<String>,
}

impl EvaluationResult {
    pub(crate) fn new(
        category: Category,
        rules: &RuleSet,
        body: Vec<String>,
        tail: Vec<String>,
    ) -> Self {
        Self {
            label: category.name(),
            category,
            multiplier: category.multiplier(rules),
            color: category.color(),
            body,
            tail,
        }
    }

    pub(crate) fn waiting() -> Self {
        Self::new(
            Category::Waiting,
            &RuleSet::default(),
            Vec::new(),
            Vec::new(),
        )
    }

    pub(crate) fn error(message: &impl fmt::Display) -> Self {
        Self {
            label: format!("Error: {message}"),
            ..Self::new(
                Category::Error,
                &RuleSet::default(),
                Vec::new(),
                Vec::new(),
            )
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.label, self.multiplier)?;
        if !self.body.is_empty() {
            write!(f, " body [{}]", self.body.join(" "))?;
        }
        if !self.tail.is_empty() {
            write!(f, " tail [{}]", self.tail.join(" "))?;
        }
        Ok(())
    }
}
