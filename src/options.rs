//! House-rule options.

/// How strictly card codes are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RankValidation {
    /// Unknown ranks count as 0 and unknown suits are kept as-is.
    #[default]
    Lenient,
    /// Unknown ranks or suits make the hand an error.
    Strict,
}

/// Payout multiplier for a pair tail in the standard rule set.
pub const DEFAULT_PAIR_MULTIPLIER: u8 = 2;

/// Payout multiplier for a pair tail in the revised rule set.
pub const REVISED_PAIR_MULTIPLIER: u8 = 3;

/// Highest card total that still counts as Five Small.
pub const DEFAULT_FIVE_SMALL_LIMIT: u8 = 10;

/// House rules used when evaluating a hand.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use niurs::{RankValidation, RuleSet};
///
/// let rules = RuleSet::default()
///     .with_pair_multiplier(3)
///     .with_validation(RankValidation::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Multiplier paid for a pair tail (Double Ox).
    pub pair_multiplier: u8,
    /// Highest total of primary card values that counts as Five Small.
    pub five_small_limit: u8,
    /// Card code validation.
    pub validation: RankValidation,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            pair_multiplier: DEFAULT_PAIR_MULTIPLIER,
            five_small_limit: DEFAULT_FIVE_SMALL_LIMIT,
            validation: RankValidation::Lenient,
        }
    }
}

impl RuleSet {
    /// Returns the revised rule set, which pays 3 for a pair tail.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::RuleSet;
    ///
    /// assert_eq!(RuleSet::revised().pair_multiplier, 3);
    /// ```
    #[must_use]
    pub fn revised() -> Self {
        Self::default().with_pair_multiplier(REVISED_PAIR_MULTIPLIER)
    }

    /// Sets the pair tail multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::RuleSet;
    ///
    /// let rules = RuleSet::default().with_pair_multiplier(4);
    /// assert_eq!(rules.pair_multiplier, 4);
    /// ```
    #[must_use]
    pub const fn with_pair_multiplier(mut self, multiplier: u8) -> Self {
        self.pair_multiplier = multiplier;
        self
    }

    /// Sets the Five Small total limit.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::RuleSet;
    ///
    /// let rules = RuleSet::default().with_five_small_limit(9);
    /// assert_eq!(rules.five_small_limit, 9);
    /// ```
    #[must_use]
    pub const fn with_five_small_limit(mut self, limit: u8) -> Self {
        self.five_small_limit = limit;
        self
    }

    /// Sets the card code validation.
    ///
    /// # Example
    ///
    /// ```
    /// use niurs::{RankValidation, RuleSet};
    ///
    /// let rules = RuleSet::default().with_validation(RankValidation::Strict);
    /// assert_eq!(rules.validation, RankValidation::Strict);
    /// ```
    #[must_use]
    pub const fn with_validation(mut self, validation: RankValidation) -> Self {
        self.validation = validation;
        self
    }
}
