//! Card ranks and symbol parsing.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// A card rank. Suits play no part in strategy decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the nominal point value of the rank.
    ///
    /// Face cards count 10 and an ace counts 11; softening an ace to 1 is
    /// done by [`crate::hand::evaluate`].
    ///
    /// ```
    /// use bjadvisor::Rank;
    ///
    /// assert_eq!(Rank::Queen.value(), 10);
    /// assert_eq!(Rank::Ace.value(), 11);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns the canonical symbol (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether the rank is worth ten points (10, J, Q, K).
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    /// Parses a canonical rank symbol. Matching is exact: callers that accept
    /// lowercase input should upper-case it first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| CardError::UnknownCard(s.to_string()))
    }
}

/// Parses a whitespace-separated list of rank symbols, e.g. `"K A"`.
///
/// # Errors
///
/// Returns [`CardError::UnknownCard`] for the first token that is not a rank.
///
/// ```
/// use bjadvisor::{Rank, parse_hand};
///
/// assert_eq!(parse_hand("K A").unwrap(), vec![Rank::King, Rank::Ace]);
/// assert!(parse_hand("K X").is_err());
/// ```
pub fn parse_hand(input: &str) -> Result<Vec<Rank>, CardError> {
    input.split_whitespace().map(str::parse).collect()
}
