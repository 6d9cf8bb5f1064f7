//! Hand evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::CardError;

/// Returns the total and the number of aces still counted as 11.
pub(crate) fn evaluate_cards(cards: &[Rank]) -> (u32, u32) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if *card == Rank::Ace {
            aces += 1;
        }
        value += u32::from(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces)
}

/// Computes the best total of a hand.
///
/// Aces start at 11 and are recounted as 1, one at a time, while the total
/// exceeds 21. The result is the highest non-busting total when one exists,
/// otherwise the lowest busting total.
///
/// ```
/// use bjadvisor::{Rank, evaluate};
///
/// assert_eq!(evaluate(&[]), 0);
/// assert_eq!(evaluate(&[Rank::Ace, Rank::Ace]), 12);
/// assert_eq!(evaluate(&[Rank::King, Rank::Queen, Rank::Five]), 25);
/// ```
#[must_use]
pub fn evaluate(cards: &[Rank]) -> u32 {
    evaluate_cards(cards).0
}

/// Computes the total of a hand given as rank symbols.
///
/// # Errors
///
/// Returns [`CardError::UnknownCard`] if any symbol is not a rank.
pub fn evaluate_symbols(symbols: &[&str]) -> Result<u32, CardError> {
    let cards = symbols
        .iter()
        .map(|symbol| symbol.parse())
        .collect::<Result<Vec<Rank>, _>>()?;
    Ok(evaluate(&cards))
}

/// Returns whether `cards` is a two-card 21.
///
/// ```
/// use bjadvisor::{Rank, is_natural};
///
/// assert!(is_natural(&[Rank::Ace, Rank::King]));
/// assert!(!is_natural(&[Rank::Five, Rank::Six, Rank::Ten]));
/// ```
#[must_use]
pub fn is_natural(cards: &[Rank]) -> bool {
    cards.len() == 2 && evaluate(cards) == 21
}

/// Returns the paired rank if `cards` is exactly two identical ranks.
///
/// A ten and a king are not a pair.
#[must_use]
pub fn pair(cards: &[Rank]) -> Option<Rank> {
    match cards {
        [first, second] if first == second => Some(*first),
        _ => None,
    }
}

/// An append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card.
    pub fn push(&mut self, card: Rank) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the best total, recomputed from the cards.
    #[must_use]
    pub fn value(&self) -> u32 {
        evaluate(&self.cards)
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1 > 0
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
