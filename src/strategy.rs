//! Basic-strategy advice.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Rank;
use crate::error::CardError;
use crate::hand::{evaluate, is_natural, pair};
use crate::options::{NineSplitRule, TableOptions};

/// The recommended action for a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take no more cards.
    Stand,
    /// Take one card.
    Hit,
    /// Double the bet and take exactly one card.
    DoubleDown,
    /// Split the pair into two hands.
    Split,
    /// The hand is already over 21.
    Bust,
}

impl Action {
    /// Returns the display label of the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stand => "Stand",
            Self::Hit => "Hit",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
            Self::Bust => "Bust",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Applies the strategy rules under a fixed set of [`TableOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advisor {
    options: TableOptions,
}

impl Advisor {
    /// Creates an advisor for the given table options.
    #[must_use]
    pub const fn new(options: TableOptions) -> Self {
        Self { options }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Recommends an action for `player` against the dealer's `up` card.
    ///
    /// Rules are checked in order and the first match wins: naturals and
    /// busts, pair splitting, doubling down (two-card hands only, and only
    /// when `allow_double` is set), standing thresholds, then hit.
    ///
    /// [`TableOptions::double`] is not consulted here; the round driver folds
    /// it into `allow_double`.
    #[must_use]
    pub fn advise(&self, player: &[Rank], up: Rank, allow_double: bool) -> Action {
        let total = evaluate(player);
        let dealer = u32::from(up.value());
        // Any ace makes the hand soft, even one already recounted as 1.
        let is_soft = player.contains(&Rank::Ace) && total <= 21;

        if is_natural(player) {
            return Action::Stand;
        }
        if total > 21 {
            return Action::Bust;
        }

        if pair(player).is_some_and(|rank| self.should_split(rank, up)) {
            return Action::Split;
        }

        if player.len() == 2 && allow_double {
            if (total == 10 || total == 11) && dealer < total {
                return Action::DoubleDown;
            }
            if is_soft && (13..=17).contains(&total) && (4..=6).contains(&dealer) {
                return Action::DoubleDown;
            }
        }

        if total >= 17 {
            return Action::Stand;
        }
        if is_soft && total >= 19 {
            return Action::Stand;
        }
        if (13..=16).contains(&total) && dealer <= 6 {
            return Action::Stand;
        }

        Action::Hit
    }

    fn should_split(&self, pair: Rank, up: Rank) -> bool {
        let dealer = up.value();
        match pair {
            Rank::Ace | Rank::Eight => true,
            Rank::Two | Rank::Three | Rank::Seven => dealer <= 7,
            Rank::Six => dealer <= 6,
            Rank::Nine => match self.options.nine_split {
                NineSplitRule::Observed => dealer != 7 && dealer != 10,
                NineSplitRule::StandAgainstAce => dealer != 7 && dealer != 10 && up != Rank::Ace,
            },
            _ => false,
        }
    }

    /// Like [`Advisor::advise`], taking rank symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownCard`] if any symbol is not a rank.
    pub fn advise_symbols(
        &self,
        player: &[&str],
        up: &str,
        allow_double: bool,
    ) -> Result<Action, CardError> {
        let cards = player
            .iter()
            .map(|symbol| symbol.parse())
            .collect::<Result<Vec<Rank>, _>>()?;
        let up = up.parse()?;
        let action = self.advise(&cards, up, allow_double);
        log::debug!("advise {player:?} vs {up}: {action}");
        Ok(action)
    }
}

/// Recommends an action using the default [`TableOptions`].
///
/// ```
/// use bjadvisor::{Action, Rank, advise};
///
/// assert_eq!(advise(&[Rank::Five, Rank::Six], Rank::Four, true), Action::DoubleDown);
/// assert_eq!(advise(&[Rank::Five, Rank::Six], Rank::Four, false), Action::Hit);
/// ```
#[must_use]
pub fn advise(player: &[Rank], up: Rank, allow_double: bool) -> Action {
    Advisor::default().advise(player, up, allow_double)
}

/// Recommends an action for a hand given as rank symbols, using the default
/// [`TableOptions`].
///
/// # Errors
///
/// Returns [`CardError::UnknownCard`] if any symbol is not a rank.
pub fn advise_symbols(player: &[&str], up: &str, allow_double: bool) -> Result<Action, CardError> {
    Advisor::default().advise_symbols(player, up, allow_double)
}
