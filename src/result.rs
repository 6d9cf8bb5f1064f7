//! Round result types for showdown.

use core::fmt;

use crate::options::PlayerBustRule;

/// Winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Compares final totals.
    ///
    /// Under [`PlayerBustRule::CompareTotals`] the totals are compared as they
    /// stand, so a busted player still beats a lower or busted dealer total.
    /// Under [`PlayerBustRule::Loses`] a busted player always loses.
    ///
    /// ```
    /// use bjadvisor::{Outcome, PlayerBustRule};
    ///
    /// let rule = PlayerBustRule::CompareTotals;
    /// assert_eq!(Outcome::resolve(20, 22, rule), Outcome::PlayerWins);
    /// assert_eq!(Outcome::resolve(25, 18, rule), Outcome::PlayerWins);
    /// assert_eq!(Outcome::resolve(18, 18, rule), Outcome::Tie);
    /// assert_eq!(Outcome::resolve(25, 18, PlayerBustRule::Loses), Outcome::DealerWins);
    /// ```
    #[must_use]
    pub const fn resolve(player_total: u32, dealer_total: u32, rule: PlayerBustRule) -> Self {
        if player_total > 21 && matches!(rule, PlayerBustRule::Loses) {
            Self::DealerWins
        } else if dealer_total > 21 || player_total > dealer_total {
            Self::PlayerWins
        } else if player_total < dealer_total {
            Self::DealerWins
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWins => "You win!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        })
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_value: u32,
    /// The dealer's final total.
    pub dealer_value: u32,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// Whether a split was announced. The pair is settled as a single hand.
    pub split: bool,
}
