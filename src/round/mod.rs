//! Round driver.
//!
//! A [`Round`] replaces the prompt loop of a manual table: the caller asks for
//! advice, feeds in each card it draws, and reads the result once the round is
//! over. Nothing here touches a console, so the same driver backs the text
//! shell, the wasm front end and the tests.

use crate::card::Rank;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::{PlayerBustRule, TableOptions};
use crate::strategy::Advisor;

mod dealer;
mod player;
pub mod state;

pub use state::RoundState;

/// A single round played against one dealer up card.
#[derive(Debug, Clone)]
pub struct Round {
    /// Table options for this round.
    options: TableOptions,
    /// Advisor built from the options.
    advisor: Advisor,
    /// Current round state.
    state: RoundState,
    /// The player's hand.
    player: Hand,
    /// The dealer's up card.
    up: Rank,
    /// The dealer's hand, starting with the up card.
    dealer: Hand,
    /// Number of decisions taken so far.
    decisions: usize,
    /// Whether the player doubled down.
    doubled: bool,
    /// Whether a split was announced.
    split: bool,
}

impl Round {
    /// Starts a round from the player's initial hand and the dealer's up card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IncompleteHand`] if the player has fewer than two
    /// cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::{Action, Hand, Rank, Round, RoundState, TableOptions};
    ///
    /// let hand: Hand = [Rank::King, Rank::Nine].into_iter().collect();
    /// let mut round = Round::new(hand, Rank::Two, TableOptions::default()).unwrap();
    /// assert_eq!(round.advise(), Ok(Action::Stand));
    /// assert_eq!(round.state(), RoundState::DealerTurn);
    /// ```
    pub fn new(player: Hand, dealer_up: Rank, options: TableOptions) -> Result<Self, RoundError> {
        if player.len() < 2 {
            return Err(RoundError::IncompleteHand);
        }

        let mut dealer = Hand::new();
        dealer.push(dealer_up);

        log::debug!(
            "round started: player {:?} ({}) vs dealer {dealer_up}",
            player.cards(),
            player.value()
        );

        Ok(Self {
            options,
            advisor: Advisor::new(options),
            state: RoundState::PlayerTurn,
            player,
            up: dealer_up,
            dealer,
            decisions: 0,
            doubled: false,
            split: false,
        })
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's up card.
    #[must_use]
    pub const fn dealer_up(&self) -> Rank {
        self.up
    }

    /// Returns the number of decisions taken so far.
    #[must_use]
    pub const fn decisions(&self) -> usize {
        self.decisions
    }

    /// Returns whether the player doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether a split was announced.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split
    }

    /// Ends the player's turn. Under [`PlayerBustRule::Loses`] a busted
    /// player leaves nothing to settle, so the dealer does not draw.
    fn finish_player_turn(&mut self) {
        let settled = self.player.is_bust() && self.options.player_bust == PlayerBustRule::Loses;
        self.state = if settled || !self.dealer_needs_card() {
            RoundState::RoundOver
        } else {
            RoundState::DealerTurn
        };
        log::debug!("player turn over, round is now {:?}", self.state);
    }
}
