use crate::card::Rank;
use crate::error::RoundError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

impl Round {
    /// Returns whether the dealer must take another card.
    ///
    /// The dealer draws while the total is at or below the stand threshold of
    /// [`crate::DealerStand`]. Soft and hard totals are treated alike.
    #[must_use]
    pub fn dealer_needs_card(&self) -> bool {
        self.options.dealer_stand.draws_on(self.dealer.value())
    }

    /// Adds a card the dealer drew.
    ///
    /// Returns the new dealer total. The round is over once the dealer total
    /// passes the stand threshold, which includes busting.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state.
    pub fn dealer_draw(&mut self, card: Rank) -> Result<u32, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        self.dealer.push(card);
        let value = self.dealer.value();
        log::debug!("dealer drew {card}, total {value}");

        if !self.dealer_needs_card() {
            self.state = RoundState::RoundOver;
        }

        Ok(value)
    }

    /// Settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn showdown(&self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = Outcome::resolve(player_value, dealer_value, self.options.player_bust);

        log::info!("round settled: player {player_value}, dealer {dealer_value}, {outcome:?}");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust: player_value > 21,
            dealer_bust: dealer_value > 21,
            doubled: self.doubled,
            split: self.split,
        })
    }
}
