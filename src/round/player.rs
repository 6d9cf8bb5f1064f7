use crate::card::Rank;
use crate::error::RoundError;
use crate::strategy::Action;

use super::{Round, RoundState};

impl Round {
    /// Returns whether the next decision may still double down.
    ///
    /// Doubling (and, through the two-card rule, splitting) is only offered on
    /// the first decision.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.options.double && self.decisions == 0
    }

    /// Returns the advice for the current hand without acting on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn peek_advice(&self) -> Result<Action, RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        Ok(self
            .advisor
            .advise(self.player.cards(), self.up, self.can_double()))
    }

    /// Asks the advisor for the next action and follows it.
    ///
    /// - Stand, Bust and Split end the player's turn. A split is only
    ///   announced; the pair is settled as one hand.
    /// - Hit waits for a card through [`Round::player_draw`].
    /// - Double Down waits for exactly one card, then ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn advise(&mut self) -> Result<Action, RoundError> {
        let action = self.peek_advice()?;
        self.decisions += 1;

        log::debug!(
            "decision {}: {:?} ({}) vs {} -> {action}",
            self.decisions,
            self.player.cards(),
            self.player.value(),
            self.up
        );

        match action {
            Action::Stand | Action::Bust => self.finish_player_turn(),
            Action::Split => {
                self.split = true;
                self.finish_player_turn();
            }
            Action::Hit => self.state = RoundState::PlayerDraw,
            Action::DoubleDown => {
                self.doubled = true;
                self.state = RoundState::DoubleDraw;
            }
        }

        Ok(action)
    }

    /// Adds a card the player drew after hitting or doubling down.
    ///
    /// Returns the new player total.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a player card.
    pub fn player_draw(&mut self, card: Rank) -> Result<u32, RoundError> {
        let doubled = match self.state {
            RoundState::PlayerDraw => false,
            RoundState::DoubleDraw => true,
            _ => return Err(RoundError::InvalidState),
        };

        self.player.push(card);
        let value = self.player.value();
        log::debug!("player drew {card}, total {value}");

        if doubled || value > 21 {
            self.finish_player_turn();
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(value)
    }
}
