//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's next decision.
    PlayerTurn,
    /// The player hit and the drawn card is needed.
    PlayerDraw,
    /// The player doubled down and the single drawn card is needed.
    DoubleDraw,
    /// The dealer is drawing until past the stand threshold.
    DealerTurn,
    /// Both hands are final and the round can be settled.
    RoundOver,
}

impl RoundState {
    /// Returns whether the round is waiting for a player card.
    #[must_use]
    pub const fn awaits_player_card(self) -> bool {
        matches!(self, Self::PlayerDraw | Self::DoubleDraw)
    }
}
