//! Table configuration options.

/// When the dealer stops drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerStand {
    /// Dealer hits through 16 and stands on any 17, soft or hard.
    #[default]
    On17,
    /// Dealer hits through 17 and stands on 18 or more.
    On18,
}

impl DealerStand {
    /// Returns the highest total the dealer still draws on.
    ///
    /// ```
    /// use bjadvisor::DealerStand;
    ///
    /// assert_eq!(DealerStand::On17.threshold(), 16);
    /// assert_eq!(DealerStand::On18.threshold(), 17);
    /// ```
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::On17 => 16,
            Self::On18 => 17,
        }
    }

    /// Returns whether a dealer holding `total` must take another card.
    #[must_use]
    pub const fn draws_on(self, total: u32) -> bool {
        total <= self.threshold()
    }
}

/// How a pair of nines is played against a dealer ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NineSplitRule {
    /// Split nines unless the dealer shows 7 or a ten-value card. A dealer ace
    /// still gets the split.
    #[default]
    Observed,
    /// Also keep nines together against a dealer ace.
    StandAgainstAce,
}

/// How a busted player hand is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerBustRule {
    /// The dealer always completes the hand and the final totals are compared
    /// directly: a dealer bust or a higher player total wins for the player,
    /// even when the player is over 21.
    #[default]
    CompareTotals,
    /// A busted player loses at once and the dealer draws no cards.
    Loses,
}

/// Configuration options for the advisor and the round driver.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjadvisor::{DealerStand, TableOptions};
///
/// let options = TableOptions::default()
///     .with_dealer_stand(DealerStand::On18)
///     .with_double(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// When the dealer stops drawing.
    pub dealer_stand: DealerStand,
    /// Whether doubling down is offered on the first decision.
    pub double: bool,
    /// Nines-versus-ace split rule.
    pub nine_split: NineSplitRule,
    /// Settlement rule for a busted player.
    pub player_bust: PlayerBustRule,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_stand: DealerStand::On17,
            double: true,
            nine_split: NineSplitRule::Observed,
            player_bust: PlayerBustRule::CompareTotals,
        }
    }
}

impl TableOptions {
    /// Sets when the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::{DealerStand, TableOptions};
    ///
    /// let options = TableOptions::default().with_dealer_stand(DealerStand::On18);
    /// assert_eq!(options.dealer_stand, DealerStand::On18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, stand: DealerStand) -> Self {
        self.dealer_stand = stand;
        self
    }

    /// Sets whether doubling down is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::TableOptions;
    ///
    /// let options = TableOptions::default().with_double(false);
    /// assert!(!options.double);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, allowed: bool) -> Self {
        self.double = allowed;
        self
    }

    /// Sets the nines-versus-ace split rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::{NineSplitRule, TableOptions};
    ///
    /// let options = TableOptions::default().with_nine_split(NineSplitRule::StandAgainstAce);
    /// assert_eq!(options.nine_split, NineSplitRule::StandAgainstAce);
    /// ```
    #[must_use]
    pub const fn with_nine_split(mut self, rule: NineSplitRule) -> Self {
        self.nine_split = rule;
        self
    }

    /// Sets the settlement rule for a busted player.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::{PlayerBustRule, TableOptions};
    ///
    /// let options = TableOptions::default().with_player_bust(PlayerBustRule::Loses);
    /// assert_eq!(options.player_bust, PlayerBustRule::Loses);
    /// ```
    #[must_use]
    pub const fn with_player_bust(mut self, rule: PlayerBustRule) -> Self {
        self.player_bust = rule;
        self
    }
}
