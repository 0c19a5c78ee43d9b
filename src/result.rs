//! Round result types for settlement.

/// Result of the player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts, dealer has the higher value, or a tie).
    Lose,
}

/// Summary of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// The outcome of the player's hand.
    pub outcome: HandOutcome,
    /// The final bet, including any double.
    pub bet: u32,
    /// The player's best hand value.
    pub player_value: u8,
    /// The dealer's best hand value.
    pub dealer_value: u8,
    /// Balance after settlement.
    pub balance: i64,
    /// Total rounds won after settlement.
    pub wins: u32,
}

impl RoundResult {
    /// Returns whether the player won the round.
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.outcome == HandOutcome::Win
    }
}
