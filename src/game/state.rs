//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been played yet.
    Idle,
    /// Accepting the bet for the next round.
    Betting,
    /// Bet placed; initial cards not yet dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round can be settled against the bankroll.
    Settlement,
    /// Round has been settled.
    Done,
}

impl GameState {
    /// Returns whether no round is in progress.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::Idle | Self::Done)
    }
}
