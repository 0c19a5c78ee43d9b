use tracing::debug;

use crate::error::{BetError, DealError};

use super::{Game, GameState, Party};

impl Game {
    /// Places the player's bet for this round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// outside the table limits, or a bet was already placed.
    pub fn bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if !self.options.accepts_bet(amount) {
            let (min, max) = self.options.bet_limits();
            return Err(BetError::OutOfRange { amount, min, max });
        }

        self.player_hand.place_bet(amount)?;
        self.state = GameState::Dealing;

        Ok(())
    }

    /// Deals two cards each, alternating player and dealer, player first.
    ///
    /// Draws from an empty deck are skipped, so a hand may end up short.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed yet.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        for party in [Party::Player, Party::Dealer, Party::Player, Party::Dealer] {
            self.draw_to(party)?;
        }

        debug!(
            player = self.player_hand.best_value(),
            remaining = self.deck.remaining(),
            "initial cards dealt"
        );
        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
