use tracing::{debug, info};

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::player_wins;
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState, Party};

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer draws exactly one card on a two-card soft seventeen and
    /// otherwise stands on whatever they hold.
    ///
    /// Returns the card drawn by the dealer, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = if self.dealer_hand.is_soft_seventeen() {
            debug!("dealer draws on soft seventeen");
            self.draw_to(Party::Dealer)?
        } else {
            None
        };

        self.state = GameState::Settlement;

        Ok(drawn)
    }

    /// Settles the round against the bankroll.
    ///
    /// A win credits the bet and records a win; anything else debits the
    /// bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&mut self, bankroll: &mut Bankroll) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let bet = self.player_hand.bet();
        let outcome = if player_wins(&self.player_hand, &self.dealer_hand) {
            bankroll.credit(bet);
            bankroll.record_win();
            HandOutcome::Win
        } else {
            bankroll.debit(bet);
            HandOutcome::Lose
        };

        let result = RoundResult {
            round: self.round_number(),
            outcome,
            bet,
            player_value: self.player_hand.best_value(),
            dealer_value: self.dealer_hand.best_value(),
            balance: bankroll.balance(),
            wins: bankroll.wins(),
        };

        self.rounds_played += 1;
        self.state = GameState::Done;
        info!(
            round = result.round,
            ?outcome,
            bet,
            balance = result.balance,
            wins = result.wins,
            "round settled"
        );

        Ok(result)
    }
}
