use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, HandFull, InputError};
use crate::hand::BLACKJACK;

use super::{Game, GameState, Party};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card and keep playing.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Draw one card, double the bet, and end the turn.
    Double,
}

impl FromStr for Action {
    type Err = InputError;

    /// Accepts the menu number or the action name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();
        if answer == "1" || answer.eq_ignore_ascii_case("h") || answer.eq_ignore_ascii_case("hit")
        {
            Ok(Self::Hit)
        } else if answer == "2"
            || answer.eq_ignore_ascii_case("s")
            || answer.eq_ignore_ascii_case("stand")
        {
            Ok(Self::Stand)
        } else if answer == "3"
            || answer.eq_ignore_ascii_case("d")
            || answer.eq_ignore_ascii_case("double")
        {
            Ok(Self::Double)
        } else {
            Err(InputError::UnknownAction)
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
        })
    }
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Ends the player turn if the hand is bust with every Ace counted as one.
    fn end_turn_if_bust(&mut self) {
        if self.player_hand.min_value() > BLACKJACK {
            debug!(value = self.player_hand.min_value(), "player busts");
            self.state = GameState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card, or `None` if the deck was empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the hand
    /// is full.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw_to(Party::Player)?;
        self.end_turn_if_bust();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;

        Ok(())
    }

    /// Player action: Double down (receive one card, double the bet, then
    /// stand).
    ///
    /// Returns the drawn card, or `None` if the deck was empty. The bet is
    /// doubled either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand is
    /// full, or the bet cannot be doubled. No card is drawn on error.
    pub fn double_down(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;
        if self.player_hand.is_full() {
            return Err(HandFull.into());
        }

        self.player_hand.double_bet()?;
        let card = self.draw_to(Party::Player)?;
        self.state = GameState::DealerTurn;

        Ok(card)
    }

    /// Applies a player action.
    ///
    /// Returns `true` while the player turn continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying action fails.
    pub fn apply(&mut self, action: Action) -> Result<bool, ActionError> {
        debug!(%action, "player action");
        match action {
            Action::Hit => {
                self.hit()?;
            }
            Action::Stand => self.stand()?,
            Action::Double => {
                self.double_down()?;
            }
        }

        Ok(self.state == GameState::PlayerTurn)
    }
}
