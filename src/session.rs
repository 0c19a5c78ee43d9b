//! Session loop driving rounds through input and output collaborators.
//!
//! The engine never reads a terminal or formats output itself. A session
//! asks an [`Input`] for raw answers, re-prompting until each one parses,
//! and reports everything worth showing to a [`Presenter`].

extern crate alloc;

use alloc::string::String;

use tracing::debug;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::{BetError, InputError, SessionError};
use crate::game::{Action, Game, GameState};
use crate::options::GameOptions;
use crate::result::RoundResult;

/// A question the session needs answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Play another round?
    Play,
    /// How much to bet.
    Bet {
        /// Smallest accepted bet.
        min: u32,
        /// Largest accepted bet.
        max: u32,
    },
    /// Which action to take.
    Action,
}

/// Source of player answers.
pub trait Input {
    /// Returns the next raw answer to `prompt`.
    ///
    /// Returning `None` means no more answers will come and ends the
    /// session.
    fn answer(&mut self, prompt: Prompt) -> Option<String>;
}

/// Sink for everything the player should see.
pub trait Presenter {
    /// The deck was restored and shuffled.
    fn shuffled(&mut self);
    /// A round is starting.
    fn round_started(&mut self, round: u32);
    /// The bet was accepted.
    fn bet_placed(&mut self, amount: u32);
    /// The dealer cards currently face up.
    fn dealer_hand(&mut self, cards: &[Card]);
    /// The player's cards.
    fn player_hand(&mut self, cards: &[Card]);
    /// An answer was rejected and the prompt will be repeated.
    fn input_rejected(&mut self, prompt: Prompt, error: InputError);
    /// The round was settled.
    fn round_settled(&mut self, result: &RoundResult);
    /// The player stopped playing.
    fn session_ended(&mut self, bankroll: &Bankroll);
}

/// Parses a play/no-play answer.
///
/// # Errors
///
/// Returns [`InputError::UnknownAnswer`] for anything but yes or no.
pub fn parse_play(answer: &str) -> Result<bool, InputError> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(InputError::UnknownAnswer)
    }
}

/// Parses a bet and checks it against the table limits.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the answer is not an integer, or
/// [`InputError::Bet`] if it is outside the limits.
pub fn parse_bet(answer: &str, options: &GameOptions) -> Result<u32, InputError> {
    let amount: u32 = answer
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber)?;

    if !options.accepts_bet(amount) {
        let (min, max) = options.bet_limits();
        return Err(BetError::OutOfRange { amount, min, max }.into());
    }

    Ok(amount)
}

/// A sequence of rounds played against one bankroll.
pub struct Session<I, P> {
    game: Game,
    bankroll: Bankroll,
    input: I,
    presenter: P,
}

impl<I: Input, P: Presenter> Session<I, P> {
    /// Creates a session with a fresh bankroll.
    #[must_use]
    pub const fn new(game: Game, input: I, presenter: P) -> Self {
        Self {
            game,
            bankroll: Bankroll::new(),
            input,
            presenter,
        }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Plays rounds until the player declines or input runs out.
    ///
    /// Returns the final bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the round state machine rejects a step.
    pub fn run(&mut self) -> Result<Bankroll, SessionError> {
        while self.ask(Prompt::Play, parse_play).unwrap_or(false) {
            if self.play_round()?.is_none() {
                break;
            }
        }

        self.presenter.session_ended(&self.bankroll);
        Ok(self.bankroll)
    }

    /// Plays one full round.
    ///
    /// Returns `None` if input ran out before the round could be settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round state machine rejects a step.
    pub fn play_round(&mut self) -> Result<Option<RoundResult>, SessionError> {
        if self.game.start_round()? {
            self.presenter.shuffled();
        }
        self.presenter.round_started(self.game.round_number());

        let options = self.game.options;
        let (min, max) = options.bet_limits();
        let prompt = Prompt::Bet { min, max };
        let Some(amount) = self.ask(prompt, |answer| parse_bet(answer, &options)) else {
            return Ok(None);
        };
        self.game.bet(amount)?;
        self.presenter.bet_placed(amount);

        self.game.deal()?;
        self.presenter.dealer_hand(self.game.dealer_visible_cards());
        self.presenter.player_hand(self.game.player_hand().cards());

        while self.game.state() == GameState::PlayerTurn {
            let Some(action) = self.ask(Prompt::Action, str::parse::<Action>) else {
                return Ok(None);
            };
            self.game.apply(action)?;
            self.presenter.player_hand(self.game.player_hand().cards());
        }

        self.game.dealer_play()?;
        self.presenter.dealer_hand(self.game.dealer_visible_cards());

        let result = self.game.settle(&mut self.bankroll)?;
        self.presenter.round_settled(&result);

        Ok(Some(result))
    }

    /// Asks until an answer parses. `None` once input runs out.
    fn ask<T>(
        &mut self,
        prompt: Prompt,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Option<T> {
        loop {
            let answer = self.input.answer(prompt)?;
            match parse(&answer) {
                Ok(value) => return Some(value),
                Err(error) => {
                    debug!(?prompt, %error, "answer rejected");
                    self.presenter.input_rejected(prompt, error);
                }
            }
        }
    }
}
