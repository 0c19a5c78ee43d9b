//! Round state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{HandFull, ReshuffleError};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::GameState;

/// Which hand a drawn card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Party {
    Player,
    Dealer,
}

/// A single-deck blackjack table for one player.
///
/// The game owns the deck, both hands, and the random number generator for
/// the lifetime of a session. The bankroll is kept outside and lent to
/// [`Game::settle`] once per round.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the deck.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current round state.
    state: GameState,
    /// Number of rounds settled so far.
    rounds_played: u32,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck starts unshuffled; the first call to [`Game::start_round`]
    /// always reshuffles it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::Idle,
            rounds_played: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns whether the deck is due for a reshuffle before the next round.
    ///
    /// A reshuffle is due on every periodic checkpoint round and whenever the
    /// deck has fallen to the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        let checkpoint = self.options.shuffle_interval != 0
            && self.rounds_played % self.options.shuffle_interval == 0;
        checkpoint || self.deck.remaining() <= self.options.reshuffle_threshold
    }

    /// Restores the full deck and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if !self.state.is_between_rounds() {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        debug!(round = self.round_number(), "deck shuffled");

        Ok(())
    }

    /// Starts a new round: reshuffles if due, clears both hands, and opens
    /// betting.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn start_round(&mut self) -> Result<bool, ReshuffleError> {
        if !self.state.is_between_rounds() {
            return Err(ReshuffleError::InvalidState);
        }

        let reshuffled = if self.needs_reshuffle() {
            self.reshuffle()?;
            true
        } else {
            false
        };

        self.dealer_hand.reset();
        self.player_hand.reset();
        self.state = GameState::Betting;

        Ok(reshuffled)
    }

    /// Draws the top card into one hand.
    ///
    /// An empty deck produces no card and leaves the hand unchanged.
    fn draw_to(&mut self, party: Party) -> Result<Option<Card>, HandFull> {
        let hand = match party {
            Party::Player => &mut self.player_hand,
            Party::Dealer => &mut self.dealer_hand,
        };
        if hand.is_full() {
            return Err(HandFull);
        }

        let Some(card) = self.deck.draw() else {
            warn!(?party, "deck is empty, no card drawn");
            return Ok(None);
        };
        hand.add_card(card)?;
        trace!(?party, %card, remaining = self.deck.remaining(), "card drawn");

        Ok(Some(card))
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the 1-based number of the current or next round.
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.rounds_played + 1
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer cards shown while the player acts.
    ///
    /// The first dealer card stays face down until the dealer turn.
    #[must_use]
    pub fn dealer_visible_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        match self.state {
            GameState::Settlement | GameState::Done => cards,
            _ => cards.get(1..).unwrap_or_default(),
        }
    }
}
