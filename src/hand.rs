//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::{ActionError, BetError, HandFull};

/// Maximum number of cards a hand can hold.
///
/// Eleven low cards (four Aces, four Twos, three Threes) total exactly 21,
/// so the twelfth card always busts and ends the turn.
pub const MAX_HAND_SIZE: usize = 12;

/// Highest value a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// Extra value gained by counting an Ace as eleven.
const ACE_BONUS: u8 = 10;

/// The cards and bet belonging to one party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were drawn.
    cards: Vec<Card>,
    /// Bet amount for this hand.
    bet: u32,
    /// Whether a bet has been placed this round.
    bet_placed: bool,
    /// Whether the bet has been doubled.
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: 0,
            bet_placed: false,
            doubled: false,
        }
    }

    /// Empties the hand and clears the bet.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.bet = 0;
        self.bet_placed = false;
        self.doubled = false;
    }

    /// Places the bet for this round.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::AlreadyPlaced`] if a bet is already set or cards
    /// have been dealt.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.bet_placed || !self.cards.is_empty() {
            return Err(BetError::AlreadyPlaced);
        }
        self.bet = amount;
        self.bet_placed = true;
        Ok(())
    }

    /// Doubles the bet amount.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::AlreadyDoubled`] on a second call in the same
    /// round, or [`ActionError::BetOverflow`] if twice the bet does not fit
    /// in a `u32`. The hand is unchanged on error.
    pub const fn double_bet(&mut self) -> Result<(), ActionError> {
        if self.doubled {
            return Err(ActionError::AlreadyDoubled);
        }
        let Some(doubled) = self.bet.checked_mul(2) else {
            return Err(ActionError::BetOverflow);
        };
        self.bet = doubled;
        self.doubled = true;
        Ok(())
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandFull`] if the hand already holds [`MAX_HAND_SIZE`] cards.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandFull> {
        if self.is_full() {
            return Err(HandFull);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns whether the bet has been doubled this round.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand cannot take another card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Value of the hand with every Ace counted as one.
    #[must_use]
    pub fn min_value(&self) -> u8 {
        self.cards.iter().map(|card| card.rank().min_value()).sum()
    }

    /// Extra value available by promoting Aces from one to eleven.
    #[must_use]
    pub fn optional_ace_value(&self) -> u8 {
        self.aces() * ACE_BONUS
    }

    /// Calculates the best value of the hand.
    ///
    /// Aces are promoted to eleven one at a time while the total stays at or
    /// under 21. The result exceeds 21 only when the hand is bust even with
    /// every Ace counted as one.
    #[must_use]
    pub fn best_value(&self) -> u8 {
        let mut value = self.min_value();
        let mut optional = self.optional_ace_value();

        while optional > 0 && value + ACE_BONUS <= BLACKJACK {
            optional -= ACE_BONUS;
            value += ACE_BONUS;
        }

        value
    }

    /// Returns whether the hand is soft (contains an Ace counted as eleven).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.best_value() > self.min_value()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.best_value() > BLACKJACK
    }

    /// Returns whether the hand is exactly an Ace and a Six.
    #[must_use]
    pub fn is_soft_seventeen(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => {
                let ranks = (first.rank(), second.rank());
                ranks == (Rank::ACE, Rank::SIX) || ranks == (Rank::SIX, Rank::ACE)
            }
            _ => false,
        }
    }

    fn aces(&self) -> u8 {
        self.cards.iter().filter(|card| card.rank().is_ace()).count() as u8
    }
}

/// Decides whether `player` beats `dealer`.
///
/// A bust player always loses, even against a bust dealer. Ties go to the
/// dealer.
#[must_use]
pub fn player_wins(player: &Hand, dealer: &Hand) -> bool {
    let player_value = player.best_value();
    let dealer_value = dealer.best_value();

    if player_value > BLACKJACK {
        false
    } else if dealer_value > BLACKJACK {
        true
    } else {
        player_value > dealer_value
    }
}
