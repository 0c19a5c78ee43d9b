//! A single 52-card deck with draw-from-top semantics.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};

/// An ordered deck of unique cards.
///
/// The backing array always holds all 52 identifiers. Only the first
/// `remaining` slots are still in the deck; the top card is the one at
/// index `remaining - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Backing sequence of every card in the deck.
    cards: [Card; DECK_SIZE],
    /// Number of cards not yet drawn.
    remaining: usize,
}

impl Deck {
    /// Creates a full, unshuffled deck with identifiers in ascending order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: core::array::from_fn(|id| Card::new(id as u8)),
            remaining: DECK_SIZE,
        }
    }

    /// Creates a full deck whose first draws are `draws`, in order.
    ///
    /// The remaining cards follow in ascending order. Returns `None` if
    /// `draws` repeats a card, contains an identifier outside `0..52`, or
    /// holds more than 52 cards.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Option<Self> {
        if draws.len() > DECK_SIZE {
            return None;
        }

        let mut deck = Self::new();
        for (drawn, card) in draws.iter().enumerate() {
            let target = DECK_SIZE - 1 - drawn;
            let position = deck.cards[..=target].iter().position(|c| c == card)?;
            deck.cards.swap(position, target);
        }
        Some(deck)
    }

    /// Restores all 52 cards in ascending order.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Shuffles the full backing sequence in place.
    ///
    /// Every slot takes part regardless of how many cards remain, so this is
    /// normally called right after [`Deck::reset`].
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// Returns `None` and leaves the deck untouched when no cards remain.
    pub fn draw(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.cards[self.remaining])
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.remaining]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
