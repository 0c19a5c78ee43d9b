//! A single-deck blackjack engine for one player against the dealer, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time through
//! betting, dealing, the player turn, the dealer turn, and settlement against
//! a [`Bankroll`]. A [`Session`] drives successive rounds from an [`Input`]
//! and reports them to a [`Presenter`].
//!
//! # Example
//!
//! ```
//! use bjsolo::{Bankroll, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut bankroll = Bankroll::new();
//!
//! game.start_round().unwrap();
//! game.bet(5).unwrap();
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.settle(&mut bankroll).unwrap();
//! assert_eq!(result.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, HandFull, InputError, ReshuffleError, SessionError,
    ShowdownError,
};
pub use game::{Action, Game, GameState};
pub use hand::{BLACKJACK, Hand, MAX_HAND_SIZE, player_wins};
pub use options::GameOptions;
pub use result::{HandOutcome, RoundResult};
pub use session::{Input, Presenter, Prompt, Session};
