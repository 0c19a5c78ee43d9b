//! Error types for game operations.

use thiserror::Error;

use crate::hand::MAX_HAND_SIZE;

/// A card was added to a hand that is already at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hand already holds {max} cards", max = MAX_HAND_SIZE)]
pub struct HandFull;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is outside the table limits.
    #[error("bet of {amount} is outside the table limits {min}..={max}")]
    OutOfRange {
        /// The rejected amount.
        amount: u32,
        /// Smallest accepted bet.
        min: u32,
        /// Largest accepted bet.
        max: u32,
    },
    /// A bet has already been placed this round.
    #[error("a bet has already been placed this round")]
    AlreadyPlaced,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// A hand could not take the dealt card.
    #[error(transparent)]
    HandFull(#[from] HandFull),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The bet has already been doubled this round.
    #[error("the bet has already been doubled")]
    AlreadyDoubled,
    /// Doubling would overflow the bet amount.
    #[error("the doubled bet does not fit the bet amount type")]
    BetOverflow,
    /// The player's hand could not take another card.
    #[error(transparent)]
    HandFull(#[from] HandFull),
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The dealer's hand could not take another card.
    #[error(transparent)]
    HandFull(#[from] HandFull),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is still in progress.
    #[error("a round is still in progress")]
    InvalidState,
}

/// Errors produced when parsing collaborator answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Answer to "play a round?" was neither yes nor no.
    #[error("expected y or n")]
    UnknownAnswer,
    /// Bet answer was not a number.
    #[error("bet must be a number")]
    NotANumber,
    /// Bet answer was a number outside the table limits.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Action answer was not hit, stand, or double.
    #[error("expected 1 (hit), 2 (stand), or 3 (double)")]
    UnknownAction,
}

/// Errors that abort a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Starting a round failed.
    #[error("reshuffle failed: {0}")]
    Reshuffle(#[from] ReshuffleError),
    /// Placing the bet failed.
    #[error("bet failed: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}
