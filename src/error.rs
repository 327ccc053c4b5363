//! Error types for game operations.
//!
//! Invalid-state errors mean the caller drove the round state machine out
//! of order. Empty-deck errors mean a round invariant broke: normal play
//! never comes close to exhausting a fresh 52-card deck, so the round must
//! abort rather than continue with a corrupted hand.

use thiserror::Error;

/// Errors that can occur when starting a round or dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for this operation.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerTurnError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
    /// No cards left in the deck while the dealer must draw.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid game state for resolving the round.
    #[error("invalid game state for resolving the round")]
    InvalidState,
}
