//! A single-table blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one player against the
//! dealer: a fresh 52-card deck every round, ace-resolved hand scoring,
//! the fixed stand-on-17 dealer policy, win determination, and a session
//! win tally. Presentation (prompts, card art) lives in the `twentyone`
//! binary and consumes only this API.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! let _ = game.new_round();
//! let _ = game.deal_initial();
//! assert_ne!(game.state(), GameState::Idle);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DealerTurnError, ResolveError};
pub use game::{DEALER_STANDS_AT, DealerState, Game, GameState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use result::{DealerTurn, HitResult, RoundOutcome, Tally, Winner, decide_winner};
pub use score::{BUST_THRESHOLD, base_points, hand_total, resolve_aces};
