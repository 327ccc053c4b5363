//! Deck construction and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};

/// A single 52-card deck.
///
/// A fresh deck is built (and shuffled) at the start of every round and
/// discarded at round end. Drawing removes a card permanently: a drawn
/// card never reappears in the deck for the remainder of the round.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards remaining, drawn from the back.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck, one card per (suit, rank) pair, and
    /// shuffles it with the given generator.
    ///
    /// Shuffling up front and drawing from the back is a uniform draw
    /// without replacement.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck with an explicit card order.
    ///
    /// Cards are drawn from the back of the list. Useful for constructing
    /// rigged decks in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws one card, or `None` if the deck is empty.
    ///
    /// An empty deck indicates a broken round invariant: at most about 20
    /// of the 52 cards are drawn per round in normal play.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards remaining in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still contains the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}
