//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{self, BUST_THRESHOLD};

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandStatus {
    /// Hand is active and can draw further cards.
    #[default]
    Active,
    /// The hand has stood on its current total.
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// The player's hand.
///
/// A hand only grows within a round: cards move from the deck into the
/// hand and never back.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand, marking the hand bust if the resolved
    /// total exceeds 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.value() > BUST_THRESHOLD {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Calculates the ace-resolved value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::hand_total(&self.cards)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_THRESHOLD
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

/// The dealer's hand.
///
/// The second card dealt (the hole card) stays hidden from the player
/// until the dealer's turn begins.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card if the hole card is
    /// still hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, Card::point_value)
        }
    }

    /// Calculates the ace-resolved value of the full hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::hand_total(&self.cards)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_THRESHOLD
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
