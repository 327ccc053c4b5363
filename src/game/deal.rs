use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::HandStatus;
use crate::score::BUST_THRESHOLD;

use super::{Game, GameState};

/// Cards needed for the initial deal: two each for player and dealer.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Starts a new round: builds a fresh shuffled 52-card deck and clears
    /// both hands.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn new_round(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Idle {
            return Err(DealError::InvalidState);
        }

        self.deck = Deck::standard(&mut self.rng);
        self.player.clear();
        self.dealer.clear();
        self.state = GameState::Dealing;

        Ok(())
    }

    /// Deals the initial two cards each to the player and the dealer,
    /// alternating, with the dealer's second card face down.
    ///
    /// If the player is dealt 21 outright there is nothing left to decide:
    /// the hand stands and play passes straight to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been started or fewer than four
    /// cards remain in the deck.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        let player_first = self.draw_checked()?;
        let dealer_up = self.draw_checked()?;
        let player_second = self.draw_checked()?;
        let dealer_hole = self.draw_checked()?;

        self.player.add_card(player_first);
        self.player.add_card(player_second);
        self.dealer.add_card(dealer_up);
        self.dealer.add_card(dealer_hole);

        if self.player.value() == BUST_THRESHOLD {
            self.player.set_status(HandStatus::Stand);
            self.state = GameState::DealerTurn;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(())
    }

    fn draw_checked(&mut self) -> Result<Card, DealError> {
        self.deck.draw().ok_or(DealError::NotEnoughCards)
    }
}
