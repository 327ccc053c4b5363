use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::HitResult;
use crate::score::BUST_THRESHOLD;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw one card).
    ///
    /// A bust ends the round immediately (the dealer does not play). A
    /// total of exactly 21 stands the hand and passes play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<HitResult, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        let total = self.player.value();
        let busted = self.player.status() == HandStatus::Bust;

        if busted {
            self.state = GameState::RoundOver;
        } else if total == BUST_THRESHOLD {
            self.player.set_status(HandStatus::Stand);
            self.state = GameState::DealerTurn;
        }

        Ok(HitResult {
            card,
            total,
            busted,
        })
    }

    /// Player action: Stand (finalize the hand and pass play to the
    /// dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.player.set_status(HandStatus::Stand);
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
