use alloc::vec::Vec;

use crate::error::{DealerTurnError, ResolveError};
use crate::result::{DealerTurn, RoundOutcome, decide_winner};
use crate::score::BUST_THRESHOLD;

use super::state::DealerState;
use super::{Game, GameState};

/// The dealer stands once the resolved total reaches this value.
pub const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Plays out the dealer's hand under the fixed table policy.
    ///
    /// The hole card is revealed, then the dealer draws one card at a time
    /// while the ace-resolved total is below 17. A total over 21 ends the
    /// turn as [`DealerState::Busted`] with no further draws; 17 through
    /// 21 ends it as [`DealerState::Standing`].
    ///
    /// Returns the terminal state, the final total, and the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<DealerTurn, DealerTurnError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerTurnError::InvalidState);
        }

        // AwaitingReveal -> Drawing
        self.dealer.reveal_hole();

        let mut drawn = Vec::new();

        // Drawing -> Standing | Busted
        let terminal = loop {
            let total = self.dealer.value();
            if total > BUST_THRESHOLD {
                break DealerState::Busted;
            }
            if total >= DEALER_STANDS_AT {
                break DealerState::Standing;
            }

            let card = self.deck.draw().ok_or(DealerTurnError::NoCards)?;
            self.dealer.add_card(card);
            drawn.push(card);
        };

        self.state = GameState::RoundOver;

        Ok(DealerTurn {
            state: terminal,
            total: self.dealer.value(),
            drawn,
        })
    }

    /// Resolves the finished round: decides the winner, credits the win
    /// tally, and returns the game to [`GameState::Idle`].
    ///
    /// The tally is credited exactly once per round; resolving the same
    /// round twice is an invalid-state error.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over yet or was already
    /// resolved.
    pub fn resolve(&mut self) -> Result<RoundOutcome, ResolveError> {
        if self.state != GameState::RoundOver {
            return Err(ResolveError::InvalidState);
        }

        // A player bust ends the round without a dealer turn; make sure
        // the hole card is visible for the final table either way.
        self.dealer.reveal_hole();

        let player_total = self.player.value();
        let dealer_total = self.dealer.value();
        let winner = decide_winner(player_total, dealer_total);

        self.tally.record(winner);
        self.state = GameState::Idle;

        Ok(RoundOutcome {
            winner,
            player_total,
            dealer_total,
        })
    }
}
