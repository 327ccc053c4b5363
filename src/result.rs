//! Round outcome types and the win tally.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::state::DealerState;
use crate::score::BUST_THRESHOLD;

/// The winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
}

/// Decides the winner from the two final totals.
///
/// The rules, in precedence order:
/// 1. Player over 21: dealer wins, whatever the dealer holds.
/// 2. Equal totals: dealer wins. This table resolves a push in the house's
///    favor rather than as a tie, a deliberate deviation from standard
///    blackjack.
/// 3. Player below dealer: dealer wins unless the dealer busted.
/// 4. Otherwise the player wins.
///
/// # Example
///
/// ```
/// use twentyone::{Winner, decide_winner};
///
/// assert_eq!(decide_winner(21, 21), Winner::Dealer);
/// assert_eq!(decide_winner(20, 22), Winner::Player);
/// ```
#[must_use]
pub const fn decide_winner(player_total: u8, dealer_total: u8) -> Winner {
    if player_total > BUST_THRESHOLD {
        Winner::Dealer
    } else if dealer_total == player_total {
        Winner::Dealer
    } else if player_total < dealer_total {
        if dealer_total <= BUST_THRESHOLD {
            Winner::Dealer
        } else {
            Winner::Player
        }
    } else {
        Winner::Player
    }
}

/// Result of a single player hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// The card drawn.
    pub card: Card,
    /// The new ace-resolved hand total.
    pub total: u8,
    /// Whether the hit busted the hand.
    pub busted: bool,
}

/// Summary of the dealer's completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerTurn {
    /// The terminal state the dealer policy reached.
    pub state: DealerState,
    /// The dealer's final ace-resolved total.
    pub total: u8,
    /// Cards the dealer drew, in order.
    pub drawn: Vec<Card>,
}

impl DealerTurn {
    /// Returns whether the dealer busted.
    #[must_use]
    pub fn busted(&self) -> bool {
        self.state == DealerState::Busted
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The winner of the round.
    pub winner: Winner,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

/// Running win counters for one table session.
///
/// The tally is owned by the [`Game`](crate::Game) and lives for the whole
/// session: it is incremented exactly once per completed round and reset
/// only by starting a new session.
///
/// # Example
///
/// ```
/// use twentyone::{Tally, Winner};
///
/// let mut tally = Tally::new();
/// tally.record(Winner::Player);
/// tally.record(Winner::Dealer);
/// assert_eq!((tally.player_wins, tally.dealer_wins), (1, 1));
/// assert_eq!(tally.rounds_played(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
}

impl Tally {
    /// Creates a zeroed tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    /// Adds one win to the winner's counter.
    pub const fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
        }
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.player_wins + self.dealer_wins
    }
}
