//! Round controller and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::Tally;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_AT;
pub use state::{DealerState, GameState};

/// A single-table blackjack game: one player against the dealer.
///
/// The game owns the deck, both hands, the session win tally, and the
/// round state machine. Deck and hands are rebuilt fresh at the start of
/// every round; only the tally survives from round to round.
///
/// # Example
///
/// ```
/// use twentyone::Game;
///
/// let game = Game::new(42);
/// assert_eq!(game.tally().rounds_played(), 0);
/// ```
pub struct Game {
    /// Cards remaining this round.
    pub deck: Deck,
    /// Current round state.
    pub state: GameState,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: DealerHand,
    /// Session win counters.
    tally: Tally,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game session with the given seed and a zeroed tally.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard(&mut rng);

        Self {
            deck,
            state: GameState::Idle,
            player: Hand::new(),
            dealer: DealerHand::new(),
            tally: Tally::new(),
            rng,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns a snapshot of the session win tally.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
