//! Game and dealer state types.

/// Round state.
///
/// A round moves `Idle -> Dealing -> PlayerTurn -> DealerTurn -> RoundOver`
/// and back to `Idle` once resolved. A player bust skips the dealer's turn
/// and goes straight to `RoundOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress.
    Idle,
    /// A fresh deck is built and the initial deal is pending.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome can be resolved.
    RoundOver,
}

/// Dealer policy state.
///
/// The dealer has no choice logic: after revealing the hole card the
/// policy draws while the total is below 17, then terminates in either
/// `Standing` or `Busted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Hole card not yet revealed.
    AwaitingReveal,
    /// Total below 17, the dealer must draw.
    Drawing,
    /// Terminal: total between 17 and 21.
    Standing,
    /// Terminal: total over 21.
    Busted,
}
