//! Hand scoring and ace revaluation.
//!
//! Scoring happens in two steps: every card contributes its base point
//! value (aces at 11), then [`resolve_aces`] converts aces from 11 to 1,
//! one at a time, until the total no longer exceeds [`BUST_THRESHOLD`] or
//! no convertible ace remains.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A hand total above this value is a bust.
pub const BUST_THRESHOLD: u8 = 21;

/// Returns the base point contribution of each card, in hand order.
///
/// Aces always contribute 11 at this stage.
#[must_use]
pub fn base_points(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(Card::point_value).collect()
}

fn sum_points(points: &[u8]) -> u8 {
    points.iter().fold(0u8, |sum, &p| sum.saturating_add(p))
}

/// Revalues aces from 11 to 1 until the total is at most [`BUST_THRESHOLD`].
///
/// `total` must be the sum of `points`, the per-card contributions of the
/// hand being scored. Each iteration converts exactly one ace, recomputes
/// the total from the adjusted list, and re-checks the threshold, so no
/// more aces are converted than the bust requires. The loop is bounded by
/// the number of aces in the hand (at most four).
///
/// After this function either the returned total is `<= 21`, or every ace
/// has been converted and the bust is unavoidable.
///
/// # Example
///
/// ```
/// use twentyone::score::resolve_aces;
///
/// // Ace + Ace + 10: both aces must drop to 1.
/// assert_eq!(resolve_aces(32, &[11, 11, 10]), 12);
/// // Ace + King is 21 already, nothing to convert.
/// assert_eq!(resolve_aces(21, &[11, 10]), 21);
/// ```
#[must_use]
pub fn resolve_aces(total: u8, points: &[u8]) -> u8 {
    let mut points = points.to_vec();
    let mut total = total;

    while total > BUST_THRESHOLD {
        let Some(ace) = points.iter().position(|&p| p == 11) else {
            break;
        };
        points[ace] = 1;
        total = sum_points(&points);
    }

    total
}

/// Calculates the ace-resolved total of a hand.
///
/// This is a pure function of the hand contents: calling it repeatedly on
/// an unmodified hand always returns the same value.
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    let points = base_points(cards);
    resolve_aces(sum_points(&points), &points)
}
