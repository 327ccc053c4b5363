//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    ActionError, Card, DECK_SIZE, DealError, DealerState, DealerTurnError, Deck, Game, GameState,
    HandStatus, ResolveError, Suit, Winner, decide_winner, hand_total, resolve_aces,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Rigs the deck so that cards come out in the listed order. The initial
/// deal draws player, dealer up, player, dealer hole, then hits and dealer
/// draws follow one by one.
fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    game.deck = Deck::from_cards(deck);
}

fn start_round(game: &mut Game, draws: &[Card]) {
    game.new_round().unwrap();
    set_deck_from_draws(game, draws);
    game.deal_initial().unwrap();
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::standard(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn dealing_keeps_deck_and_hands_disjoint() {
    let mut game = Game::new(42);
    game.new_round().unwrap();
    game.deal_initial().unwrap();

    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(game.player.len(), 2);
    assert_eq!(game.dealer.len(), 2);

    for &drawn in game.player.cards().iter().chain(game.dealer.cards()) {
        assert!(!game.deck.contains(drawn));
    }
}

#[test]
fn ace_resolution() {
    // Two aces and a ten: the first conversion leaves 22, so the check
    // re-applies and the second ace converts too.
    let pair_of_aces = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Clubs, 10),
    ];
    assert_eq!(hand_total(&pair_of_aces), 12);

    // Ace + King is 21 without any conversion.
    let natural = [card(Suit::Hearts, 1), card(Suit::Spades, 13)];
    assert_eq!(hand_total(&natural), 21);

    // No aces: the total is untouched.
    let plain = [card(Suit::Hearts, 10), card(Suit::Spades, 9)];
    assert_eq!(hand_total(&plain), 19);
}

#[test]
fn resolve_aces_converts_everything_on_unavoidable_bust() {
    // Four aces and two face cards: every ace drops to 1 and the hand
    // still stands at 24.
    let points = [11, 11, 11, 11, 10, 10];
    assert_eq!(resolve_aces(64, &points), 24);
}

#[test]
fn hand_total_is_idempotent() {
    let cards = [
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 9),
    ];
    let first = hand_total(&cards);
    assert_eq!(hand_total(&cards), first);
    assert_eq!(hand_total(&cards), 15);
}

#[test]
fn dealer_stands_on_17() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 9),   // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    game.stand().unwrap();
    let turn = game.dealer_play().unwrap();

    assert_eq!(turn.state, DealerState::Standing);
    assert_eq!(turn.total, 17);
    assert!(turn.drawn.is_empty());
}

#[test]
fn dealer_hits_below_17() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 9),   // player
            card(Suit::Diamonds, 6), // dealer hole (16)
            card(Suit::Hearts, 5),   // dealer draw (21)
        ],
    );

    game.stand().unwrap();
    let turn = game.dealer_play().unwrap();

    assert_eq!(turn.state, DealerState::Standing);
    assert_eq!(turn.total, 21);
    assert_eq!(turn.drawn.len(), 1);
}

#[test]
fn dealer_stops_drawing_on_bust() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 9),    // player
            card(Suit::Clubs, 10),    // dealer up
            card(Suit::Spades, 9),    // player
            card(Suit::Diamonds, 6),  // dealer hole (16)
            card(Suit::Hearts, 10),   // dealer draw (26, bust)
            card(Suit::Clubs, 2),     // must never be drawn
        ],
    );

    game.stand().unwrap();
    let turn = game.dealer_play().unwrap();

    assert_eq!(turn.state, DealerState::Busted);
    assert!(turn.busted());
    assert_eq!(turn.total, 26);
    assert_eq!(turn.drawn.len(), 1);
    assert!(game.deck.contains(card(Suit::Clubs, 2)));
}

#[test]
fn outcome_decision_table() {
    // Equal totals go to the house.
    assert_eq!(decide_winner(21, 21), Winner::Dealer);
    // A busted player loses whatever the dealer holds.
    assert_eq!(decide_winner(22, 18), Winner::Dealer);
    // A busted dealer loses to any standing player.
    assert_eq!(decide_winner(20, 22), Winner::Player);
    assert_eq!(decide_winner(18, 19), Winner::Dealer);
    assert_eq!(decide_winner(19, 18), Winner::Player);
}

#[test]
fn player_bust_skips_dealer_and_resolves_for_dealer() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 9),   // player (19)
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 5),   // player hit (24, bust)
        ],
    );

    let hit = game.hit().unwrap();
    assert!(hit.busted);
    assert_eq!(hit.total, 24);
    assert_eq!(game.player.status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::RoundOver);

    // The dealer never plays after a player bust.
    assert_eq!(
        game.dealer_play().unwrap_err(),
        DealerTurnError::InvalidState
    );

    let outcome = game.resolve().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(game.dealer.len(), 2);
}

#[test]
fn hitting_to_21_passes_play_to_dealer() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 9),   // player (19)
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 2),   // player hit (21)
        ],
    );

    let hit = game.hit().unwrap();
    assert!(!hit.busted);
    assert_eq!(hit.total, 21);
    assert_eq!(game.player.status(), HandStatus::Stand);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn dealt_21_stands_immediately() {
    let mut game = Game::new(1);
    game.new_round().unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 1),   // player (ace)
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 13),  // player (king, 21)
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 8),   // dealer draw
        ],
    );
    game.deal_initial().unwrap();

    assert_eq!(game.player.value(), 21);
    assert_eq!(game.player.status(), HandStatus::Stand);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn hole_card_stays_hidden_until_dealer_turn() {
    let mut game = Game::new(1);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 9),   // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert!(!game.dealer.is_hole_revealed());
    assert_eq!(game.dealer.visible_value(), 10);

    game.stand().unwrap();
    game.dealer_play().unwrap();

    assert!(game.dealer.is_hole_revealed());
    assert_eq!(game.dealer.visible_value(), 17);
}

#[test]
fn tally_counts_every_round_exactly_once() {
    let mut game = Game::new(9);

    // Round 1: player stands on 19 against a dealer 17. Player wins.
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 9),   // player (19)
            card(Suit::Diamonds, 7), // dealer hole (17)
        ],
    );
    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.resolve().unwrap().winner, Winner::Player);

    // Round 2: push at 17, which the house takes.
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 8),   // player (17)
            card(Suit::Diamonds, 7), // dealer hole (17)
        ],
    );
    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.resolve().unwrap().winner, Winner::Dealer);

    // Round 3: player busts.
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 9),   // player (19)
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 5),   // player hit (bust)
        ],
    );
    game.hit().unwrap();
    assert_eq!(game.resolve().unwrap().winner, Winner::Dealer);

    let tally = game.tally();
    assert_eq!(tally.player_wins, 1);
    assert_eq!(tally.dealer_wins, 2);
    assert_eq!(tally.rounds_played(), 3);
}

#[test]
fn fresh_deck_every_round() {
    let mut game = Game::new(5);
    game.new_round().unwrap();
    game.deal_initial().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.resolve().unwrap();

    game.new_round().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.player.is_empty());
    assert!(game.dealer.is_empty());
}

#[test]
fn state_machine_rejects_out_of_order_calls() {
    let mut game = Game::new(2);

    assert_eq!(game.deal_initial().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.dealer_play().unwrap_err(),
        DealerTurnError::InvalidState
    );
    assert_eq!(game.resolve().unwrap_err(), ResolveError::InvalidState);

    game.new_round().unwrap();
    assert_eq!(game.new_round().unwrap_err(), DealError::InvalidState);
}

#[test]
fn resolve_credits_tally_only_once() {
    let mut game = Game::new(2);
    game.new_round().unwrap();
    game.deal_initial().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    game.resolve().unwrap();
    assert_eq!(game.resolve().unwrap_err(), ResolveError::InvalidState);
    assert_eq!(game.tally().rounds_played(), 1);
}

#[test]
fn deal_with_depleted_deck_fails_loudly() {
    let mut game = Game::new(2);
    game.new_round().unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );

    assert_eq!(game.deal_initial().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn hit_with_empty_deck_fails_loudly() {
    let mut game = Game::new(7);
    start_round(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 6),   // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
}
