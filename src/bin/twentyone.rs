//! Console blackjack.
//!
//! All game math lives in the `twentyone` library; this binary only
//! renders cards, collects hit/stand and deal-again choices, and prints
//! the running win tally.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use twentyone::{Card, Game, GameState, Suit, Winner, hand_total};

/// Delay between printed card rows.
const DRAW_SPEED: Duration = Duration::from_millis(250);

/// Rendered card width in characters.
const CARD_WIDTH: usize = 13;

fn main() {
    clear_screen();
    print_banner();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    while prompt_deal() {
        if let Err(err) = play_round(&mut game) {
            // Engine errors mean a broken round invariant; abort loudly.
            eprintln!("round aborted: {err}");
            return;
        }

        let tally = game.tally();
        print_tally(tally.dealer_wins, tally.player_wins);
        println!("\nWould you like to play again?");
    }
}

fn play_round(game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    game.new_round()?;
    game.deal_initial()?;

    // Player's initial draw
    let player_cards = game.player.cards().to_vec();
    print_pair(player_cards[0], player_cards[1]);
    println!(
        "\nYou drew the {} and the {}.\n",
        card_name(player_cards[0]),
        card_name(player_cards[1])
    );
    println!("\nYou have {} points.\n", game.player.value());

    // Dealer's initial draw, hole card face down
    let up_card = *game.dealer.up_card().ok_or("dealer has no up card")?;
    print_up_and_hole(up_card);
    println!("\nThe dealer drew the {} and a hidden card.\n", card_name(up_card));

    // Player's turn
    while game.state() == GameState::PlayerTurn {
        if prompt_hit(game.player.value()) {
            let hit = game.hit()?;
            print_single(hit.card);
            println!(
                "\nYou drew the {} and now have {} points.\n",
                card_name(hit.card),
                hit.total
            );

            if hit.busted {
                println!("\nYou bust!\n");
            } else if game.state() == GameState::DealerTurn {
                println!("\nTwenty-one!\n");
            }
        } else {
            game.stand()?;
        }
    }

    // Dealer's turn, unless the player already busted
    if game.state() == GameState::DealerTurn {
        dealers_turn(game)?;
    }

    let outcome = game.resolve()?;
    println!(
        "\nThe dealer has {} points and you have {} points.\n",
        outcome.dealer_total, outcome.player_total
    );
    print_winner_banner(outcome.winner);

    Ok(())
}

fn dealers_turn(game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nThe dealer will now take their turn.\n");

    let dealer_cards = game.dealer.cards().to_vec();
    let hole = *dealer_cards.get(1).ok_or("dealer has no hole card")?;
    print_pair(dealer_cards[0], hole);
    println!(
        "\nThe dealer reveals the {} and has a total of {} points.\n",
        card_name(hole),
        game.dealer.value()
    );

    let turn = game.dealer_play()?;

    // Replay the draws with their intermediate totals.
    let cards = game.dealer.cards();
    for (index, &card) in turn.drawn.iter().enumerate() {
        let dealt = 2 + index;
        println!(
            "\nThe dealer hits on {} points.\n",
            hand_total(&cards[..dealt])
        );
        print_single(card);
        println!(
            "\nThe dealer drew the {} and has a total of {} points.\n",
            card_name(card),
            hand_total(&cards[..=dealt])
        );
    }

    if turn.busted() {
        println!("\nThe dealer busts!\n");
    } else {
        println!("\nThe dealer stands on {} points.\n", turn.total);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Prompts

fn prompt_line(prompt: &str) -> String {
    println!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Asks whether to deal the next round. Re-prompts until the answer is a
/// recognized affirmative or negative token.
fn prompt_deal() -> bool {
    let affirm = ["d", "deal"];
    let negate = ["n", "no thanks"];

    let mut answer = prompt_line("\nPlease enter 'deal' to begin or 'no thanks' to exit: ");
    while !affirm.contains(&answer.as_str()) && !negate.contains(&answer.as_str()) {
        answer = prompt_line("\nYour input was invalid. Please enter 'd' or 'n': ");
    }

    if affirm.contains(&answer.as_str()) {
        println!("\nLet's Play!\n");
        true
    } else {
        println!("\nGoodbye!\n");
        false
    }
}

/// Asks the player to hit or stand. Re-prompts until the answer is valid.
fn prompt_hit(player_points: u8) -> bool {
    let hit = ["h", "hit"];
    let stand = ["s", "stand"];

    let mut answer = prompt_line("\nWould you like to hit or stand (h/s)?: ");
    while !hit.contains(&answer.as_str()) && !stand.contains(&answer.as_str()) {
        answer = prompt_line("\nYour input was invalid. Please enter 'h' or 's': ");
    }

    if hit.contains(&answer.as_str()) {
        println!("\nYou hit on {player_points} points!\n");
        true
    } else {
        println!("\nYou stand on {player_points} points.\n");
        false
    }
}

// ---------------------------------------------------------------------------
// Rendering

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[1;1H");
    let _ = io::stdout().flush();
}

fn print_banner() {
    let greeting = "Welcome to Blackjack!";
    println!("{}", "♣".repeat(80));
    println!("{greeting:^80}");
    println!("{}\n", "♠".repeat(80));
}

fn print_winner_banner(winner: Winner) {
    let message = match winner {
        Winner::Player => " You win! ",
        Winner::Dealer => " The dealer wins! ",
    };
    println!("\n{message:♠^80}\n");
}

fn print_tally(dealer_wins: u32, player_wins: u32) {
    println!("Dealer Wins | Player Wins\n{}", "*".repeat(25));
    println!("{dealer_wins:^12}|{player_wins:^12}");
}

fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    }
}

fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => rank.to_string(),
    }
}

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn rank_name(rank: u8) -> String {
    match rank {
        1 => "Ace".to_string(),
        11 => "Jack".to_string(),
        12 => "Queen".to_string(),
        13 => "King".to_string(),
        _ => rank.to_string(),
    }
}

fn card_name(card: Card) -> String {
    format!("{} of {}", rank_name(card.rank), suit_name(card.suit))
}

/// Renders one card as nine rows of ASCII art: an asterisk border, the
/// rank and suit in opposite corners, and the suit symbol centered.
fn ascii_card(card: Card) -> Vec<String> {
    let border = "*".repeat(CARD_WIDTH);
    let filler = format!("*{}*", " ".repeat(CARD_WIDTH - 2));
    let symbol = suit_symbol(card.suit);
    let label = rank_label(card.rank);

    // The inner width shrinks by one for the two-character "10" label.
    let pad = CARD_WIDTH - 3 - label.chars().count();
    let top = format!("*{label}{symbol}{}*", " ".repeat(pad));
    let middle = format!("*{symbol:^11}*");
    let bottom = format!("*{}{symbol}{label}*", " ".repeat(pad));

    vec![
        border.clone(),
        top,
        filler.clone(),
        filler.clone(),
        middle,
        filler.clone(),
        filler,
        bottom,
        border,
    ]
}

/// Nine all-asterisk rows: a face-down card.
fn ascii_hidden() -> Vec<String> {
    vec!["*".repeat(CARD_WIDTH); 9]
}

fn print_rows(rows: &[String]) {
    for row in rows {
        println!("{row}");
        sleep(DRAW_SPEED);
    }
}

fn side_by_side(left: &[String], right: &[String]) -> Vec<String> {
    left.iter()
        .zip(right)
        .map(|(l, r)| format!("{l}  {r}"))
        .collect()
}

fn print_pair(first: Card, second: Card) {
    print_rows(&side_by_side(&ascii_card(first), &ascii_card(second)));
}

fn print_up_and_hole(up_card: Card) {
    print_rows(&side_by_side(&ascii_card(up_card), &ascii_hidden()));
}

fn print_single(card: Card) {
    print_rows(&ascii_card(card));
}
