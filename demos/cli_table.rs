//! CLI table example.
//!
//! Engine logs are written to stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjhouse::{
    Card, Currency, Event, GameResult, GameState, GameView, Identity, Table, TableOptions, UNIT,
};

const OWNER: Identity = Identity::new(1);
const PLAYER: Identity = Identity::new(2);
const MILLI: Currency = UNIT / 1000;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = match Table::new(OWNER, TableOptions::default(), seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Table error: {err}");
            return;
        }
    };
    if let Err(err) = table.deposit(OWNER, 5 * UNIT) {
        println!("Deposit error: {err}");
        return;
    }

    let mut seen = 0;
    loop {
        println!("\nBank: {}", format_amount(table.bank_balance()));
        let limits = format!(
            "{}-{}",
            table.min_bet() / MILLI,
            table.max_bet() / MILLI
        );
        let Some(bet) = prompt_u128(&format!("Bet in thousandths ({limits}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let game_id = match table.start_game(PLAYER, bet.saturating_mul(MILLI)) {
            Ok(game_id) => game_id,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while let Some(view) = table.game_state(game_id) {
            if view.state != GameState::PlayerTurn {
                break;
            }
            print_view(&view);

            let result = match prompt_line("Action ([h]it [s]tand): ").as_str() {
                "h" | "hit" => table.hit(game_id, PLAYER).map(|card| {
                    println!("You draw {card}.");
                }),
                "s" | "stand" => table.stand(game_id, PLAYER).map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        for record in table.events_since(seen) {
            seen = record.seq;
            print_event(&record.event);
        }

        if let Some(view) = table.game_state(game_id) {
            print_view(&view);
            match view.result {
                GameResult::None => println!("Settlement pending."),
                result => println!("{result:?}, paid {}", format_amount(view.payout)),
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u128(prompt: &str) -> Option<u128> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u128>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_view(view: &GameView) {
    let dealer = if view.state == GameState::PlayerTurn {
        format!("{} ??", format_cards(&view.dealer_cards))
    } else {
        format_cards(&view.dealer_cards)
    };
    println!("Dealer: {dealer} (value {})", view.dealer_value);
    println!(
        "You:    {} (value {}) | bet {}",
        format_cards(&view.player_cards),
        view.player_value,
        format_amount(view.bet)
    );
}

fn print_event(event: &Event) {
    match *event {
        Event::GameStarted { game_id, bet, .. } => {
            println!("  game {game_id} started, bet {}", format_amount(bet));
        }
        Event::CardDealt {
            card, is_dealer, ..
        } => {
            let to = if is_dealer { "dealer" } else { "player" };
            println!("  {card} to {to}");
        }
        Event::PlayerAction { action, .. } => println!("  player {action}"),
        Event::GameEnded { result, payout, .. } => {
            println!("  ended: {result:?}, payout {}", format_amount(payout));
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_amount(amount: Currency) -> String {
    format!("{}.{:03}", amount / UNIT, (amount % UNIT) / MILLI)
}
