//! Console blackjack: two players against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjcon::{Console, Deck, Game, GameOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let mut console = Console::stdio();

    console.say("Getting a new deck...");
    let mut deck = Deck::new();

    console.say("Shuffling deck...");
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let outcome = Game::with_deck(GameOptions::default(), deck)
        .map_err(bjcon::GameError::from)
        .and_then(|mut game| game.play(&mut console));

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
