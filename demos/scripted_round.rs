//! Plays one seeded game with canned decisions and prints it like the console.

use std::io;
use std::process::ExitCode;

use bjcon::{Console, DecisionPrompt, DecisionProvider, Game, GameOptions};

/// Hits on the opening two cards and stands on anything longer.
struct HitOnce;

impl DecisionProvider for HitOnce {
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String> {
        let line = if prompt.card_count <= 2 { "H" } else { "S" };
        Some(line.into())
    }
}

fn main() -> ExitCode {
    let options = GameOptions::default().with_players(["Ann", "Ben"]);
    let mut game = match Game::new(options, 2024) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Seats that bust or hit blackjack are never asked, so each answer
    // depends only on the prompt in front of it.
    let mut table = (HitOnce, Console::new(io::empty(), io::stdout()));

    match game.play(&mut table) {
        Ok(result) => {
            let wins = result
                .players
                .iter()
                .filter(|p| p.winner_name() == Some(p.player.as_str()))
                .count();
            println!("{wins} of {} players beat the dealer.", result.players.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Game stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
