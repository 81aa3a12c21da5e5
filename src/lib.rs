//! A turn-by-turn console blackjack game.
//!
//! A fixed table of players faces the dealer with a single 52-card deck. Each
//! seat is dealt two cards and then hits or stands until it busts, stands,
//! hits blackjack, or holds five cards. Every player is then compared to the
//! dealer.
//!
//! The rule engine never touches the terminal: decisions come from a
//! [`DecisionProvider`] and everything that happens is sent to a [`Reporter`].
//! The [`console`] module wires both to stdin and stdout.
//!
//! # Example
//!
//! ```
//! use bjcon::{Game, GameEvent, GameOptions, ScriptedDecisions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let decisions = ScriptedDecisions::new(["S", "S", "S"]);
//! let mut table = (decisions, Vec::<GameEvent>::new());
//! let result = game.play(&mut table).unwrap();
//! assert_eq!(result.players.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod decision;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod player;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use decision::{Decision, DecisionPrompt, DecisionProvider, ScriptedDecisions};
pub use deck::Deck;
pub use error::{DealError, DecisionError, GameError, SetupError};
pub use game::{Game, GameEvent, Reporter};
pub use hand::{Hand, is_blackjack, is_busted, score};
pub use options::GameOptions;
pub use outcome::{Outcome, PlayerResult, RoundResult, calculate_outcome, winner};
pub use player::{Player, TurnState};
