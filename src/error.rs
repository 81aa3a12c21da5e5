//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left.
    #[error("deck underflow: no cards left to deal")]
    EmptyDeck,
}

/// Errors that can occur while reading a hit/stand decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The input is neither `H` nor `S`.
    #[error("invalid decision {0:?}, expected 'H' or 'S'")]
    Invalid(String),
}

/// Errors that can occur while seating the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No players other than the dealer.
    #[error("at least one player is required")]
    NoPlayers,
    /// Two seats share a name.
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
    /// A player took the dealer's reserved name.
    #[error("player name {0:?} is reserved for the dealer")]
    ReservedName(String),
}

/// Errors that can occur while a game is played out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The table could not be seated.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A card could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The decision source ran dry while a player was still to act.
    #[error("no more input while waiting for {player}'s decision")]
    InputExhausted {
        /// The player who was waiting to act.
        player: String,
    },
    /// A turn was started before the seat held its opening two cards.
    #[error("{player} has not been dealt in yet")]
    NotDealt {
        /// The player whose turn was started early.
        player: String,
    },
    /// A player index does not exist at this table.
    #[error("no player at seat {0}")]
    NoSuchSeat(usize),
}
