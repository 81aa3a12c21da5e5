//! Events emitted while a game is played.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::outcome::PlayerResult;
use crate::player::TurnState;

/// Something observable that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A card was dealt to a player.
    CardDealt {
        /// The receiving player.
        player: String,
        /// 1-based position of the card in the hand.
        card_index: usize,
        /// The card dealt.
        card: Card,
        /// Points after the card.
        points: u8,
        /// Blackjack after the card.
        blackjack: bool,
        /// Bust after the card.
        busted: bool,
    },
    /// Input other than `H` or `S` was rejected.
    InvalidDecision {
        /// The player being asked.
        player: String,
        /// What was entered.
        input: String,
    },
    /// A player chose to stand.
    Stood {
        /// The standing player.
        player: String,
    },
    /// A player's turn is over.
    TurnEnded {
        /// The player.
        player: String,
        /// Why the turn ended.
        state: TurnState,
    },
    /// All turns are over; results follow.
    Resolving,
    /// One player's result against the dealer.
    Resolved(PlayerResult),
}

/// Receives game events as they happen.
pub trait Reporter {
    /// Handles one event.
    fn report(&mut self, event: &GameEvent);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: &GameEvent) {
        (**self).report(event);
    }
}

/// A reporter paired with a decision provider.
impl<D, R: Reporter> Reporter for (D, R) {
    fn report(&mut self, event: &GameEvent) {
        self.1.report(event);
    }
}

/// Records every event, in order.
impl Reporter for Vec<GameEvent> {
    fn report(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
impl Reporter for () {
    fn report(&mut self, _event: &GameEvent) {}
}
