//! Seated players, the dealer included.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// Where a player stands in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Fewer than two cards; the initial deal is still running.
    Dealing,
    /// Holding cards and still able to hit or stand.
    AwaitingDecision,
    /// The player chose to stand.
    Standing,
    /// The hand scores over 21.
    Busted,
    /// The hand is a two-card 21.
    Blackjack,
    /// The hand reached the card limit.
    Done,
}

impl TurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Dealing | Self::AwaitingDecision)
    }
}

/// A named seat and the hand dealt to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    standing: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            standing: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards dealt so far.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Deals a card into the player's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Marks the player as standing.
    pub const fn stand(&mut self) {
        self.standing = true;
    }

    /// Returns the hand's point total.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.hand.points()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub const fn has_moves(&self) -> bool {
        !(self.is_blackjack() || self.is_busted() || self.standing)
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Reports the player's turn state given the hand-size limit.
    ///
    /// Blackjack and bust take precedence over standing; the card limit is
    /// checked last since it only ends a turn that has moves left.
    #[must_use]
    pub fn turn_state(&self, max_cards: usize) -> TurnState {
        if self.is_blackjack() {
            TurnState::Blackjack
        } else if self.is_busted() {
            TurnState::Busted
        } else if self.standing {
            TurnState::Standing
        } else if self.card_count() >= max_cards {
            TurnState::Done
        } else if self.card_count() < 2 {
            TurnState::Dealing
        } else {
            TurnState::AwaitingDecision
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn turn_state_follows_the_hand() {
        let mut player = Player::new("Alan");
        assert_eq!(player.turn_state(5), TurnState::Dealing);

        player.add_card(Card::new(Rank::Nine, Suit::Clubs));
        player.add_card(Card::new(Rank::Seven, Suit::Hearts));
        assert_eq!(player.turn_state(5), TurnState::AwaitingDecision);
        assert!(player.has_moves());

        player.stand();
        assert_eq!(player.turn_state(5), TurnState::Standing);
        assert!(!player.has_moves());
    }

    #[test]
    fn card_limit_ends_the_turn() {
        let mut player = Player::new("Bob");
        for rank in [Rank::Two, Rank::Two, Rank::Three, Rank::Three, Rank::Four] {
            player.add_card(Card::new(rank, Suit::Spades));
        }
        assert!(player.has_moves());
        assert_eq!(player.turn_state(5), TurnState::Done);
        assert!(TurnState::Done.is_terminal());
    }

    #[test]
    fn natural_is_blackjack_state() {
        let mut player = Player::new("Dealer");
        player.add_card(Card::new(Rank::Ace, Suit::Clubs));
        player.add_card(Card::new(Rank::King, Suit::Clubs));
        assert_eq!(player.turn_state(5), TurnState::Blackjack);
    }
}
