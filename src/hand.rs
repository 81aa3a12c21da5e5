//! Hand scoring and the hand representation.

use alloc::vec::Vec;

use crate::card::Card;

/// The best possible score; anything above it is bust.
pub const BLACKJACK: u8 = 21;

/// Ace value in a hand of one or two cards.
const ACE_HIGH: u8 = 11;
/// First Ace value tried in a three-card hand.
const ACE_THREE_CARD: u8 = 10;
/// Ace value once the high value would bust, and in hands of four or more.
const ACE_LOW: u8 = 1;

fn total_with_ace(cards: &[Card], ace: u8) -> u8 {
    cards.iter().fold(0u8, |total, card| {
        total.saturating_add(card.rank.fixed_points().unwrap_or(ace))
    })
}

/// Computes the point total of a hand.
///
/// Aces are valued by hand size, not by searching every combination:
/// two cards or fewer count an Ace as 11; three cards try 10 and fall back to 1
/// if that busts; four or more always count 1. Every Ace in the hand takes the
/// same value.
///
/// ```
/// use bjcon::{Card, Rank, Suit, hand::score};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Seven, Suit::Clubs),
/// ];
/// assert_eq!(score(&cards), 13);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let points = match cards.len() {
        0..=2 => total_with_ace(cards, ACE_HIGH),
        3 => {
            let high = total_with_ace(cards, ACE_THREE_CARD);
            if high > BLACKJACK {
                total_with_ace(cards, ACE_LOW)
            } else {
                high
            }
        }
        _ => total_with_ace(cards, ACE_LOW),
    };
    tracing::trace!(cards = cards.len(), points, "scored hand");
    points
}

/// Returns whether the hand scores over 21.
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Returns whether the hand is exactly two cards scoring 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

/// A hand of dealt cards with its derived score.
///
/// The score, bust and blackjack flags are recomputed on every
/// [`add_card`](Self::add_card) and cannot be set any other way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    points: u8,
    busted: bool,
    blackjack: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            points: 0,
            busted: false,
            blackjack: false,
        }
    }

    /// Adds a card to the hand and re-derives its state.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.points = score(&self.cards);
        self.busted = is_busted(&self.cards);
        self.blackjack = is_blackjack(&self.cards);
    }

    /// Returns the cards in the hand, in the order dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the hand's point total.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.blackjack
    }

    /// Returns the number of Aces held.
    #[must_use]
    pub fn ace_count(&self) -> usize {
        self.cards.iter().filter(|c| c.rank.is_ace()).count()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    #[test]
    fn two_card_ace_counts_eleven() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Six])), 17);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 22);
        assert!(is_busted(&cards(&[Rank::Ace, Rank::Ace])));
    }

    #[test]
    fn three_card_ace_tries_ten_first() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Five, Rank::Four])), 19);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::King, Rank::Two])), 13);
        // Both Aces fall back together.
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Queen, Rank::Ace])), 12);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 11);
    }

    #[test]
    fn four_cards_count_aces_low() {
        let hand = cards(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four]);
        assert_eq!(score(&hand), 10);
    }

    #[test]
    fn hand_rederives_state_on_every_card() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hand.points(), 11);
        assert!(!hand.is_blackjack());

        hand.add_card(Card::new(Rank::Jack, Suit::Hearts));
        assert_eq!(hand.points(), 21);
        assert!(hand.is_blackjack());

        hand.add_card(Card::new(Rank::Five, Suit::Hearts));
        assert_eq!(hand.points(), 16);
        assert!(!hand.is_blackjack());
        assert!(!hand.is_busted());

        hand.add_card(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(hand.points(), 26);
        assert!(hand.is_busted());
        assert_eq!(hand.ace_count(), 1);
    }
}
