//! The dealing deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck, dealt from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suit-major, rank-minor.
    ///
    /// ```
    /// use bjcon::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.peek_top(), Some(&Card::new(Rank::Ace, Suit::Clubs)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, first element on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }

    /// Creates a canonical deck shuffled with a seeded RNG.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    /// Permutes the cards uniformly at random in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_top(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::EmptyDeck)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_is_canonical() {
        let deck = Deck::new();
        let cards: Vec<Card> = deck.iter().copied().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::King, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        assert_eq!(Deck::shuffled(42), Deck::shuffled(42));
        assert_ne!(Deck::shuffled(42), Deck::new());
    }

    #[test]
    fn deal_top_takes_the_first_card() {
        let mut deck = Deck::shuffled(7);
        let top = *deck.peek_top().unwrap();
        assert_eq!(deck.deal_top(), Ok(top));
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn empty_deck_underflows() {
        let mut deck = Deck::from_cards(alloc::vec![Card::new(Rank::Two, Suit::Hearts)]);
        assert!(deck.deal_top().is_ok());
        assert!(deck.is_empty());
        assert_eq!(deck.deal_top(), Err(DealError::EmptyDeck));
    }
}
