//! Game session: the deck, the seated players, and the options.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;

mod events;
mod turns;

pub use events::{GameEvent, Reporter};

/// A single game of blackjack, from the first card to the results.
///
/// The game owns the deck and every seat. Players act in seat order and the
/// dealer always sits last.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    options: GameOptions,
}

impl Game {
    /// Creates a game with a canonical deck shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster in `options` is empty, repeats a name,
    /// or seats a player under the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 3);
    /// assert_eq!(game.dealer().name(), "Dealer");
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::with_deck(options, deck)
    }

    /// Creates a game that deals from `deck` as given.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, SetupError> {
        let players = Self::seat_players(&options)?;
        debug!(seats = players.len(), cards = deck.len(), "table seated");
        Ok(Self {
            deck,
            players,
            options,
        })
    }

    fn seat_players(options: &GameOptions) -> Result<Vec<Player>, SetupError> {
        if options.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        let mut players = Vec::with_capacity(options.players.len() + 1);
        for name in &options.players {
            if *name == options.dealer_name {
                return Err(SetupError::ReservedName(name.clone()));
            }
            if players.iter().any(|p: &Player| p.name() == name) {
                return Err(SetupError::DuplicateName(name.clone()));
            }
            players.push(Player::new(name.clone()));
        }
        players.push(Player::new(options.dealer_name.clone()));

        Ok(players)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck still to be dealt.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns every seat in turn order, dealer last.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub fn dealer(&self) -> &Player {
        &self.players[self.dealer_seat()]
    }

    /// Returns the index of the dealer's seat.
    #[must_use]
    pub fn dealer_seat(&self) -> usize {
        self.players.len() - 1
    }

    /// Looks up a seat by player name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Deals the top card to the player at `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoSuchSeat`] for an unknown seat, or
    /// [`GameError::Deal`] if the deck is empty. Neither changes any state.
    pub fn deal_to<R: Reporter + ?Sized>(
        &mut self,
        seat: usize,
        reporter: &mut R,
    ) -> Result<Card, GameError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::NoSuchSeat(seat))?;
        let card = self.deck.deal_top().inspect_err(|_| {
            warn!(player = player.name(), "deck underflow");
        })?;

        player.add_card(card);
        debug!(
            player = player.name(),
            card = %card,
            points = player.points(),
            remaining = self.deck.len(),
            "dealt card"
        );

        reporter.report(&GameEvent::CardDealt {
            player: player.name().into(),
            card_index: player.card_count(),
            card,
            points: player.points(),
            blackjack: player.is_blackjack(),
            busted: player.is_busted(),
        });

        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DECK_SIZE, Rank, Suit};
    use crate::error::DealError;

    #[test]
    fn roster_validation() {
        let empty = GameOptions::default().with_players(Vec::<&str>::new());
        assert_eq!(Game::new(empty, 1).unwrap_err(), SetupError::NoPlayers);

        let dup = GameOptions::default().with_players(["Ann", "Ann"]);
        assert_eq!(
            Game::new(dup, 1).unwrap_err(),
            SetupError::DuplicateName("Ann".into())
        );

        let reserved = GameOptions::default().with_players(["Ann", "Dealer"]);
        assert_eq!(
            Game::new(reserved, 1).unwrap_err(),
            SetupError::ReservedName("Dealer".into())
        );
    }

    #[test]
    fn dealer_sits_last() {
        let game = Game::new(GameOptions::default(), 3).unwrap();
        let names: Vec<&str> = game.players().iter().map(Player::name).collect();
        assert_eq!(names, ["Alan", "Bob", "Dealer"]);
        assert_eq!(game.deck().len(), DECK_SIZE);
    }

    #[test]
    fn deal_moves_the_top_card() {
        let mut game = Game::new(GameOptions::default(), 9).unwrap();
        let top = *game.deck().peek_top().unwrap();
        let mut events: Vec<GameEvent> = Vec::new();

        assert_eq!(game.deal_to(1, &mut events), Ok(top));
        assert_eq!(game.deck().len(), DECK_SIZE - 1);
        assert_eq!(game.players()[1].cards(), [top]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn empty_deck_and_bad_seat_leave_state_alone() {
        let deck = Deck::from_cards(alloc::vec![Card::new(Rank::Five, Suit::Clubs)]);
        let mut game = Game::with_deck(GameOptions::default(), deck).unwrap();

        assert_eq!(game.deal_to(7, &mut ()), Err(GameError::NoSuchSeat(7)));
        assert_eq!(game.deck().len(), 1);

        game.deal_to(0, &mut ()).unwrap();
        assert_eq!(
            game.deal_to(0, &mut ()),
            Err(GameError::Deal(DealError::EmptyDeck))
        );
        assert_eq!(game.players()[0].card_count(), 1);
    }
}
