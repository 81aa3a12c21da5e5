use tracing::{debug, instrument, warn};

use crate::decision::{Decision, DecisionPrompt, DecisionProvider};
use crate::error::{DecisionError, GameError};
use crate::outcome::{RoundResult, calculate_outcome};
use crate::player::TurnState;

use super::{Game, GameEvent, Reporter};

impl Game {
    /// Deals two cards to every seat, one per pass, dealer last each pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out.
    pub fn deal_initial<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Result<(), GameError> {
        for _ in 0..2 {
            for seat in 0..self.players.len() {
                self.deal_to(seat, reporter)?;
            }
        }
        Ok(())
    }

    fn prompt_for(&self, seat: usize) -> Option<DecisionPrompt> {
        let player = self.players.get(seat)?;
        Some(DecisionPrompt {
            player: player.name().into(),
            points: player.points(),
            card_count: player.card_count(),
            aces: player.hand().ace_count(),
            must_hit: player.points() < self.options.hit_hint_below,
        })
    }

    /// Plays one seat's turn until it has no moves or reaches the card limit.
    ///
    /// Input other than `H` or `S` is reported and asked again without
    /// touching the hand. `io` answers the prompts and receives the events.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown seat, a seat that has not been dealt
    /// its first two cards, an empty deck, or when `io` has no more input.
    #[instrument(level = "debug", skip(self, io))]
    pub fn play_turn<T>(&mut self, seat: usize, io: &mut T) -> Result<TurnState, GameError>
    where
        T: DecisionProvider + Reporter + ?Sized,
    {
        let max_cards = self.options.max_hand_cards;

        let state = loop {
            let player = self.players.get(seat).ok_or(GameError::NoSuchSeat(seat))?;
            let state = player.turn_state(max_cards);
            if state == TurnState::Dealing {
                return Err(GameError::NotDealt {
                    player: player.name().into(),
                });
            }
            if state.is_terminal() {
                break state;
            }

            let prompt = self.prompt_for(seat).ok_or(GameError::NoSuchSeat(seat))?;
            let input = io
                .next_input(&prompt)
                .ok_or_else(|| GameError::InputExhausted {
                    player: prompt.player.clone(),
                })?;

            match input.parse::<Decision>() {
                Ok(Decision::Hit) => {
                    debug!(player = %prompt.player, "hit");
                    self.deal_to(seat, io)?;
                }
                Ok(Decision::Stand) => {
                    debug!(player = %prompt.player, "stand");
                    self.players[seat].stand();
                    io.report(&GameEvent::Stood {
                        player: prompt.player,
                    });
                }
                Err(DecisionError::Invalid(input)) => {
                    warn!(player = %prompt.player, input = %input, "rejected decision");
                    io.report(&GameEvent::InvalidDecision {
                        player: prompt.player,
                        input,
                    });
                }
            }
        };

        let player = &self.players[seat];
        debug!(player = player.name(), ?state, "turn ended");
        io.report(&GameEvent::TurnEnded {
            player: player.name().into(),
            state,
        });

        Ok(state)
    }

    /// Plays every seat's turn in order, dealer last.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::play_turn`].
    pub fn play_turns<T>(&mut self, io: &mut T) -> Result<(), GameError>
    where
        T: DecisionProvider + Reporter + ?Sized,
    {
        for seat in 0..self.players.len() {
            self.play_turn(seat, io)?;
        }
        Ok(())
    }

    /// Compares every player to the dealer and reports each result.
    ///
    /// Nothing at the table changes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoSuchSeat`] if nobody is seated, which a game
    /// built by [`Game::new`] never allows.
    pub fn resolve<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<RoundResult, GameError> {
        reporter.report(&GameEvent::Resolving);

        let result = calculate_outcome(&self.players).ok_or(GameError::NoSuchSeat(0))?;
        for player in &result.players {
            debug!(player = %player.player, outcome = ?player.outcome, "resolved");
            reporter.report(&GameEvent::Resolved(player.clone()));
        }

        Ok(result)
    }

    /// Plays the whole game: the initial deal, every turn, then the results.
    ///
    /// `io` both answers prompts and receives events; pair a provider with a
    /// reporter as a tuple to keep them apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or `io` has no more input
    /// while someone is still to act.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::{Card, Deck, Game, GameOptions, Outcome, Rank, ScriptedDecisions, Suit};
    ///
    /// let deck = Deck::from_cards(vec![
    ///     Card::new(Rank::King, Suit::Clubs),  // Solo
    ///     Card::new(Rank::Nine, Suit::Clubs),  // Dealer
    ///     Card::new(Rank::Queen, Suit::Clubs), // Solo
    ///     Card::new(Rank::Eight, Suit::Clubs), // Dealer
    /// ]);
    /// let options = GameOptions::default().with_players(["Solo"]);
    /// let mut game = Game::with_deck(options, deck).unwrap();
    ///
    /// let mut io = (ScriptedDecisions::new(["S", "S"]), ());
    /// let result = game.play(&mut io).unwrap();
    /// assert_eq!(result.players[0].outcome, Outcome::PlayerWins);
    /// ```
    pub fn play<T>(&mut self, io: &mut T) -> Result<RoundResult, GameError>
    where
        T: DecisionProvider + Reporter + ?Sized,
    {
        self.deal_initial(io)?;
        self.play_turns(io)?;
        self.resolve(io)
    }
}
