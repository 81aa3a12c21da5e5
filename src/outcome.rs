//! Outcome resolution against the dealer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::Player;

/// Result of one player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player beats the dealer.
    PlayerWins,
    /// The dealer beats the player.
    DealerWins,
    /// Neither side wins.
    Draw,
}

/// Compares a finished hand to the dealer's.
///
/// The rules are checked in a fixed order and the first match decides:
///
/// 1. player blackjack, dealer not: player wins
/// 2. player not bust and more points: player wins
/// 3. player not bust and dealer bust: player wins
/// 4. both blackjack: draw
/// 5. both bust: draw
/// 6. equal points: draw
/// 7. anything else: dealer wins
#[must_use]
pub const fn winner(player: &Player, dealer: &Player) -> Outcome {
    if player.is_blackjack() && !dealer.is_blackjack() {
        Outcome::PlayerWins
    } else if !player.is_busted() && player.points() > dealer.points() {
        Outcome::PlayerWins
    } else if !player.is_busted() && dealer.is_busted() {
        Outcome::PlayerWins
    } else if player.is_blackjack() && dealer.is_blackjack() {
        Outcome::Draw
    } else if player.is_busted() && dealer.is_busted() {
        Outcome::Draw
    } else if player.points() == dealer.points() {
        Outcome::Draw
    } else {
        Outcome::DealerWins
    }
}

/// Result for a single player after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub player: String,
    /// The player's final points.
    pub points: u8,
    /// The dealer's name.
    pub dealer: String,
    /// The dealer's final points.
    pub dealer_points: u8,
    /// Who won.
    pub outcome: Outcome,
}

impl PlayerResult {
    /// Returns the winner's name, or `None` on a draw.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            Outcome::PlayerWins => Some(&self.player),
            Outcome::DealerWins => Some(&self.dealer),
            Outcome::Draw => None,
        }
    }
}

/// Result of the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each non-dealer player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final points.
    pub dealer_points: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

/// Resolves every seat except the last against the last, which is the dealer.
///
/// Nothing is mutated. An empty table yields `None`.
#[must_use]
pub fn calculate_outcome(players: &[Player]) -> Option<RoundResult> {
    let (dealer, seats) = players.split_last()?;

    let results = seats
        .iter()
        .map(|player| PlayerResult {
            player: player.name().into(),
            points: player.points(),
            dealer: dealer.name().into(),
            dealer_points: dealer.points(),
            outcome: winner(player, dealer),
        })
        .collect();

    Some(RoundResult {
        players: results,
        dealer_points: dealer.points(),
        dealer_bust: dealer.is_busted(),
        dealer_blackjack: dealer.is_blackjack(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn seat(name: &str, ranks: &[Rank]) -> Player {
        let mut player = Player::new(name);
        for &rank in ranks {
            player.add_card(Card::new(rank, Suit::Hearts));
        }
        player
    }

    #[test]
    fn higher_points_win() {
        let player = seat("Alan", &[Rank::King, Rank::Queen]);
        let dealer = seat("Dealer", &[Rank::Ten, Rank::Eight]);
        assert_eq!(winner(&player, &dealer), Outcome::PlayerWins);
        assert_eq!(winner(&dealer, &player), Outcome::DealerWins);
    }

    #[test]
    fn blackjack_beats_twenty_one_in_three() {
        let player = seat("Alan", &[Rank::Ace, Rank::King]);
        let dealer = seat("Dealer", &[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(dealer.points(), 21);
        assert_eq!(winner(&player, &dealer), Outcome::PlayerWins);
    }

    #[test]
    fn both_blackjack_draw() {
        let player = seat("Alan", &[Rank::Ace, Rank::King]);
        let dealer = seat("Dealer", &[Rank::Ace, Rank::Queen]);
        assert_eq!(winner(&player, &dealer), Outcome::Draw);
    }

    #[test]
    fn both_bust_draw() {
        let player = seat("Alan", &[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = seat("Dealer", &[Rank::Ten, Rank::Nine, Rank::Four]);
        assert_eq!(winner(&player, &dealer), Outcome::Draw);
    }

    #[test]
    fn equal_points_draw() {
        let player = seat("Alan", &[Rank::King, Rank::Nine]);
        let dealer = seat("Dealer", &[Rank::Ten, Rank::Nine]);
        assert_eq!(winner(&player, &dealer), Outcome::Draw);
    }

    #[test]
    fn player_bust_loses_to_standing_dealer() {
        let player = seat("Alan", &[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = seat("Dealer", &[Rank::Ten, Rank::Seven]);
        assert_eq!(winner(&player, &dealer), Outcome::DealerWins);
    }

    #[test]
    fn outcome_skips_the_dealer_seat() {
        let table = [
            seat("Alan", &[Rank::King, Rank::Nine]),
            seat("Bob", &[Rank::Two, Rank::Three]),
            seat("Dealer", &[Rank::Ten, Rank::Eight]),
        ];
        let result = calculate_outcome(&table).unwrap();
        assert_eq!(result.players.len(), 2);
        assert_eq!(result.players[0].winner_name(), Some("Alan"));
        assert_eq!(result.players[1].winner_name(), Some("Dealer"));
        assert_eq!(result.dealer_points, 18);
        assert!(calculate_outcome(&[]).is_none());
    }
}
