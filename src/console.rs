//! Console adapter: prompts on a writer, reads decisions from a reader, and
//! prints every game event as a line of text.

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufRead, Write};

use crate::decision::{DecisionPrompt, DecisionProvider};
use crate::game::{GameEvent, Reporter};

/// A terminal-style front end over any line reader and writer.
///
/// Write errors are ignored; the game keeps going with whatever output
/// still reaches the terminal.
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console over the given reader and writer.
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes a free-form status line.
    pub fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> DecisionProvider for Console<I, O> {
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String> {
        let name = &prompt.player;
        let _ = writeln!(
            self.output,
            "[{name}] - Current Points: [{}], Card Count: [{}], Number of Aces: [{}]",
            prompt.points, prompt.card_count, prompt.aces
        );
        if prompt.must_hit {
            let _ = write!(self.output, "[{name}] - Not enough points. Must Hit(H): ");
        } else {
            let _ = write!(self.output, "[{name}] - Hit(H) or Stand(S): ");
        }
        let _ = self.output.flush();

        // Undecodable bytes still make a line; only a closed reader ends input.
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\n', '\r']).into())
            }
        }
    }
}

impl<I: BufRead, O: Write> Reporter for Console<I, O> {
    fn report(&mut self, event: &GameEvent) {
        let out = &mut self.output;
        let _ = match event {
            GameEvent::CardDealt {
                player,
                card_index,
                card,
                points,
                blackjack,
                busted,
            } => {
                let _ = writeln!(
                    out,
                    "[{player}] - Card [{card_index}] - [{}] of [{}].",
                    card.rank, card.suit
                );
                match card_index {
                    2 => writeln!(
                        out,
                        "[{player}] - Total points: [{points}]. Blackjack: [{blackjack}]."
                    ),
                    3.. => writeln!(
                        out,
                        "[{player}] - Total points: [{points}]. Busted: [{busted}]."
                    ),
                    _ => Ok(()),
                }
            }
            GameEvent::InvalidDecision { .. } => {
                writeln!(out, "Invalid input detected. You need to type 'H' or 'S'!")
            }
            GameEvent::Stood { .. } => Ok(()),
            GameEvent::TurnEnded { player, .. } => {
                writeln!(out, "[{player}] has no more moves. Moving to next player.")
            }
            GameEvent::Resolving => writeln!(out, "Calculating the results..."),
            GameEvent::Resolved(result) => match result.winner_name() {
                Some(winner) => writeln!(
                    out,
                    "[{}]: {} vs {}: {} - Winner: {winner}.",
                    result.player, result.points, result.dealer, result.dealer_points
                ),
                None => writeln!(
                    out,
                    "[{}]: {} vs {}: {} - Draw.",
                    result.player, result.points, result.dealer, result.dealer_points
                ),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use std::io::Cursor;

    fn render(events: &[GameEvent]) -> String {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        for event in events {
            console.report(event);
        }
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn second_card_reports_blackjack_flag() {
        let out = render(&[GameEvent::CardDealt {
            player: "Alan".into(),
            card_index: 2,
            card: Card::new(Rank::Ace, Suit::Spades),
            points: 21,
            blackjack: true,
            busted: false,
        }]);
        assert_eq!(
            out,
            "[Alan] - Card [2] - [Ace] of [Spades].\n\
             [Alan] - Total points: [21]. Blackjack: [true].\n"
        );
    }

    #[test]
    fn first_card_has_no_total() {
        let out = render(&[GameEvent::CardDealt {
            player: "Bob".into(),
            card_index: 1,
            card: Card::new(Rank::Two, Suit::Clubs),
            points: 2,
            blackjack: false,
            busted: false,
        }]);
        assert_eq!(out, "[Bob] - Card [1] - [Two] of [Clubs].\n");
    }

    #[test]
    fn reads_one_line_per_prompt() {
        let mut console = Console::new(Cursor::new("H\r\nS\n"), Vec::new());
        let prompt = DecisionPrompt {
            player: "Alan".into(),
            points: 17,
            card_count: 2,
            aces: 1,
            must_hit: false,
        };
        assert_eq!(console.next_input(&prompt).as_deref(), Some("H"));
        assert_eq!(console.next_input(&prompt).as_deref(), Some("S"));
        assert_eq!(console.next_input(&prompt), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with(
            "[Alan] - Current Points: [17], Card Count: [2], Number of Aces: [1]\n\
             [Alan] - Hit(H) or Stand(S): "
        ));
    }

    #[test]
    fn undecodable_bytes_still_make_a_line() {
        let mut console = Console::new(Cursor::new(b"\xffH\r\nS".to_vec()), Vec::new());
        let prompt = DecisionPrompt {
            player: "Bob".into(),
            points: 12,
            card_count: 2,
            aces: 0,
            must_hit: true,
        };
        assert_eq!(console.next_input(&prompt).as_deref(), Some("\u{fffd}H"));
        assert_eq!(console.next_input(&prompt).as_deref(), Some("S"));
        assert_eq!(console.next_input(&prompt), None);
    }
}
