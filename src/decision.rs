//! Hit/stand decisions and where they come from.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::DecisionError;

/// A player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take one more card.
    Hit,
    /// Take no more cards.
    Stand,
}

impl FromStr for Decision {
    type Err = DecisionError;

    /// Parses exactly `H` or `S`; case and surrounding spaces matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Self::Hit),
            "S" => Ok(Self::Stand),
            other => Err(DecisionError::Invalid(other.to_string())),
        }
    }
}

/// What a player sees when asked to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPrompt {
    /// The player being asked.
    pub player: String,
    /// Current point total.
    pub points: u8,
    /// Cards held.
    pub card_count: usize,
    /// Aces held.
    pub aces: usize,
    /// Whether the total is below the hit hint threshold.
    ///
    /// This only changes the prompt wording; standing is still accepted.
    pub must_hit: bool,
}

/// A source of raw hit/stand input.
///
/// The game validates whatever comes back and asks again on bad input, so an
/// implementation just hands over the next line it has.
pub trait DecisionProvider {
    /// Returns the next raw input for `prompt`, or `None` once the source is
    /// exhausted.
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String>;
}

impl<D: DecisionProvider + ?Sized> DecisionProvider for &mut D {
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String> {
        (**self).next_input(prompt)
    }
}

/// A provider paired with something else, such as a reporter.
impl<D: DecisionProvider, R> DecisionProvider for (D, R) {
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String> {
        self.0.next_input(prompt)
    }
}

/// A fixed queue of inputs, played back in order.
///
/// ```
/// use bjcon::{DecisionPrompt, DecisionProvider, ScriptedDecisions};
///
/// let mut script = ScriptedDecisions::new(["x", "H"]);
/// let prompt = DecisionPrompt {
///     player: "Alan".into(),
///     points: 12,
///     card_count: 2,
///     aces: 0,
///     must_hit: true,
/// };
/// assert_eq!(script.next_input(&prompt).as_deref(), Some("x"));
/// assert_eq!(script.next_input(&prompt).as_deref(), Some("H"));
/// assert_eq!(script.next_input(&prompt), None);
/// assert_eq!(script.prompts().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    inputs: VecDeque<String>,
    prompts: Vec<DecisionPrompt>,
}

impl ScriptedDecisions {
    /// Creates a script from raw input lines.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns every prompt that was asked, in order.
    #[must_use]
    pub fn prompts(&self) -> &[DecisionPrompt] {
        &self.prompts
    }

    /// Returns the number of inputs not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn next_input(&mut self, prompt: &DecisionPrompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        self.inputs.pop_front()
    }
}
