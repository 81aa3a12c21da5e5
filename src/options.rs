//! Table configuration options.

use alloc::string::String;
use alloc::vec::Vec;

/// Name reserved for the dealer's seat by default.
pub const DEFAULT_DEALER_NAME: &str = "Dealer";

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcon::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(["Ann", "Ben", "Cal"])
///     .with_max_hand_cards(5);
/// assert_eq!(options.players.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Player names in turn order. The dealer is seated after them.
    pub players: Vec<String>,
    /// The dealer's name. No player may use it.
    pub dealer_name: String,
    /// Number of cards after which a turn ends even if moves remain.
    pub max_hand_cards: usize,
    /// Totals below this are prompted with "Must Hit".
    pub hit_hint_below: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: ["Alan", "Bob"].map(String::from).into(),
            dealer_name: DEFAULT_DEALER_NAME.into(),
            max_hand_cards: 5,
            hit_hint_below: 16,
        }
    }
}

impl GameOptions {
    /// Sets the player names, in turn order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(["Solo"]);
    /// assert_eq!(options.players, vec!["Solo".to_string()]);
    /// ```
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the hand-size limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hand_cards(6);
    /// assert_eq!(options.max_hand_cards, 6);
    /// ```
    #[must_use]
    pub fn with_max_hand_cards(mut self, cards: usize) -> Self {
        self.max_hand_cards = cards;
        self
    }

    /// Sets the total below which the prompt says "Must Hit".
    ///
    /// # Example
    ///
    /// ```
    /// use bjcon::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_hint_below(17);
    /// assert_eq!(options.hit_hint_below, 17);
    /// ```
    #[must_use]
    pub fn with_hit_hint_below(mut self, points: u8) -> Self {
        self.hit_hint_below = points;
        self
    }
}
