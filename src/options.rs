//! Table configuration.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::ops::Range;

use crate::error::ConfigError;
use crate::strategy::{AiKind, DecisionStrategy};

/// What happens to dealt cards and when the shoe is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReshuffleMode {
    /// Deal down to a randomly placed cut card, then replace the shoe with a
    /// freshly shuffled one.
    #[default]
    CutCard,
    /// Return every dealt card to the back of the shoe. The shoe never runs
    /// out and is never replaced.
    Continuous,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{GameOptions, ReshuffleMode};
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_reshuffle(ReshuffleMode::Continuous)
///     .with_starting_cash(500);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Shoe replacement policy.
    pub reshuffle: ReshuffleMode,
    /// Range the share of the shoe held back behind the cut card is drawn
    /// from.
    pub cut_range: Range<f64>,
    /// Cash each player sits down with.
    pub starting_cash: usize,
    /// Stake offered by default and bet by computer players.
    pub default_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle: ReshuffleMode::CutCard,
            cut_range: 0.01..0.17,
            starting_cash: 100,
            default_bet: 1,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe replacement policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, ReshuffleMode};
    ///
    /// let options = GameOptions::default().with_reshuffle(ReshuffleMode::Continuous);
    /// assert_eq!(options.reshuffle, ReshuffleMode::Continuous);
    /// ```
    #[must_use]
    pub const fn with_reshuffle(mut self, reshuffle: ReshuffleMode) -> Self {
        self.reshuffle = reshuffle;
        self
    }

    /// Sets the range of the share held back behind the cut card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_cut_range(0.2..0.3);
    /// assert_eq!(options.cut_range, 0.2..0.3);
    /// ```
    #[must_use]
    pub fn with_cut_range(mut self, cut_range: Range<f64>) -> Self {
        self.cut_range = cut_range;
        self
    }

    /// Sets the cash each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_cash(250);
    /// assert_eq!(options.starting_cash, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_cash(mut self, cash: usize) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Sets the default stake.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(5);
    /// assert_eq!(options.default_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Checks the options for values the engine cannot play with.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero deck count, an empty or out-of-range cut
    /// range, zero starting cash or a zero default bet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        let Range { start, end } = self.cut_range;
        if !(0.0..1.0).contains(&start) || !(start < end && end <= 1.0) {
            return Err(ConfigError::InvalidCutRange);
        }
        if self.starting_cash == 0 {
            return Err(ConfigError::ZeroStartingCash);
        }
        if self.default_bet == 0 {
            return Err(ConfigError::ZeroDefaultBet);
        }
        Ok(())
    }
}

/// One seat at the table, as configured at setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatConfig {
    /// A person deciding through the console.
    Human {
        /// Display name.
        name: String,
    },
    /// A computer player.
    Ai {
        /// Display name.
        name: String,
        /// How the computer plays.
        kind: AiKind,
        /// Rounds to play before leaving.
        rounds: u32,
    },
}

impl SeatConfig {
    /// Returns the seat's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Human { name } | Self::Ai { name, .. } => name,
        }
    }

    /// Builds the strategy of a computer seat. Human seats need an input
    /// source and return `None`.
    #[must_use]
    pub fn ai_strategy(&self) -> Option<Box<dyn DecisionStrategy>> {
        match self {
            Self::Human { .. } => None,
            Self::Ai { kind, rounds, .. } => Some(kind.strategy(*rounds)),
        }
    }
}

/// Parses the number of rounds a computer player should play.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRounds`] if `input` is not a whole number.
///
/// # Example
///
/// ```
/// use bjround::parse_rounds;
///
/// assert_eq!(parse_rounds(" 25 "), Ok(25));
/// assert!(parse_rounds("lots").is_err());
/// ```
pub fn parse_rounds(input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidRounds(trimmed.into()))
}
