//! Hi-Lo card counting.

use core::fmt;

use tracing::warn;

use crate::card::{Card, DECK_SIZE, Rank};

/// Smallest number of decks the true count divides by: one card's worth.
pub const MIN_DECKS_REMAINING: f64 = 1.0 / DECK_SIZE as f64;

/// Hi-Lo weight of a card: +1 for Two through Six, -1 for Ten and the face
/// cards, 0 otherwise. The Ace is neutral in this count.
#[must_use]
pub const fn hi_lo_weight(card: &Card) -> i32 {
    let ordinal = card.rank.ordinal();
    if ordinal >= Rank::Two.ordinal() && ordinal <= Rank::Six.ordinal() {
        1
    } else if ordinal >= Rank::Ten.ordinal() {
        -1
    } else {
        0
    }
}

/// Estimated decks left in the shoe, never below [`MIN_DECKS_REMAINING`].
#[must_use]
pub fn decks_remaining(cards_dealt: usize, decks: u8) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let remaining = f64::from(decks) - cards_dealt as f64 / DECK_SIZE as f64;
    if remaining < MIN_DECKS_REMAINING {
        warn!(cards_dealt, decks, "shoe dealt past its decks, clamping true count divisor");
        return MIN_DECKS_REMAINING;
    }
    remaining
}

/// Applies one dealt card to a running count.
///
/// Returns the new running count and the true count, the running count
/// divided by the decks still to be dealt.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, count_hi_lo};
///
/// let queen = Card::new(Rank::Queen, Suit::Club);
/// let (running, true_count) = count_hi_lo(&queen, 2, 26, 1);
/// assert_eq!(running, 1);
/// assert!((true_count - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn count_hi_lo(card: &Card, running_count: i32, cards_dealt: usize, decks: u8) -> (i32, f64) {
    let running = running_count + hi_lo_weight(card);
    (running, f64::from(running) / decks_remaining(cards_dealt, decks))
}

/// Running and true count for the current shoe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardCounter {
    running_count: i32,
    true_count: f64,
}

impl CardCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running_count: 0,
            true_count: 0.0,
        }
    }

    /// Creates a counter from an existing running count.
    #[must_use]
    pub const fn with_running_count(running_count: i32) -> Self {
        Self {
            running_count,
            true_count: 0.0,
        }
    }

    /// Counts a dealt card. `cards_dealt` includes this card.
    pub fn update(&mut self, card: &Card, cards_dealt: usize, decks: u8) {
        let (running, true_count) = count_hi_lo(card, self.running_count, cards_dealt, decks);
        self.running_count = running;
        self.true_count = true_count;
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the true count.
    #[must_use]
    pub const fn true_count(&self) -> f64 {
        self.true_count
    }

    /// Resets the count for a fresh shoe.
    pub const fn reset(&mut self) {
        self.running_count = 0;
        self.true_count = 0.0;
    }
}

impl fmt::Display for CardCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Count: {}, True Count: {}",
            self.running_count, self.true_count
        )
    }
}
