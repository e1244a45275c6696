//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Natural 21 from the opening deal; pays twice the bet.
    Blackjack,
    /// Player beats the dealer, or the dealer busts.
    Win,
    /// Dealer beats the player.
    Lose,
    /// Equal scores; the bet is returned.
    Tie,
    /// Player went over 21.
    Bust,
}

impl HandOutcome {
    /// Returns whether the outcome counts as a win in the player's record.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }

    /// Verdict banner shown at the table for this outcome.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Blackjack => "***** Blackjack!  Player wins *****",
            Self::Win => "***** Player wins! *****",
            Self::Lose => "***** Player loses *****",
            Self::Tie => "***** Player and Dealer tie *****",
            Self::Bust => "***** Bust!  Player loses *****",
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack",
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Tie => "Tie",
            Self::Bust => "Bust",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand number (1 for the first hand, higher for split hands).
    pub hand_id: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The amount that was staked on the hand.
    pub bet: usize,
    /// Net result for the hand (negative for a loss).
    pub payout: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// Results for each hand (several after a split).
    pub hands: Vec<HandResult>,
    /// Net result across hands.
    pub net: isize,
    /// Bankroll after payout.
    pub cash: usize,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer drew any cards.
    pub dealer_drew: bool,
}

impl RoundResult {
    /// Looks up a player's result by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|player| player.name == name)
    }
}
