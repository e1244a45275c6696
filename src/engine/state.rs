//! Round stages.

use core::fmt;

/// Stage of the round. Stages run in declaration order; after
/// [`Stage::Outcome`] the next round starts again at [`Stage::Betting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// No round has been played yet.
    Start,
    /// Players stake bets or leave.
    Betting,
    /// Two cards each to the players and the dealer.
    OpeningDeal,
    /// Players act on their hands.
    Deciding,
    /// The dealer draws to 17.
    DealerPlay,
    /// Hands are compared and paid.
    Outcome,
    /// Every player has left.
    Closed,
}

impl Stage {
    /// Banner announcing the stage at the table.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Start => "LET'S PLAY BLACKJACK!",
            Self::Betting => "PLACE YOUR BETS!",
            Self::OpeningDeal => "OPENING DEAL",
            Self::Deciding => "PLAYERS MAKE YOUR CHOICE",
            Self::DealerPlay => "DEALER PLAY",
            Self::Outcome => "OUTCOME",
            Self::Closed => "TABLE CLOSED",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start",
            Self::Betting => "Betting",
            Self::OpeningDeal => "Opening Deal",
            Self::Deciding => "Deciding",
            Self::DealerPlay => "Dealer Play",
            Self::Outcome => "Outcome",
            Self::Closed => "Closed",
        })
    }
}
