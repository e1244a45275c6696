//! Error types for setup and round play.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::engine::Stage;
use crate::strategy::{Action, Dialog};

/// Errors in the table configuration, reported once at setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// No seats were configured.
    #[error("no players at the table")]
    NoPlayers,
    /// The cut-card range is empty or outside `0.0..1.0`.
    #[error("invalid cut-card range")]
    InvalidCutRange,
    /// Players must start with some cash.
    #[error("starting cash is zero")]
    ZeroStartingCash,
    /// The default bet must be at least one.
    #[error("default bet is zero")]
    ZeroDefaultBet,
    /// The round count for a computer player is not a number.
    #[error("invalid number of rounds: {0:?}")]
    InvalidRounds(String),
    /// Unknown computer player kind.
    #[error("unknown AI type: {0:?}")]
    UnknownAiKind(String),
}

/// Errors raised by a seat's strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The input behind a human seat was closed.
    #[error("input closed")]
    InputClosed,
    /// Reading or writing the console behind a human seat failed.
    #[error("console i/o failed: {0}")]
    Io(String),
    /// A strategy staked an amount outside `1..=bankroll`.
    #[error("invalid bet {bet} with bankroll {bankroll}")]
    InvalidBet {
        /// The amount staked.
        bet: usize,
        /// The cash available.
        bankroll: usize,
    },
}

/// Errors that abort a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The phase was called out of order.
    #[error("expected stage {expected}, found {found}")]
    InvalidStage {
        /// The stage the phase runs from.
        expected: Stage,
        /// The stage the engine is in.
        found: Stage,
    },
    /// A card was needed but the shoe is empty.
    #[error("no cards left in the shoe")]
    EmptyShoe,
    /// There is nobody left to play the round.
    #[error("no players at the table")]
    NoPlayers,
    /// The dealer has no face-up card to decide against.
    #[error("dealer has no up-card")]
    MissingUpCard,
    /// A player cannot cover the extra stake of a double down or split.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A strategy chose an action the dialog does not offer.
    #[error("{action} is not offered ({dialog})")]
    ActionNotOffered {
        /// The action chosen.
        action: Action,
        /// The dialog in effect.
        dialog: Dialog,
    },
    /// A strategy failed to decide.
    #[error(transparent)]
    Decision(#[from] DecisionError),
}
