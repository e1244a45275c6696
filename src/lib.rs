//! A blackjack round engine with Hi-Lo card counting and a basic-strategy
//! advisor, with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] type that runs each round from
//! betting through the opening deal, player decisions, dealer play and
//! settlement. Seats decide through the [`DecisionStrategy`] trait, and the
//! engine reports what happens at the table to an [`EventSink`].
//!
//! # Example
//!
//! ```
//! use bjround::{AiKind, GameOptions, RoundEngine};
//!
//! let mut engine = RoundEngine::new(GameOptions::default(), 42).unwrap();
//! engine.join("AiPlayer1", AiKind::Basic.strategy(5));
//!
//! let mut events = Vec::new();
//! let rounds = engine.run(&mut events).unwrap();
//! assert_eq!(rounds, 5);
//! assert!(!engine.has_players());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod counter;
pub mod engine;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use counter::{CardCounter, count_hi_lo, decks_remaining, hi_lo_weight};
pub use engine::{RoundEngine, Stage};
pub use error::{ConfigError, DecisionError, RoundError};
pub use event::{Event, EventSink, HandView, NullSink};
pub use hand::{DealerHand, Hand, HandStatus, min_score, score};
pub use options::{GameOptions, ReshuffleMode, SeatConfig, parse_rounds};
pub use player::{Player, Record};
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::{Shoe, cut_position};
pub use strategy::{
    Action, AiKind, BasicStrategy, BetDecision, BetView, DecisionStrategy, Dialog, StandOnly,
    TableView, advise, advise_offered, dealer_up_card_value,
};
