//! Player decisions: the basic-strategy advisor and the strategies that pick
//! bets and actions for a seat.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank};
use crate::counter::CardCounter;
use crate::error::{ConfigError, DecisionError};
use crate::hand::Hand;

/// A playing decision on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Console letter for the action.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stand => 's',
            Self::DoubleDown => 'd',
            Self::Split => 'p',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
        })
    }
}

/// What a seat does when bets are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetDecision {
    /// Stake this amount on the first hand.
    Bet(usize),
    /// Leave the table.
    Quit,
}

/// The question put to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// Play another round or leave.
    BetOrQuit,
    /// Choose the stake.
    PlaceYourBet,
    /// Only hitting and standing are offered.
    HitOrStand,
    /// Every action is offered.
    HitSplitDoubleStand,
    /// Everything but splitting is offered.
    HitDoubleStand,
}

impl Dialog {
    /// Works out which actions are offered on a hand.
    ///
    /// Doubling and splitting need a two-card hand and enough cash to match
    /// the bet; splitting also needs a pair.
    #[must_use]
    pub fn for_hand(hand: &Hand, bankroll: usize) -> Self {
        if hand.bet() > bankroll || hand.len() != 2 {
            Self::HitOrStand
        } else if hand.is_pair() {
            Self::HitSplitDoubleStand
        } else {
            Self::HitDoubleStand
        }
    }

    /// Returns whether `action` may be taken under this dialog.
    #[must_use]
    pub const fn offers(self, action: Action) -> bool {
        match self {
            Self::BetOrQuit | Self::PlaceYourBet => false,
            Self::HitOrStand => matches!(action, Action::Hit | Action::Stand),
            Self::HitDoubleStand => !matches!(action, Action::Split),
            Self::HitSplitDoubleStand => true,
        }
    }

    /// Prompt text shown to a human.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::BetOrQuit => "enter (B)et or (Q)uit [b]:",
            Self::PlaceYourBet => "place your bet",
            Self::HitOrStand => "please choose (H)it, (S)tand or (?)Hint: ",
            Self::HitSplitDoubleStand => {
                "please choose (H)it, S(P)lit, (D)ouble, (S)tand or (?)Hint: "
            }
            Self::HitDoubleStand => "please choose (H)it, (D)ouble, (S)tand (?)Hint: ",
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BetOrQuit => "BetOrQuit",
            Self::PlaceYourBet => "PlaceYourBet",
            Self::HitOrStand => "HitOrStand",
            Self::HitSplitDoubleStand => "HitSplitDoubleStand",
            Self::HitDoubleStand => "HitDoubleStand",
        })
    }
}

/// Value of the dealer's up-card scored on its own: face cards 10, Ace 11.
#[must_use]
pub const fn dealer_up_card_value(card: &Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        rank => rank.points(),
    }
}

/// Soft for advice purposes: a two-card hand holding an Ace.
fn is_soft_two_card(hand: &Hand) -> bool {
    hand.len() == 2 && hand.cards().iter().any(Card::is_ace)
}

/// Recommends an action for `hand` against the dealer's up-card.
///
/// Pure and deterministic; the rules are checked in a fixed order and the
/// first match wins.
///
/// # Example
///
/// ```
/// use bjround::{Action, Card, Hand, Rank, Suit, advise};
///
/// let mut hand = Hand::new(1);
/// hand.add_card(Card::new(Rank::Eight, Suit::Club));
/// hand.add_card(Card::new(Rank::Eight, Suit::Heart));
/// let up = Card::new(Rank::Ten, Suit::Spade);
/// assert_eq!(advise(&hand, &up, 10, 1), Action::Split);
/// ```
#[must_use]
pub fn advise(hand: &Hand, dealer_up_card: &Card, bankroll: usize, bet: usize) -> Action {
    advise_with(hand, dealer_up_card, bankroll, bet, hand.is_pair())
}

fn advise_with(
    hand: &Hand,
    dealer_up_card: &Card,
    bankroll: usize,
    bet: usize,
    consider_split: bool,
) -> Action {
    let total = hand.score();
    let dealer = dealer_up_card_value(dealer_up_card);
    let soft = is_soft_two_card(hand);
    let can_cover = bankroll > bet;
    let pair = if consider_split {
        hand.pair_rank()
    } else {
        None
    };

    match pair {
        Some(Rank::Ace | Rank::Eight) => return Action::Split,
        Some(rank) if rank != Rank::Four && rank != Rank::Five && rank <= Rank::Nine && dealer <= 6 => {
            return Action::Split;
        }
        _ => {}
    }

    if (total == 10 || total == 11) && dealer < total && can_cover {
        Action::DoubleDown
    } else if total == 9 && (3..=6).contains(&dealer) && can_cover {
        Action::DoubleDown
    } else if total <= 11 {
        Action::Hit
    } else if soft && total <= 15 {
        Action::Hit
    } else if soft && total >= 19 {
        Action::Stand
    } else if soft && (16..=18).contains(&total) && dealer >= 7 {
        Action::Hit
    } else if soft && (16..=18).contains(&total) && can_cover {
        Action::DoubleDown
    } else if soft && (16..=18).contains(&total) {
        Action::Hit
    } else if (17..=21).contains(&total) {
        Action::Stand
    } else if total == 12 && dealer <= 3 {
        Action::Hit
    } else if (12..=16).contains(&total) && dealer <= 6 {
        Action::Stand
    } else if (12..=16).contains(&total) {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// Basic-strategy advice restricted to what `view` offers: a split that is
/// not offered is re-advised as a plain total, and a double that is not
/// offered becomes a hit.
#[must_use]
pub fn advise_offered(view: &TableView<'_>) -> Action {
    let advice = advise_with(
        view.hand,
        &view.dealer_up_card,
        view.bankroll,
        view.hand.bet(),
        view.dialog.offers(Action::Split),
    );

    if view.dialog.offers(advice) {
        advice
    } else {
        Action::Hit
    }
}

/// What a seat sees when asked for a playing decision.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The deciding player's name.
    pub player: &'a str,
    /// The hand being decided.
    pub hand: &'a Hand,
    /// Dealer's face-up card.
    pub dealer_up_card: Card,
    /// The player's cash not on the table.
    pub bankroll: usize,
    /// The count of the current shoe.
    pub counter: CardCounter,
    /// The actions on offer.
    pub dialog: Dialog,
}

/// What a seat sees when bets are called.
#[derive(Debug, Clone, Copy)]
pub struct BetView<'a> {
    /// The betting player's name.
    pub player: &'a str,
    /// The player's cash.
    pub bankroll: usize,
    /// The player's previous stake, or the table default before the first
    /// round.
    pub last_bet: usize,
    /// The table's default stake.
    pub default_bet: usize,
    /// The count of the current shoe.
    pub counter: CardCounter,
}

/// Picks bets and actions for one seat.
pub trait DecisionStrategy {
    /// Stakes a bet for the next round, or quits.
    ///
    /// # Errors
    ///
    /// Returns an error when no decision can be obtained, e.g. the input
    /// behind a human seat is closed.
    fn place_bet(&mut self, view: &BetView<'_>) -> Result<BetDecision, DecisionError>;

    /// Chooses an action for the hand in `view`. The action must be one the
    /// view's dialog offers.
    ///
    /// # Errors
    ///
    /// Returns an error when no decision can be obtained.
    fn choose_action(&mut self, view: &TableView<'_>) -> Result<Action, DecisionError>;
}

/// Round budget for a computer seat. The seat bets the table default until
/// it has played its rounds or runs out of cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RoundBudget {
    rounds_to_play: u32,
    rounds_played: u32,
}

impl RoundBudget {
    const fn new(rounds_to_play: u32) -> Self {
        Self {
            rounds_to_play,
            rounds_played: 0,
        }
    }

    fn place_bet(&mut self, view: &BetView<'_>) -> BetDecision {
        if self.rounds_played >= self.rounds_to_play || view.bankroll < view.default_bet {
            return BetDecision::Quit;
        }
        self.rounds_played += 1;
        BetDecision::Bet(view.default_bet)
    }
}

/// Computer seat that plays basic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStrategy {
    budget: RoundBudget,
}

impl BasicStrategy {
    /// Creates a seat that plays `rounds` rounds.
    #[must_use]
    pub const fn new(rounds: u32) -> Self {
        Self {
            budget: RoundBudget::new(rounds),
        }
    }
}

impl DecisionStrategy for BasicStrategy {
    fn place_bet(&mut self, view: &BetView<'_>) -> Result<BetDecision, DecisionError> {
        Ok(self.budget.place_bet(view))
    }

    fn choose_action(&mut self, view: &TableView<'_>) -> Result<Action, DecisionError> {
        Ok(advise_offered(view))
    }
}

/// Computer seat that always stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandOnly {
    budget: RoundBudget,
}

impl StandOnly {
    /// Creates a seat that plays `rounds` rounds.
    #[must_use]
    pub const fn new(rounds: u32) -> Self {
        Self {
            budget: RoundBudget::new(rounds),
        }
    }
}

impl DecisionStrategy for StandOnly {
    fn place_bet(&mut self, view: &BetView<'_>) -> Result<BetDecision, DecisionError> {
        Ok(self.budget.place_bet(view))
    }

    fn choose_action(&mut self, _view: &TableView<'_>) -> Result<Action, DecisionError> {
        Ok(Action::Stand)
    }
}

/// Kind of computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiKind {
    /// Plays basic strategy.
    #[default]
    Basic,
    /// Always stands.
    StandOnly,
    /// Custom play; currently plays basic strategy.
    Custom,
}

impl AiKind {
    /// Builds the strategy for a seat that plays `rounds` rounds.
    #[must_use]
    pub fn strategy(self, rounds: u32) -> Box<dyn DecisionStrategy> {
        match self {
            Self::Basic | Self::Custom => Box::new(BasicStrategy::new(rounds)),
            Self::StandOnly => Box::new(StandOnly::new(rounds)),
        }
    }
}

impl FromStr for AiKind {
    type Err = ConfigError;

    /// Parses the console letters `b`, `s` and `x`; an empty answer picks
    /// basic strategy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "b" | "B" => Ok(Self::Basic),
            "s" | "S" => Ok(Self::StandOnly),
            "x" | "X" => Ok(Self::Custom),
            other => Err(ConfigError::UnknownAiKind(other.into())),
        }
    }
}
