//! Seats at the table: bankroll, hands and the win-lose-tie record.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::counter::CardCounter;
use crate::error::DecisionError;
use crate::hand::{Hand, HandStatus};
use crate::result::HandOutcome;
use crate::strategy::{Action, BetDecision, BetView, DecisionStrategy, Dialog, TableView};

/// Lifetime tally of settled hands. Never reset during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    /// Hands won, blackjacks included.
    pub win: u32,
    /// Hands lost, busts included.
    pub lose: u32,
    /// Hands tied.
    pub tie: u32,
    /// Hands settled.
    pub hands_played: u32,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "************** Player Win-Lose-Tie Report **************"
        )?;
        write!(
            f,
            "Player won: {}, lost: {} and tied: {}",
            self.win, self.lose, self.tie
        )
    }
}

/// A player seated at the table.
pub struct Player {
    name: String,
    cash: usize,
    hands: Vec<Hand>,
    record: Record,
    last_bet: usize,
    quit: bool,
    strategy: Box<dyn DecisionStrategy>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("cash", &self.cash)
            .field("hands", &self.hands)
            .field("record", &self.record)
            .field("last_bet", &self.last_bet)
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Seats a player with `cash` and the strategy that decides for them.
    #[must_use]
    pub fn new(name: impl Into<String>, cash: usize, strategy: Box<dyn DecisionStrategy>) -> Self {
        Self {
            name: name.into(),
            cash,
            hands: alloc::vec![Hand::new(1)],
            record: Record::default(),
            last_bet: 0,
            quit: false,
            strategy,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cash not currently staked.
    #[must_use]
    pub const fn cash(&self) -> usize {
        self.cash
    }

    /// Returns the player's hands for this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the lifetime record.
    #[must_use]
    pub const fn record(&self) -> Record {
        self.record
    }

    /// Returns the last stake placed, or zero before the first round.
    #[must_use]
    pub const fn last_bet(&self) -> usize {
        self.last_bet
    }

    /// Returns whether the player leaves before the next round.
    #[must_use]
    pub const fn has_quit(&self) -> bool {
        self.quit
    }

    /// Flags the player to leave before the next round.
    pub const fn quit(&mut self) {
        self.quit = true;
    }

    /// Flags the player to leave if their cash has run out.
    pub const fn check_broke(&mut self) {
        if self.cash == 0 {
            self.quit = true;
        }
    }

    /// Asks the strategy for next round's stake.
    pub(crate) fn decide_bet(
        &mut self,
        default_bet: usize,
        counter: CardCounter,
    ) -> Result<BetDecision, DecisionError> {
        let view = BetView {
            player: &self.name,
            bankroll: self.cash,
            last_bet: if self.last_bet == 0 {
                default_bet
            } else {
                self.last_bet
            },
            default_bet,
            counter,
        };
        self.strategy.place_bet(&view)
    }

    /// Asks the strategy what to do with hand `index`. Returns the action
    /// together with the dialog it was chosen under.
    pub(crate) fn decide_action(
        &mut self,
        index: usize,
        dealer_up_card: Card,
        counter: CardCounter,
    ) -> Option<Result<(Action, Dialog), DecisionError>> {
        let hand = self.hands.get(index)?;
        let view = TableView {
            player: &self.name,
            hand,
            dealer_up_card,
            bankroll: self.cash,
            counter,
            dialog: Dialog::for_hand(hand, self.cash),
        };
        Some(
            self.strategy
                .choose_action(&view)
                .map(|action| (action, view.dialog)),
        )
    }

    pub(crate) fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }

    /// Clears the hands for a new round. Cash and record carry over.
    pub fn reset_hands(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new(1));
    }

    /// Stakes `amount` on the first hand. The stake leaves the bankroll
    /// immediately.
    ///
    /// Returns `false` and changes nothing if the player cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> bool {
        if amount == 0 || amount > self.cash {
            return false;
        }
        let Some(hand) = self.hands.first_mut() else {
            return false;
        };
        self.cash -= amount;
        hand.add_bet(amount);
        self.last_bet = amount;
        true
    }

    /// Takes `amount` more from the bankroll, for a double down or a split.
    ///
    /// Returns `false` and changes nothing if the player cannot cover it.
    pub const fn stake_more(&mut self, amount: usize) -> bool {
        if amount > self.cash {
            return false;
        }
        self.cash -= amount;
        true
    }

    /// Settles every hand with the outcome `judge` assigns to it.
    ///
    /// Winnings and returned stakes are credited, the record is tallied, and
    /// a player left with no cash is flagged to quit.
    pub fn settle_hands<F: FnMut(&Hand) -> HandOutcome>(&mut self, mut judge: F) {
        let mut credited = 0;
        for hand in &mut self.hands {
            let outcome = judge(hand);
            credited += hand.settle(outcome);
        }
        self.cash += credited;
        self.tally();
        self.check_broke();
    }

    fn tally(&mut self) {
        for hand in &self.hands {
            match hand.outcome() {
                Some(outcome) if outcome.is_win() => self.record.win += 1,
                Some(HandOutcome::Tie) => self.record.tie += 1,
                Some(_) => self.record.lose += 1,
                None => continue,
            }
            self.record.hands_played += 1;
        }
    }

    /// Returns whether any hand is still in play against the dealer, i.e.
    /// neither bust nor a blackjack.
    #[must_use]
    pub fn has_live_hand(&self) -> bool {
        self.hands
            .iter()
            .any(|hand| !matches!(hand.status(), HandStatus::Bust | HandStatus::Blackjack))
    }

    /// Net result of the settled hands.
    #[must_use]
    pub fn net(&self) -> isize {
        self.hands.iter().map(Hand::payout).sum()
    }
}
