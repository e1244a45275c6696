//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::result::HandOutcome;

/// Sums the hand with every Ace counted as 1.
#[must_use]
pub fn min_score(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.rank.points()))
}

/// Scores a hand under the soft/hard Ace rule.
///
/// At most one Ace is promoted to 11, and only when the promoted total stays
/// at or below 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let min = min_score(cards);
    if min <= 11 && cards.iter().any(Card::is_ace) {
        min + 10
    } else {
        min
    }
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is waiting for a decision.
    Active,
    /// Player has stood (or doubled down and survived the draw).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural 21 from the opening deal.
    Blackjack,
}

impl HandStatus {
    /// Returns whether no further decisions are taken on the hand.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    id: usize,
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
    doubled: bool,
    from_split: bool,
    outcome: Option<HandOutcome>,
    payout: isize,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            cards: Vec::new(),
            status: HandStatus::Active,
            bet: 0,
            doubled: false,
            from_split: false,
            outcome: None,
            payout: 0,
        }
    }

    /// Creates the sibling hand produced by a split, holding the moved card
    /// and the mirrored bet.
    #[must_use]
    pub fn from_split(id: usize, card: Card, bet: usize) -> Self {
        Self {
            id,
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            doubled: false,
            from_split: true,
            outcome: None,
            payout: 0,
        }
    }

    /// Returns the hand number within the player's hands (starting at 1).
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Adds a card to the hand.
    ///
    /// The hand busts when its score passes 21, and becomes a blackjack when
    /// two cards make 21, split hands included.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.score();
        if value > 21 {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == 21 {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the amount staked on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Adds to the amount staked on this hand.
    pub const fn add_bet(&mut self, amount: usize) {
        self.bet += amount;
    }

    /// Doubles the stake and marks the hand as doubled down.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the settled outcome, if the round has been settled.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Returns the net payout of the settled hand (negative for a loss).
    #[must_use]
    pub const fn payout(&self) -> isize {
        self.payout
    }

    /// Official score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Score with every Ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        min_score(&self.cards)
    }

    /// Returns whether an Ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand is exactly two cards of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank == second.rank)
    }

    /// Rank of the pair, if the hand is a pair.
    #[must_use]
    pub fn pair_rank(&self) -> Option<Rank> {
        self.is_pair().then(|| self.cards[0].rank)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits off the second card and marks this hand as a split hand.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.is_pair() {
            self.from_split = true;
            self.cards.pop()
        } else {
            None
        }
    }

    /// Settles the hand: records the outcome and moves the stake off the
    /// table. Returns the amount credited back to the bankroll.
    pub fn settle(&mut self, outcome: HandOutcome) -> usize {
        let bet = self.bet;
        self.outcome = Some(outcome);
        self.bet = 0;

        #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
        let stake = bet as isize;
        match outcome {
            HandOutcome::Win => {
                self.payout = stake;
                bet * 2
            }
            HandOutcome::Blackjack => {
                self.payout = 2 * stake;
                bet * 3
            }
            HandOutcome::Tie => {
                self.payout = 0;
                bet
            }
            HandOutcome::Lose | HandOutcome::Bust => {
                self.payout = -stake;
                0
            }
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card and stays face down
/// until the outcome; the second is the up-card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-down card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Official score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Score with every Ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        min_score(&self.cards)
    }

    /// Returns whether the dealer has to take another card: below 17, or a
    /// soft 17.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        let value = self.score();
        value <= 16 || (value == 17 && self.min_score() != 17)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
