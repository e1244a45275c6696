use alloc::string::String;
use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::error::RoundError;
use crate::event::{Event, EventSink};
use crate::hand::{Hand, HandStatus};
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};

use super::{DEALER, RoundEngine, Stage};

/// Outcome of a hand against the dealer's final score.
fn judge(hand: &Hand, dealer_value: u8) -> HandOutcome {
    match hand.status() {
        HandStatus::Bust => HandOutcome::Bust,
        HandStatus::Blackjack => HandOutcome::Blackjack,
        HandStatus::Active | HandStatus::Stand => {
            let value = hand.score();
            if dealer_value > 21 || value > dealer_value {
                HandOutcome::Win
            } else if value < dealer_value {
                HandOutcome::Lose
            } else {
                HandOutcome::Tie
            }
        }
    }
}

impl RoundEngine {
    /// Checks if any player has a hand still playing against the dealer.
    fn any_live_hands(&self) -> bool {
        self.players.iter().any(|player| player.has_live_hand())
    }

    /// Dealer plays their hand: draws while the score is 16 or less, or a
    /// soft 17.
    ///
    /// The dealer does not draw when every player hand is bust or a
    /// blackjack. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if players are still deciding or the shoe runs out.
    pub fn dealer_play(&mut self, sink: &mut dyn EventSink) -> Result<Vec<Card>, RoundError> {
        self.ensure_stage(Stage::Deciding)?;
        self.enter(Stage::DealerPlay, sink);

        let mut drawn_cards = Vec::new();
        if !self.any_live_hands() {
            return Ok(drawn_cards);
        }

        while self.dealer.must_draw() {
            let card = self.deal_card(sink)?;
            self.dealer.add_card(card);
            sink.emit(Event::CardDealt {
                name: String::from(DEALER),
                card: Some(card),
            });
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Reveals the dealer's hand and settles every player hand against it.
    ///
    /// Winnings are credited to each bankroll and tallied in the player's
    /// record; a player left with no cash is flagged to leave.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played.
    pub fn settle(&mut self, sink: &mut dyn EventSink) -> Result<RoundResult, RoundError> {
        self.ensure_stage(Stage::DealerPlay)?;
        self.dealer.reveal_hole();
        self.enter(Stage::Outcome, sink);
        self.show_table(sink);

        let dealer_value = self.dealer.score();
        let dealer_bust = self.dealer.is_bust();
        let mut player_results = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            let bets: Vec<usize> = player.hands().iter().map(Hand::bet).collect();
            player.settle_hands(|hand| judge(hand, dealer_value));

            let mut hand_results = Vec::with_capacity(bets.len());
            for (hand, bet) in player.hands().iter().zip(bets) {
                let Some(outcome) = hand.outcome() else {
                    continue;
                };
                info!(
                    name = player.name(),
                    hand = hand.id(),
                    %outcome,
                    payout = hand.payout(),
                    "hand settled"
                );
                sink.emit(Event::Settled {
                    name: player.name().into(),
                    outcome,
                    payout: hand.payout(),
                    cash: player.cash(),
                });
                hand_results.push(HandResult {
                    hand_id: hand.id(),
                    outcome,
                    bet,
                    payout: hand.payout(),
                    player_value: hand.score(),
                    dealer_value,
                });
            }

            player_results.push(PlayerResult {
                name: player.name().into(),
                hands: hand_results,
                net: player.net(),
                cash: player.cash(),
            });
        }

        Ok(RoundResult {
            players: player_results,
            dealer_value,
            dealer_bust,
            dealer_drew: self.dealer.len() > 2,
        })
    }
}
