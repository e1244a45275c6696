use alloc::string::String;

use tracing::info;

use crate::error::{DecisionError, RoundError};
use crate::event::{Event, EventSink};
use crate::strategy::BetDecision;

use super::{DEALER, RoundEngine, Stage};

impl RoundEngine {
    /// Removes players who quit or went broke, reporting their record.
    fn remove_leavers(&mut self, sink: &mut dyn EventSink) {
        self.players.retain(|player| {
            if player.has_quit() {
                info!(name = player.name(), cash = player.cash(), "player leaves the table");
                sink.emit(Event::Left {
                    name: player.name().into(),
                    record: player.record(),
                });
                false
            } else {
                true
            }
        });
    }

    /// Calls for bets. Each player stakes a bet, which leaves their bankroll
    /// at once, or quits and is removed from the table.
    ///
    /// Returns [`Stage::OpeningDeal`] when at least one bet is on the table,
    /// or [`Stage::Closed`] when nobody is left.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, or a strategy fails or
    /// stakes more than it holds.
    pub fn betting(&mut self, sink: &mut dyn EventSink) -> Result<Stage, RoundError> {
        if !matches!(self.stage, Stage::Start | Stage::Outcome | Stage::Closed) {
            return Err(RoundError::InvalidStage {
                expected: Stage::Outcome,
                found: self.stage,
            });
        }

        self.remove_leavers(sink);
        if self.players.is_empty() {
            self.enter(Stage::Closed, sink);
            return Ok(Stage::Closed);
        }

        self.dealer.clear();
        self.enter(Stage::Betting, sink);

        let default_bet = self.options.default_bet;
        let counter = self.counter;
        for player in &mut self.players {
            player.reset_hands();
            match player.decide_bet(default_bet, counter)? {
                BetDecision::Bet(amount) => {
                    if !player.place_bet(amount) {
                        return Err(DecisionError::InvalidBet {
                            bet: amount,
                            bankroll: player.cash(),
                        }
                        .into());
                    }
                    info!(name = player.name(), bet = amount, "bet placed");
                }
                BetDecision::Quit => player.quit(),
            }
        }

        self.remove_leavers(sink);
        if self.players.is_empty() {
            self.enter(Stage::Closed, sink);
            return Ok(Stage::Closed);
        }
        Ok(Stage::OpeningDeal)
    }

    /// Deals two cards to each player's first hand and two to the dealer,
    /// one card per seat per pass, players first. The dealer's first card is
    /// dealt face down.
    ///
    /// # Errors
    ///
    /// Returns an error if bets have not been called, nobody is seated, or
    /// the shoe runs out.
    pub fn opening_deal(&mut self, sink: &mut dyn EventSink) -> Result<(), RoundError> {
        self.ensure_stage(Stage::Betting)?;
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }
        self.enter(Stage::OpeningDeal, sink);

        for pass in 0..2 {
            for seat in 0..self.players.len() {
                let card = self.deal_card(sink)?;
                let player = &mut self.players[seat];
                if let Some(hand) = player.hands_mut().first_mut() {
                    hand.add_card(card);
                }
                sink.emit(Event::CardDealt {
                    name: player.name().into(),
                    card: Some(card),
                });
            }

            let card = self.deal_card(sink)?;
            self.dealer.add_card(card);
            sink.emit(Event::CardDealt {
                name: String::from(DEALER),
                card: (pass > 0).then_some(card),
            });
        }

        self.show_table(sink);
        Ok(())
    }
}
