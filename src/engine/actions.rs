use alloc::collections::VecDeque;

use tracing::{info, warn};

use crate::card::Card;
use crate::error::RoundError;
use crate::event::{Event, EventSink};
use crate::hand::{Hand, HandStatus};
use crate::strategy::{Action, Dialog};

use super::{RoundEngine, Stage, hand_view};

impl RoundEngine {
    /// Lets every player play out their hands, seat by seat.
    ///
    /// Hands created by a split join the back of the player's queue and are
    /// played after the hand they came from.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening deal has not happened, a strategy
    /// fails or picks an action that is not offered, or the shoe runs out.
    pub fn deciding(&mut self, sink: &mut dyn EventSink) -> Result<(), RoundError> {
        self.ensure_stage(Stage::OpeningDeal)?;
        let up_card = self
            .dealer
            .up_card()
            .copied()
            .ok_or(RoundError::MissingUpCard)?;
        self.enter(Stage::Deciding, sink);

        for seat in 0..self.players.len() {
            sink.emit(Event::PlayerTurn {
                name: self.players[seat].name().into(),
            });

            let mut queue: VecDeque<usize> = (0..self.players[seat].hands().len()).collect();
            while let Some(index) = queue.pop_front() {
                self.play_hand(seat, index, up_card, &mut queue, sink)?;
            }
        }

        Ok(())
    }

    /// Asks for actions on one hand until it stands, busts or is a
    /// blackjack.
    fn play_hand(
        &mut self,
        seat: usize,
        index: usize,
        up_card: Card,
        queue: &mut VecDeque<usize>,
        sink: &mut dyn EventSink,
    ) -> Result<(), RoundError> {
        loop {
            let counter = self.counter;
            let player = &mut self.players[seat];
            if player
                .hands()
                .get(index)
                .is_none_or(|hand| hand.status() != HandStatus::Active)
            {
                return Ok(());
            }
            let Some(decision) = player.decide_action(index, up_card, counter) else {
                return Ok(());
            };
            let (action, dialog) = decision?;

            if !dialog.offers(action) {
                warn!(name = player.name(), %action, %dialog, "action not offered");
                return Err(RoundError::ActionNotOffered { action, dialog });
            }
            info!(name = player.name(), hand = index + 1, %action, "action");

            match action {
                Action::Hit => self.hit(seat, index, sink)?,
                Action::Stand => self.hand_mut(seat, index).set_status(HandStatus::Stand),
                Action::DoubleDown => self.double_down(seat, index, sink)?,
                Action::Split => self.split(seat, index, dialog, queue, sink)?,
            }

            self.show_hand(seat, index, sink);
        }
    }

    fn show_hand(&self, seat: usize, index: usize, sink: &mut dyn EventSink) {
        let player = &self.players[seat];
        if let Some(hand) = player.hands().get(index) {
            sink.emit(Event::Hand(hand_view(player, hand, false)));
        }
    }

    fn hand_mut(&mut self, seat: usize, index: usize) -> &mut Hand {
        &mut self.players[seat].hands_mut()[index]
    }

    fn deal_to(
        &mut self,
        seat: usize,
        index: usize,
        face_up: bool,
        sink: &mut dyn EventSink,
    ) -> Result<(), RoundError> {
        let card = self.deal_card(sink)?;
        self.hand_mut(seat, index).add_card(card);
        sink.emit(Event::CardDealt {
            name: self.players[seat].name().into(),
            card: face_up.then_some(card),
        });
        Ok(())
    }

    fn hit(&mut self, seat: usize, index: usize, sink: &mut dyn EventSink) -> Result<(), RoundError> {
        self.deal_to(seat, index, true, sink)
    }

    /// Doubles the stake and deals exactly one face-down card, then stands.
    fn double_down(
        &mut self,
        seat: usize,
        index: usize,
        sink: &mut dyn EventSink,
    ) -> Result<(), RoundError> {
        let player = &mut self.players[seat];
        let bet = player.hands()[index].bet();
        if !player.stake_more(bet) {
            return Err(RoundError::InsufficientFunds);
        }
        self.hand_mut(seat, index).double_bet();

        self.deal_to(seat, index, false, sink)?;
        let hand = self.hand_mut(seat, index);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        Ok(())
    }

    /// Moves the second card of a pair to a new hand with a matching stake,
    /// then deals one card to each.
    fn split(
        &mut self,
        seat: usize,
        index: usize,
        dialog: Dialog,
        queue: &mut VecDeque<usize>,
        sink: &mut dyn EventSink,
    ) -> Result<(), RoundError> {
        let not_offered = RoundError::ActionNotOffered {
            action: Action::Split,
            dialog,
        };
        let player = &mut self.players[seat];
        let hand = &player.hands()[index];
        if !hand.is_pair() {
            return Err(not_offered);
        }
        let bet = hand.bet();
        if !player.stake_more(bet) {
            return Err(RoundError::InsufficientFunds);
        }

        let hands = player.hands_mut();
        let Some(card) = hands[index].take_split_card() else {
            return Err(not_offered);
        };
        let sibling = hands.len();
        hands.push(Hand::from_split(sibling + 1, card, bet));

        self.deal_to(seat, index, true, sink)?;
        self.deal_to(seat, sibling, true, sink)?;
        self.show_hand(seat, sibling, sink);
        queue.push_back(sibling);
        Ok(())
    }
}
