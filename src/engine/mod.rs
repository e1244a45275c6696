//! Round engine: owns the shoe, the seats, the dealer and the count, and
//! runs each round through its stages.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::counter::CardCounter;
use crate::error::{ConfigError, RoundError};
use crate::event::{Event, EventSink, HandView};
use crate::hand::{DealerHand, Hand};
use crate::options::{GameOptions, ReshuffleMode};
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::{Shoe, cut_position};
use crate::strategy::DecisionStrategy;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Stage;

const DEALER: &str = "Dealer";

/// A blackjack table that plays rounds from betting through settlement.
///
/// The engine is single-threaded and turn-based: each phase method runs to
/// completion, asking seats for decisions through their
/// [`DecisionStrategy`] and reporting what happens to an [`EventSink`].
///
/// # Example
///
/// ```
/// use bjround::{GameOptions, NullSink, RoundEngine, StandOnly};
///
/// let mut engine = RoundEngine::new(GameOptions::default(), 42).unwrap();
/// engine.join("Robo", Box::new(StandOnly::new(3)));
/// let rounds = engine.run(&mut NullSink).unwrap();
/// assert_eq!(rounds, 3);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    options: GameOptions,
    shoe: Shoe,
    players: Vec<Player>,
    dealer: DealerHand,
    counter: CardCounter,
    cards_dealt: usize,
    cut_position: usize,
    stage: Stage,
    rng: ChaCha8Rng,
}

impl RoundEngine {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);
        let cut_position = cut_position(shoe.len(), options.cut_range.clone(), &mut rng);

        Ok(Self {
            options,
            shoe,
            players: Vec::new(),
            dealer: DealerHand::new(),
            counter: CardCounter::new(),
            cards_dealt: 0,
            cut_position,
            stage: Stage::Start,
            rng,
        })
    }

    /// Replaces the shoe, e.g. with a stacked one. The count and the
    /// dealt-card tally start over.
    pub fn install_shoe(&mut self, shoe: Shoe) {
        self.cut_position = cut_position(shoe.len(), self.options.cut_range.clone(), &mut self.rng);
        self.shoe = shoe;
        self.counter.reset();
        self.cards_dealt = 0;
    }

    fn replace_shoe(&mut self) {
        let shoe = Shoe::shuffled(self.options.decks, &mut self.rng);
        info!(
            cards_dealt = self.cards_dealt,
            running_count = self.counter.running_count(),
            "cut card reached, new shoe in play"
        );
        self.install_shoe(shoe);
    }

    /// Deals the next card from the shoe and counts it.
    ///
    /// Under [`ReshuffleMode::Continuous`] the card goes back to the bottom of
    /// the shoe and the count starts over after each full pass; under
    /// [`ReshuffleMode::CutCard`] the shoe is replaced once the cut card is
    /// reached.
    fn deal_card(&mut self, sink: &mut dyn EventSink) -> Result<Card, RoundError> {
        let card = self.shoe.draw().ok_or(RoundError::EmptyShoe)?;
        self.cards_dealt += 1;
        self.counter.update(&card, self.cards_dealt, self.options.decks);
        debug!(
            %card,
            running_count = self.counter.running_count(),
            true_count = self.counter.true_count(),
            "card dealt"
        );

        match self.options.reshuffle {
            ReshuffleMode::Continuous => {
                self.shoe.put_back(card);
                if self.cards_dealt >= self.shoe.len() {
                    debug!("shoe cycled, count restarts");
                    self.counter.reset();
                    self.cards_dealt = 0;
                }
            }
            ReshuffleMode::CutCard => {
                if self.cards_dealt >= self.cut_position {
                    sink.emit(Event::ShoeReplaced);
                    self.replace_shoe();
                }
            }
        }

        Ok(card)
    }

    /// Seats a player with the table's starting cash.
    pub fn join(&mut self, name: impl Into<String>, strategy: Box<dyn DecisionStrategy>) {
        let player = Player::new(name, self.options.starting_cash, strategy);
        self.add_player(player);
    }

    /// Seats a player.
    pub fn add_player(&mut self, player: Player) {
        info!(name = player.name(), cash = player.cash(), "player seated");
        self.players.push(player);
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a seated player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    /// Returns whether anyone is left at the table.
    #[must_use]
    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the count of the current shoe.
    #[must_use]
    pub const fn counter(&self) -> CardCounter {
        self.counter
    }

    /// Returns the number of cards dealt from the current shoe.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.cards_dealt
    }

    /// Returns how many cards the current shoe deals before it is replaced.
    #[must_use]
    pub const fn cut_position(&self) -> usize {
        self.cut_position
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    fn ensure_stage(&self, expected: Stage) -> Result<(), RoundError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidStage {
                expected,
                found: self.stage,
            })
        }
    }

    fn enter(&mut self, stage: Stage, sink: &mut dyn EventSink) {
        info!(%stage, "stage");
        self.stage = stage;
        sink.emit(Event::Stage(stage));
    }

    fn show_table(&self, sink: &mut dyn EventSink) {
        let revealed = self.stage == Stage::Outcome;
        for player in &self.players {
            for hand_view in hand_views(player, revealed) {
                sink.emit(Event::Hand(hand_view));
            }
        }
        sink.emit(Event::Dealer {
            cards: self.dealer.cards().to_vec(),
            revealed: self.dealer.is_hole_revealed(),
        });
    }

    /// Plays one full round: betting, opening deal, decisions, dealer play
    /// and settlement.
    ///
    /// Returns `None` when every player left during betting.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase fails; the round is abandoned.
    pub fn play_round(
        &mut self,
        sink: &mut dyn EventSink,
    ) -> Result<Option<RoundResult>, RoundError> {
        if self.betting(sink)? == Stage::Closed {
            return Ok(None);
        }
        self.opening_deal(sink)?;
        self.deciding(sink)?;
        self.dealer_play(sink)?;
        self.settle(sink).map(Some)
    }

    /// Plays rounds until every player has left. Returns the number of
    /// rounds played.
    ///
    /// # Errors
    ///
    /// Returns the first error a round raises.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<usize, RoundError> {
        sink.emit(Event::Stage(Stage::Start));
        let mut rounds = 0;
        while self.play_round(sink)?.is_some() {
            rounds += 1;
        }
        sink.emit(Event::TableEmpty);
        Ok(rounds)
    }
}

/// Table view of one of `player`'s hands. Split hands are numbered; a
/// doubled hand keeps its last card face down until `revealed`.
fn hand_view(player: &Player, hand: &Hand, revealed: bool) -> HandView {
    HandView {
        name: player.name().into(),
        hand_id: (player.hands().len() > 1).then_some(hand.id()),
        cards: hand.cards().to_vec(),
        score: hand.score(),
        hide_last: hand.is_doubled() && !revealed,
    }
}

fn hand_views(player: &Player, revealed: bool) -> impl Iterator<Item = HandView> + '_ {
    player
        .hands()
        .iter()
        .map(move |hand| hand_view(player, hand, revealed))
}
