//! Table events the engine reports as a round unfolds, and the sink that
//! receives them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::engine::Stage;
use crate::player::Record;
use crate::result::HandOutcome;

/// A hand as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Owner's name.
    pub name: String,
    /// Hand number, shown once the player holds more than one hand.
    pub hand_id: Option<usize>,
    /// Cards in dealing order.
    pub cards: Vec<Card>,
    /// Current score.
    pub score: u8,
    /// Whether the last card is face down (a double down before the
    /// outcome).
    pub hide_last: bool,
}

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new stage began.
    Stage(Stage),
    /// A player's turn to decide began.
    PlayerTurn {
        /// The deciding player.
        name: String,
    },
    /// The cut card was reached and a fresh shoe is in play.
    ShoeReplaced,
    /// A card was dealt. `card` is `None` when it was dealt face down.
    CardDealt {
        /// Who received the card.
        name: String,
        /// The card, if dealt face up.
        card: Option<Card>,
    },
    /// A player's hand.
    Hand(HandView),
    /// The dealer's hand. Until `revealed`, the hole card is hidden.
    Dealer {
        /// The dealer's cards, hole card first.
        cards: Vec<Card>,
        /// Whether the hole card is face up.
        revealed: bool,
    },
    /// A hand was settled.
    Settled {
        /// The hand owner.
        name: String,
        /// The hand outcome.
        outcome: HandOutcome,
        /// Net win or loss for the hand.
        payout: isize,
        /// The owner's cash after payout.
        cash: usize,
    },
    /// A player left the table.
    Left {
        /// The player leaving.
        name: String,
        /// The player's lifetime record.
        record: Record,
    },
    /// Nobody is left to play.
    TableEmpty,
}

fn write_banner(f: &mut fmt::Formatter<'_>, message: &str) -> fmt::Result {
    let width = message.len() + 4;
    writeln!(f, "{:*<width$}", "")?;
    writeln!(f, "* {message} *")?;
    write!(f, "{:*<width$}", "")
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for card in cards {
        write!(f, "[{card}]")?;
    }
    Ok(())
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(id) = self.hand_id {
            write!(f, " hand #{id}")?;
        }

        match self.cards.split_last() {
            Some((_, shown)) if self.hide_last => {
                f.write_str(" has ???: ")?;
                write_cards(f, shown)?;
                f.write_str("[???]")
            }
            _ => {
                write!(f, " has {}: ", self.score)?;
                write_cards(f, &self.cards)
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stage(stage) => write_banner(f, stage.message()),
            Self::PlayerTurn { name } => {
                let mut message = name.to_uppercase();
                message.push_str(" MAKE YOUR CHOICE");
                write_banner(f, &message)
            }
            Self::ShoeReplaced => write_banner(f, "NEW DECK INCOMING"),
            Self::CardDealt { name, card: Some(card) } => write!(f, "{name} is dealt the [{card}]"),
            Self::CardDealt { name, card: None } => write!(f, "{name} is dealt a [???]"),
            Self::Hand(view) => view.fmt(f),
            Self::Dealer { cards, revealed } => {
                if *revealed {
                    write!(f, "Dealer has {}: ", crate::hand::score(cards))?;
                    write_cards(f, cards)
                } else {
                    f.write_str("Dealer has ???: [???]")?;
                    write_cards(f, cards.get(1..).unwrap_or_default())
                }
            }
            Self::Settled {
                name,
                outcome,
                payout,
                cash,
            } => {
                writeln!(f, "{}", outcome.verdict())?;
                match outcome {
                    HandOutcome::Tie => write!(f, "{name} push")?,
                    _ if *payout >= 0 => write!(f, "{name} won ${payout}")?,
                    _ => write!(f, "{name} lost ${}", payout.unsigned_abs())?,
                }
                write!(f, ".  Cash available: ${cash}")
            }
            Self::Left { name, record } => {
                writeln!(f, "{name} leaves the table.")?;
                record.fmt(f)
            }
            Self::TableEmpty => f.write_str("No players left in game.  Exiting..."),
        }
    }
}

/// Receives table events in order.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}
