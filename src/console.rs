//! Console play: a human seat that answers prompts line by line, an event
//! sink that prints the table, and the interactive seat setup.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use crate::counter::CardCounter;
use crate::error::{ConfigError, DecisionError};
use crate::event::{Event, EventSink};
use crate::options::{SeatConfig, parse_rounds};
use crate::strategy::{
    Action, AiKind, BetDecision, BetView, DecisionStrategy, Dialog, TableView, advise_offered,
};

/// Errors while configuring seats at the console.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The answers do not make a valid seat.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The console could not be read or written.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// A source of answer lines.
pub trait InputSource {
    /// Reads the next line without its line ending, or `None` at end of
    /// input.
    ///
    /// # Errors
    ///
    /// Returns any error of the underlying reader.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<B: BufRead> InputSource for B {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Standard input, shared by every seat that reads from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinLines;

impl InputSource for StdinLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        io::stdin().lock().next_line()
    }
}

fn io_error(err: &io::Error) -> DecisionError {
    DecisionError::Io(err.to_string())
}

/// A seat played by a person at the console.
///
/// Besides the dialog's letters, `c` shows the card count and `?` shows
/// the basic-strategy hint. Invalid answers are asked again.
#[derive(Debug)]
pub struct Human<I, W> {
    input: I,
    output: W,
}

impl<I: InputSource, W: Write> Human<I, W> {
    /// Creates a seat answering from `input` and prompting on `output`.
    pub const fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Returns what the seat has written.
    pub const fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, DecisionError> {
        write!(self.output, "{prompt}").map_err(|err| io_error(&err))?;
        self.output.flush().map_err(|err| io_error(&err))?;
        match self.input.next_line() {
            Ok(Some(line)) => Ok(line.trim().to_lowercase()),
            Ok(None) => Err(DecisionError::InputClosed),
            Err(err) => Err(io_error(&err)),
        }
    }

    fn say(&mut self, message: &str) -> Result<(), DecisionError> {
        writeln!(self.output, "{message}").map_err(|err| io_error(&err))
    }

    fn show_count(&mut self, counter: CardCounter) -> Result<(), DecisionError> {
        self.say(&counter.to_string())
    }
}

/// Maps an action letter to the action it names.
fn parse_action(answer: &str) -> Option<Action> {
    [Action::Hit, Action::Stand, Action::DoubleDown, Action::Split]
        .into_iter()
        .find(|action| answer.len() == 1 && answer.starts_with(action.letter()))
}

impl<I: InputSource, W: Write> DecisionStrategy for Human<I, W> {
    fn place_bet(&mut self, view: &BetView<'_>) -> Result<BetDecision, DecisionError> {
        loop {
            let prompt = format!(
                "{} has ${} {} ",
                view.player,
                view.bankroll,
                Dialog::BetOrQuit.prompt()
            );
            match self.ask(&prompt)?.as_str() {
                "" | "b" => break,
                "q" => return Ok(BetDecision::Quit),
                "c" => self.show_count(view.counter)?,
                _ => {}
            }
        }

        loop {
            let prompt = format!(
                "{} has ${} {} ($1 to ${} [${}]): $",
                view.player,
                view.bankroll,
                Dialog::PlaceYourBet.prompt(),
                view.bankroll,
                view.last_bet
            );
            let answer = self.ask(&prompt)?;
            let bet = match answer.as_str() {
                "" => Some(view.last_bet),
                "c" => {
                    self.show_count(view.counter)?;
                    continue;
                }
                other => other.parse().ok(),
            };

            match bet {
                Some(bet) if (1..=view.bankroll).contains(&bet) => {
                    return Ok(BetDecision::Bet(bet));
                }
                _ => self.say(&format!(
                    "Bet must be a whole number from 1 to {}",
                    view.bankroll
                ))?,
            }
        }
    }

    fn choose_action(&mut self, view: &TableView<'_>) -> Result<Action, DecisionError> {
        loop {
            let prompt = format!("{} {}", view.player, view.dialog.prompt());
            let answer = self.ask(&prompt)?;
            match answer.as_str() {
                "c" => self.show_count(view.counter)?,
                "?" => {
                    let hint = advise_offered(view);
                    self.say(&format!("The suggested action is to {hint}"))?;
                }
                letter => match parse_action(letter) {
                    Some(action) if view.dialog.offers(action) => return Ok(action),
                    _ => {}
                },
            }
        }
    }
}

/// Prints table events.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    output: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink printing to `output`.
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Returns the output.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: Event) {
        let written = match event {
            Event::Stage(_) | Event::PlayerTurn { .. } | Event::ShoeReplaced => {
                writeln!(self.output, "\n{event}\n")
            }
            _ => writeln!(self.output, "{event}"),
        };
        if let Err(err) = written {
            warn!(%err, "failed to print event");
        }
    }
}

fn ask_with_default<I: InputSource, W: Write>(
    input: &mut I,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, SetupError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    Ok(input
        .next_line()?
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty()))
}

/// Asks for the name of human seat number `index` (from zero).
///
/// # Errors
///
/// Returns an error if the console fails.
pub fn read_human_seat<I: InputSource, W: Write>(
    input: &mut I,
    output: &mut W,
    index: usize,
) -> Result<SeatConfig, SetupError> {
    let default_name = format!("Player{}", index + 1);
    let prompt = format!("{default_name} enter your name [{default_name}]: ");
    let name = ask_with_default(input, output, &prompt)?.unwrap_or(default_name);
    Ok(SeatConfig::Human { name })
}

/// Asks for the name, kind and round count of computer seat number
/// `index` (from zero). An unknown kind is asked again.
///
/// # Errors
///
/// Returns an error if the round count is not a number or the console
/// fails.
pub fn read_ai_seat<I: InputSource, W: Write>(
    input: &mut I,
    output: &mut W,
    index: usize,
) -> Result<SeatConfig, SetupError> {
    let default_name = format!("AiPlayer{}", index + 1);
    let prompt = format!("{default_name} enter your name [{default_name}]: ");
    let name = ask_with_default(input, output, &prompt)?.unwrap_or(default_name);

    let kind = loop {
        let answer = ask_with_default(
            input,
            output,
            "Select AI Type (B)asic Strategy, (S)tandOnly or (X)custom [B]: ",
        )?
        .unwrap_or_default();
        match answer.parse::<AiKind>() {
            Ok(kind) => break kind,
            Err(err) => writeln!(output, "{err}")?,
        }
    };

    let answer = ask_with_default(input, output, "Enter number of rounds the AI plays: ")?
        .unwrap_or_default();
    let rounds = parse_rounds(&answer)?;

    Ok(SeatConfig::Ai { name, kind, rounds })
}
