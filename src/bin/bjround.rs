//! Interactive blackjack at the console.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=bjround=debug`) to trace the engine on
//! stderr.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::console::{ConsoleSink, Human, StdinLines, read_ai_seat, read_human_seat};
use bjround::{ConfigError, DecisionError, GameOptions, ReshuffleMode, RoundEngine, RoundError};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of human players
    #[arg(long, default_value_t = 1)]
    human_players: usize,

    /// Number of AI players
    #[arg(long, default_value_t = 0)]
    ai_players: usize,

    /// Number of decks in the shoe
    #[arg(long, default_value_t = 6)]
    deck_count: u8,

    /// Seed for the shuffle; taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Return dealt cards to the shoe instead of dealing to a cut card
    #[arg(long)]
    continuous: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    let reshuffle = if args.continuous {
        ReshuffleMode::Continuous
    } else {
        ReshuffleMode::CutCard
    };
    let options = GameOptions::default()
        .with_decks(args.deck_count)
        .with_reshuffle(reshuffle);

    let mut engine = match RoundEngine::new(options, seed) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("cannot create new blackjack game, {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(seed, "table opened");

    let mut input = StdinLines;
    let mut output = io::stdout();
    for index in 0..args.human_players {
        match read_human_seat(&mut input, &mut output, index) {
            Ok(seat) => engine.join(seat.name(), Box::new(Human::new(StdinLines, io::stdout()))),
            Err(err) => eprintln!("unable to add player, {err}"),
        }
    }
    for index in 0..args.ai_players {
        match read_ai_seat(&mut input, &mut output, index) {
            Ok(seat) => {
                if let Some(strategy) = seat.ai_strategy() {
                    engine.join(seat.name(), strategy);
                }
            }
            Err(err) => eprintln!("unable to add AI player, {err}"),
        }
    }

    if !engine.has_players() {
        eprintln!("{}", ConfigError::NoPlayers);
        return ExitCode::FAILURE;
    }

    let mut sink = ConsoleSink::new(io::stdout());
    match engine.run(&mut sink) {
        Ok(rounds) => {
            info!(rounds, "table closed");
            ExitCode::SUCCESS
        }
        Err(RoundError::Decision(DecisionError::InputClosed)) => {
            info!("input closed, leaving the table");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "round aborted");
            eprintln!("round aborted, {err}");
            ExitCode::FAILURE
        }
    }
}
