//! Console entry point: best-of-three against a random opponent.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rpsls::core::{GameRng, MatchConfig, Move};
use rpsls::engine::{run_match, RandomOpponent};
use rpsls::rules::RuleTable;
use rpsls::{Console, GameError};

/// Rock, Paper, Scissors, Lizard, Spock against the computer.
#[derive(Debug, Parser)]
#[command(name = "rpsls", version, about)]
struct Args {
    /// Rounds per game (odd). The first side to win a majority takes the game.
    #[arg(long, default_value_t = 3)]
    best_of: u8,

    /// Seed for the computer's moves, to replay a session.
    #[arg(long)]
    seed: Option<u64>,

    /// Log engine decisions to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = MatchConfig::new().with_best_of(args.best_of)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let table = RuleTable::<Move>::canonical()?;

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), best_of = config.best_of(), "starting match");
    let mut computer: RandomOpponent<Move> = RandomOpponent::new(rng);

    let mut console = Console::stdio();
    run_match(&table, config, &mut console, &mut computer)?;
    Ok(())
}
