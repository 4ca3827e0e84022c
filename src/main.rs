#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::process::ExitCode;

use clap::Parser;
use nobles::{Color, PawnAttacks, Rules, fuzz, repl};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Plays chess in the terminal, or cross-checks the move generator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// What a pawn contributes when asking whether a square is attacked.
    #[arg(long, value_enum, default_value_t)]
    pawn_attacks: PawnAttacks,
    /// Side shown at the bottom of the board.
    #[arg(long, value_enum, default_value_t)]
    view: Color,
    /// Plays this many random games against the reference generator instead
    /// of starting the game.
    #[arg(long, value_name = "GAMES")]
    fuzz: Option<usize>,
    /// Seed for `--fuzz`, random if omitted.
    #[arg(long, requires = "fuzz")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let rules = Rules {
        pawn_attacks: config.pawn_attacks,
    };
    if let Some(games) = config.fuzz {
        match fuzz::fuzz(games, config.seed, rules) {
            Ok(report) => {
                println!(
                    "{} games, {} plies, {} checkmates, no mismatch",
                    report.games, report.plies, report.checkmates
                );
                ExitCode::SUCCESS
            }
            Err(mismatch) => {
                error!(%mismatch, "move generators disagree");
                eprintln!("{mismatch}");
                ExitCode::FAILURE
            }
        }
    } else if let Err(err) = repl::repl(rules, config.view) {
        error!(%err, "terminal session failed");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
