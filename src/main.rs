//! Terminal Wordle - CLI
//!
//! Guess the hidden five-letter word in six attempts.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::run_play,
    config::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    game::Game,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line (built-in list if missing or unusable)
    dictionary: Option<PathBuf>,

    /// Word list tried when DICTIONARY is not given or cannot be loaded
    #[arg(long, env = "WORDLE_DICTIONARY")]
    default_dictionary: Option<PathBuf>,

    /// Number of attempts per game
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS as u8,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    max_attempts: u8,

    /// Seed for choosing the secret word (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dictionary: cli.dictionary,
            default_dictionary: cli.default_dictionary,
            max_attempts: usize::from(cli.max_attempts),
            seed: cli.seed,
            ..Self::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    let config = GameConfig::from(cli);

    let dictionary = config.load_dictionary();
    let mut rng = config.rng();
    let mut game = Game::random(&dictionary, &mut rng, config.max_attempts)
        .context("no words available to choose a secret from")?;

    // Won, lost and aborted games all exit successfully
    run_play(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
