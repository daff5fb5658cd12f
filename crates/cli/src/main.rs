// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerhand command line evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use pokerhand_eval::{Deck, Evaluator, LastResult};

pub mod input;
pub mod session;

use session::{Format, Session};

#[derive(Debug, Parser)]
#[clap(version, about = "Finds the best poker hand in 5 to 7 cards.")]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate 5 to 7 cards, e.g. `eval AS KS QS JS 10S`.
    Eval {
        /// The cards tokens.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Deal random cards from a shuffled deck and evaluate them.
    Random {
        /// Number of cards to deal.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Seed for the deck shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Read commands from stdin, type `help` for the commands list.
    Session,
}

/// Application config.
#[derive(Debug)]
struct Config {
    /// The output format.
    format: Format,
    /// The command to run.
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        format: if cli.json { Format::Json } else { Format::Text },
        command: cli.command,
    };

    run(config)
}

fn run(config: Config) -> Result<()> {
    let session = Session::new(Evaluator::new(LastResult::new()), config.format);
    let mut stdout = io::stdout().lock();

    match config.command {
        Command::Eval { cards } => {
            session.evaluate(&cards, &mut stdout)?;
        }
        Command::Random { cards, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let pool = Deck::new_and_shuffled(&mut rng)
                .deal_many(cards as usize)
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>();
            info!("Dealt {}", pool.join(" "));

            session.evaluate(&pool, &mut stdout)?;
        }
        Command::Session => {
            session.run(io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}
