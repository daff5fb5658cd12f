// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_random -- --pools 1000000 --cards 7
// ```
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use pokerhand_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random pools to evaluate.
    #[clap(long, short, default_value_t = 1_000_000)]
    pools: usize,
    /// Number of cards in each pool.
    #[clap(long, short, default_value_t = 7, value_parser = value_parser!(u8).range(5..=7))]
    cards: u8,
    /// Seed for the deck shuffles.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), EvalError> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut counts = [0usize; 10];

    let now = Instant::now();

    for _ in 0..cli.pools {
        let pool = Deck::new_and_shuffled(&mut rng).deal_many(cli.cards as usize);
        let best = best_hand(&pool)?;
        counts[best.category as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total pools      {}", cli.pools);
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Pools/sec:       {:.0}\n", cli.pools as f64 / elapsed);

    for category in Category::categories() {
        let count = counts[category as usize];
        let pct = 100.0 * count as f64 / cli.pools.max(1) as f64;
        println!("{:<16} {count:>10} {pct:>8.4}%", format!("{category}:"));
    }

    Ok(())
}
