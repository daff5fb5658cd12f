// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerhand best hand evaluator.
//!
//! Finds the best 5-cards poker hand in a pool of 5, 6 or 7 cards by
//! classifying every 5-cards combination and keeping the highest one, with
//! kickers breaking ties between hands of the same category.
//!
//! To evaluate a pool use [best_hand]:
//!
//! ```
//! # use pokerhand_eval::*;
//! let pool = ["AC", "AD", "KH", "KS", "2C", "QD", "3H"]
//!     .map(|c| c.parse::<Card>().unwrap());
//! let best = best_hand(&pool).unwrap();
//! assert_eq!(best.category, Category::TwoPair);
//! assert_eq!(best.to_string(), "Two Pair: AC AD KH KS QD");
//! ```
//!
//! or an [Evaluator] that also remembers the last result in a [ResultStore].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
pub use combos::{Combinations, combinations};

mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{Category, EvaluationResult, HandValue, best_hand};

mod evaluator;
pub use evaluator::Evaluator;

pub mod store;
pub use store::{LastResult, NoStore, ResultStore};

// Reexport cards types.
pub use pokerhand_cards::{Card, Deck, ParseCardError, Rank, Suit};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The minimum number of cards in a pool.
pub const MIN_POOL_SIZE: usize = 5;

/// The maximum number of cards in a pool.
pub const MAX_POOL_SIZE: usize = 7;
