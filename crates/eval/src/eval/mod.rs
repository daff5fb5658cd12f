// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5-cards hand is classified into one of ten categories with [HandValue::eval]
//! that also computes a tie-break signature, hand values are totally ordered
//! by category and then by signature so that hands with better kickers win.
//!
//! [best_hand] evaluates all the 5-cards hands in a pool of 5 to 7 cards and
//! returns the best one with its cards sorted by significance, useful for
//! showing a winning hand.
mod select;
pub use select::{EvaluationResult, best_hand};

mod value;
pub use value::{Category, HandValue};
