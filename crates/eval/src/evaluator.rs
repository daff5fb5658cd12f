// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator that records the last result.
use pokerhand_cards::Card;

use crate::{
    EvalError, EvaluationResult, best_hand,
    store::{LastResult, ResultStore},
};

/// Evaluates cards pools and keeps the last result in a store.
///
/// ```
/// # use pokerhand_eval::*;
/// let evaluator = Evaluator::new(LastResult::new());
/// assert!(evaluator.last_result().is_none());
///
/// let pool = ["7C", "7D", "7H", "2S", "2C", "KD"].map(|c| c.parse::<Card>().unwrap());
/// let result = evaluator.evaluate(&pool).unwrap();
/// assert_eq!(result.category, Category::FullHouse);
/// assert_eq!(evaluator.last_result(), Some(result));
///
/// evaluator.clear_last();
/// assert!(evaluator.last_result().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<S = LastResult> {
    store: S,
}

impl<S: ResultStore> Evaluator<S> {
    /// Creates an evaluator with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Finds the best hand in the pool and records it.
    ///
    /// A failed evaluation leaves the store unchanged.
    pub fn evaluate(&self, pool: &[Card]) -> Result<EvaluationResult, EvalError> {
        let result = best_hand(pool)?;
        self.store.record(result);
        Ok(result)
    }

    /// The last recorded result.
    pub fn last_result(&self) -> Option<EvaluationResult> {
        self.store.peek()
    }

    /// Clears the last recorded result.
    pub fn clear_last(&self) {
        self.store.clear();
    }

    /// The evaluator store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Default for Evaluator<LastResult> {
    fn default() -> Self {
        Self::new(LastResult::new())
    }
}
