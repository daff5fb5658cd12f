// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards combinations of a cards pool.
use pokerhand_cards::Card;

use crate::{EvalError, HAND_SIZE, MAX_POOL_SIZE, MIN_POOL_SIZE};

/// Iterator over all the 5-cards hands in a pool of 5 to 7 cards.
///
/// Hands are generated in lexicographic order of the pool positions, the
/// cards in each hand keep the pool order. For a 7 cards pool the first hand
/// is made of the cards at positions `0 1 2 3 4`, followed by `0 1 2 3 5`,
/// `0 1 2 3 6`, `0 1 2 4 5`, and so on up to `2 3 4 5 6`.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    pool: &'a [Card],
    positions: [usize; HAND_SIZE],
    done: bool,
}

impl<'a> Combinations<'a> {
    /// Creates an iterator for the given pool.
    ///
    /// Returns [EvalError::InvalidHandSize] if the pool length is not between
    /// 5 and 7.
    pub fn new(pool: &'a [Card]) -> Result<Self, EvalError> {
        if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&pool.len()) {
            return Err(EvalError::InvalidHandSize(pool.len()));
        }

        Ok(Self {
            pool,
            positions: [0, 1, 2, 3, 4],
            done: false,
        })
    }

    /// Advances positions to the next k-subset, the rightmost position that
    /// can still move is incremented and the ones after it are reset next to it.
    fn advance(&mut self) {
        let n = self.pool.len();
        let movable = (0..HAND_SIZE)
            .rev()
            .find(|&i| self.positions[i] < n - HAND_SIZE + i);

        match movable {
            Some(i) => {
                self.positions[i] += 1;
                for j in (i + 1)..HAND_SIZE {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = [Card; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let hand = self.positions.map(|pos| self.pool[pos]);
        self.advance();
        Some(hand)
    }
}

/// Returns an iterator over all the 5-cards hands in the pool.
pub fn combinations(pool: &[Card]) -> Result<Combinations<'_>, EvalError> {
    Combinations::new(pool)
}
