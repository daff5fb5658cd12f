// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards input parsing.
use thiserror::Error;

use pokerhand_eval::{Card, MAX_POOL_SIZE, MIN_POOL_SIZE, ParseCardError};

/// Input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A card token is malformed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// Wrong number of cards.
    #[error("expected between 5 and 7 cards, got {0}")]
    PoolSize(usize),
}

/// Parses 5 to 7 card tokens into a cards pool.
pub fn parse_pool<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, InputError> {
    if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&tokens.len()) {
        return Err(InputError::PoolSize(tokens.len()));
    }

    let pool = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pool)
}

/// Splits a line into card tokens separated by spaces or commas.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}
