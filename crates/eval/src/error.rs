// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Error returned by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The cards pool doesn't have between 5 and 7 cards.
    #[error("hand must have between 5 and 7 cards, got {0}")]
    InvalidHandSize(usize),
}
