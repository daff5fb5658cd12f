// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Storage for the last evaluation result.
use log::info;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::EvaluationResult;

/// A store that remembers at most one evaluation result.
pub trait ResultStore: Send + Sync {
    /// Stores a result replacing the previous one.
    fn record(&self, result: EvaluationResult);

    /// Returns the stored result if any.
    fn peek(&self) -> Option<EvaluationResult>;

    /// Removes the stored result.
    fn clear(&self);
}

/// A single slot store shared by all its clones.
///
/// Concurrent calls are serialized by a mutex so that a reader always sees
/// one complete result.
#[derive(Debug, Clone, Default)]
pub struct LastResult(Arc<Mutex<Option<EvaluationResult>>>);

impl LastResult {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for LastResult {
    fn record(&self, result: EvaluationResult) {
        *self.0.lock() = Some(result);
    }

    fn peek(&self) -> Option<EvaluationResult> {
        *self.0.lock()
    }

    fn clear(&self) {
        if self.0.lock().take().is_some() {
            info!("Last result cleared");
        }
    }
}

/// A store that never remembers anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

impl ResultStore for NoStore {
    fn record(&self, _result: EvaluationResult) {}

    fn peek(&self) -> Option<EvaluationResult> {
        None
    }

    fn clear(&self) {}
}
