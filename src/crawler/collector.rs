//! Shared, append-only collection of fetch failures

use crate::{FetchError, MultipleErrors};
use std::sync::{Mutex, PoisonError};

/// Collects the fetch failures of every task in a crawl run
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Mutex<Vec<FetchError>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one failure; safe to call from many tasks at once
    pub fn record(&self, error: FetchError) {
        tracing::debug!("{}", error);
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
    }

    pub fn len(&self) -> usize {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes every recorded failure, in recording order
    pub fn drain(&self) -> MultipleErrors {
        let mut errors = self.errors.lock().unwrap_or_else(PoisonError::into_inner);
        MultipleErrors::new(std::mem::take(&mut *errors))
    }
}
