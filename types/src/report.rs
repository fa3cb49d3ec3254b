use std::time::Duration;

use crate::{Strategy, TaskResult};

/// Outcome of one timed batch: the strategy used, the results in submission
/// order, and the wall-clock time the batch took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    strategy: Strategy,
    results: Vec<TaskResult>,
    elapsed: Duration,
}

impl BatchReport {
    #[must_use]
    pub fn new(strategy: Strategy, results: Vec<TaskResult>, elapsed: Duration) -> Self {
        Self {
            strategy,
            results,
            elapsed,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
