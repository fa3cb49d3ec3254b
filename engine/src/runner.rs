//! Sequential and concurrent drivers.

use futures_util::future::join_all;
use tokio::time::Instant;

use gather_types::{BatchReport, Strategy, Task, TaskResult};

use crate::observer::{NoopObserver, TaskObserver};
use crate::tasks::get_message;

/// Drives batches of tasks, reporting progress to an observer.
#[derive(Clone, Copy)]
pub struct Runner<'a> {
    observer: &'a dyn TaskObserver,
}

impl<'a> Runner<'a> {
    #[must_use]
    pub fn new(observer: &'a dyn TaskObserver) -> Self {
        Self { observer }
    }

    /// Await each task to completion before starting the next.
    ///
    /// Total latency is the sum of the delays.
    pub async fn sequential(&self, tasks: &[Task]) -> Vec<TaskResult> {
        tracing::debug!(tasks = tasks.len(), "Running batch sequentially");
        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(get_message(task, self.observer).await);
        }
        results
    }

    /// Start every task, then wait for all of them.
    ///
    /// Every task reaches its delay before any completes, so total latency is
    /// the longest delay. Results come back in submission order whatever the
    /// completion order was.
    pub async fn concurrent(&self, tasks: &[Task]) -> Vec<TaskResult> {
        tracing::debug!(tasks = tasks.len(), "Running batch concurrently");
        join_all(tasks.iter().map(|task| get_message(task, self.observer))).await
    }

    /// Run `tasks` with `strategy` and time the whole batch.
    pub async fn run(&self, strategy: Strategy, tasks: &[Task]) -> BatchReport {
        let begin = Instant::now();
        let results = match strategy {
            Strategy::Sequential => self.sequential(tasks).await,
            Strategy::Concurrent => self.concurrent(tasks).await,
        };
        let elapsed = begin.elapsed();

        tracing::info!(
            strategy = strategy.as_str(),
            tasks = tasks.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Batch complete"
        );
        BatchReport::new(strategy, results, elapsed)
    }
}

impl Default for Runner<'_> {
    fn default() -> Self {
        Self::new(&NoopObserver)
    }
}

/// [`Runner::sequential`] without an observer.
pub async fn run_sequential(tasks: &[Task]) -> Vec<TaskResult> {
    Runner::default().sequential(tasks).await
}

/// [`Runner::concurrent`] without an observer.
pub async fn run_concurrent(tasks: &[Task]) -> Vec<TaskResult> {
    Runner::default().concurrent(tasks).await
}
