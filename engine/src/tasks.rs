//! Coroutine definitions.
//!
//! Each coroutine waits on a fixed artificial delay and then reports success.
//! None of them can fail.

use std::time::Duration;

use tokio::time::sleep;

use gather_types::{Task, TaskResult};

use crate::observer::TaskObserver;

/// Delay of the greeting coroutine when none is configured.
pub const HELLO_DELAY: Duration = Duration::from_secs(1);

/// Greet, wait `delay`, say goodbye, report success.
pub async fn hello(delay: Duration, observer: &dyn TaskObserver) -> TaskResult {
    observer.note("Hello ...");
    sleep(delay).await;
    observer.note("... World!");
    TaskResult::success()
}

/// Run one simulated task: announce it, wait its delay, report success.
pub async fn get_message(task: &Task, observer: &dyn TaskObserver) -> TaskResult {
    tracing::debug!(
        task = %task.id(),
        delay_ms = task.delay().as_millis() as u64,
        "Task started"
    );
    observer.started(task);

    sleep(task.delay()).await;

    let result = TaskResult::success();
    tracing::debug!(task = %task.id(), "Task finished");
    observer.finished(task, &result);
    result
}
