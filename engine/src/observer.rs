use gather_types::{Task, TaskResult};

/// Receives notifications as simulated tasks progress.
///
/// Hooks are called from inside the task futures, on whatever thread polls
/// them. Implementations keep their own interior state; the runner never
/// shares mutable state between tasks.
pub trait TaskObserver {
    /// Free-form progress line from a coroutine (e.g. the greeting in `hello`).
    fn note(&self, _line: &str) {}

    /// The task has started and is about to suspend on its delay.
    fn started(&self, _task: &Task) {}

    /// The task's delay elapsed and it produced `result`.
    fn finished(&self, _task: &Task, _result: &TaskResult) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TaskObserver for NoopObserver {}
