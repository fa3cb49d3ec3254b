use chrono::Local;

use gather_engine::{Task, TaskObserver, TaskResult};

use crate::output;

/// Prints task progress to stdout as it happens.
pub struct ConsoleObserver {
    /// Print each result right after its end line (the sequential view).
    echo_results: bool,
    json: bool,
}

impl ConsoleObserver {
    pub fn new(echo_results: bool, json: bool) -> Self {
        Self { echo_results, json }
    }
}

impl TaskObserver for ConsoleObserver {
    fn note(&self, line: &str) {
        println!("{line}");
    }

    fn started(&self, task: &Task) {
        println!("{}", output::start_line(task.id(), Local::now().time()));
    }

    fn finished(&self, task: &Task, result: &TaskResult) {
        println!("{}", output::end_line(task.id()));
        if self.echo_results {
            match output::result_line(result, self.json) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(task = %task.id(), "Failed to render result: {e}"),
            }
        }
    }
}
