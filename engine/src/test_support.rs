//! Observer and fixtures shared by the engine's unit tests.

use std::sync::Mutex;
use std::time::Duration;

use gather_types::{Task, TaskId, TaskResult};

use crate::observer::TaskObserver;

pub(crate) fn task(id: &str, millis: u64) -> Task {
    Task::new(TaskId::new(id).unwrap(), Duration::from_millis(millis))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Note(String),
    Started(String),
    Finished(String),
}

pub(crate) fn note(line: &str) -> Event {
    Event::Note(line.to_string())
}

pub(crate) fn started(id: &str) -> Event {
    Event::Started(id.to_string())
}

pub(crate) fn finished(id: &str) -> Event {
    Event::Finished(id.to_string())
}

/// Records every notification in arrival order.
#[derive(Default)]
pub(crate) struct Recorder(Mutex<Vec<Event>>);

impl Recorder {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }
}

impl TaskObserver for Recorder {
    fn note(&self, line: &str) {
        self.push(note(line));
    }

    fn started(&self, task: &Task) {
        self.push(started(task.id().as_str()));
    }

    fn finished(&self, task: &Task, result: &TaskResult) {
        assert_eq!(result, &TaskResult::success());
        self.push(finished(task.id().as_str()));
    }
}
