//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use gather_engine::{Task, TaskId, TaskObserver, TaskResult};

/// Build a task with a millisecond delay.
pub fn task(id: &str, millis: u64) -> Task {
    Task::new(TaskId::new(id).unwrap(), Duration::from_millis(millis))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Finished(String),
}

/// Observer that records start/finish events in the order they occur.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Ids in the order their tasks started.
    pub fn start_order(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Started(id) => Some(id),
                Event::Finished(_) => None,
            })
            .collect()
    }

    /// Ids in the order their tasks finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Finished(id) => Some(id),
                Event::Started(_) => None,
            })
            .collect()
    }

    /// Index of the last start and the first finish.
    pub fn last_start_and_first_finish(&self) -> (Option<usize>, Option<usize>) {
        let events = self.events();
        let last_start = events
            .iter()
            .rposition(|event| matches!(event, Event::Started(_)));
        let first_finish = events
            .iter()
            .position(|event| matches!(event, Event::Finished(_)));
        (last_start, first_finish)
    }
}

impl TaskObserver for Recorder {
    fn started(&self, task: &Task) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Started(task.id().to_string()));
    }

    fn finished(&self, task: &Task, _result: &TaskResult) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Finished(task.id().to_string()));
    }
}
