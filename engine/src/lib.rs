//! gather engine - simulated tasks and the drivers that run them.
//!
//! # Architecture
//!
//! ```text
//! Runner::run(strategy, tasks)
//!     |-- Strategy::Sequential -> Runner::sequential  (await one at a time)
//!     '-- Strategy::Concurrent -> Runner::concurrent  (join_all, in place)
//!                                       |
//!                                       v
//!                              get_message(task) x N  --> TaskObserver
//! ```
//!
//! All drivers are plain futures. Nothing is spawned, so on a current-thread
//! runtime the scheduling is single-threaded and cooperative: a task suspends
//! only at its artificial delay.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)]

mod observer;
mod runner;
mod tasks;

#[cfg(test)]
mod test_support;

pub use gather_types::{BatchReport, Strategy, Task, TaskId, TaskResult};
pub use observer::{NoopObserver, TaskObserver};
pub use runner::{Runner, run_concurrent, run_sequential};
pub use tasks::{HELLO_DELAY, get_message, hello};
