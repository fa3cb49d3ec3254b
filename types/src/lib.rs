//! Core domain types for gather.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The engine, config loader, and CLI all speak in these types.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod report;
mod strategy;
mod task;

pub use report::BatchReport;
pub use strategy::{Strategy, StrategyParseError};
pub use task::{EmptyTaskIdError, SUCCESS_MESSAGE, Task, TaskId, TaskResult};
