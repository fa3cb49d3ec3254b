//! Console line formatting. Everything here is pure so it can be snapshot-tested.

use std::time::Duration;

use chrono::NaiveTime;

use gather_types::{Strategy, TaskId, TaskResult};

/// Wall-clock format used on every console line (`%X`, e.g. `14:03:27`).
pub const CLOCK_FORMAT: &str = "%X";

pub fn heading(strategy: Strategy) -> String {
    format!("\n**** {} ****", strategy.as_str())
}

pub fn start_line(id: &TaskId, at: NaiveTime) -> String {
    format!("get_message start. {id}, {}", at.format(CLOCK_FORMAT))
}

pub fn end_line(id: &TaskId) -> String {
    format!("get_message end. {id}")
}

pub fn pending_line(type_name: &str) -> String {
    format!("created {type_name} (not yet polled)")
}

pub fn summary_line(strategy: Strategy, at: NaiveTime, elapsed: Duration) -> String {
    format!(
        "{} end, {} ({:.2}s)",
        strategy.as_str(),
        at.format(CLOCK_FORMAT),
        elapsed.as_secs_f64()
    )
}

pub fn result_line(result: &TaskResult, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(result)
    } else {
        Ok(result.to_string())
    }
}

pub fn results_line(results: &[TaskResult], json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string(results);
    }
    let items: Vec<String> = results.iter().map(ToString::to_string).collect();
    Ok(format!("[{}]", items.join(", ")))
}
