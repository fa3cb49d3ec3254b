//! Resolves what to run from command-line flags, the config file, and defaults.
//!
//! Precedence: flag > config > built-in default.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use gather_config::GatherConfig;
use gather_engine::HELLO_DELAY;
use gather_types::{Strategy, Task, TaskId};

/// Per-task delay when neither flag nor config sets one.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

const SEQUENTIAL_IDS: [&str; 2] = ["001", "002"];
const CONCURRENT_IDS: [&str; 2] = ["101", "102"];

#[derive(Debug, Parser)]
#[command(
    name = "gather",
    version,
    about = "Run simulated tasks sequentially or concurrently and compare their latency"
)]
pub struct Cli {
    /// What to run. Defaults to the config's strategy, then `all`.
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Artificial delay of each task, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Task id to submit; repeat for several tasks.
    #[arg(long = "task", value_name = "ID")]
    pub tasks: Vec<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Show that a coroutine is lazy, then run the greeting coroutine.
    Simple,
    /// Await tasks one after another.
    Sequential,
    /// Start tasks together and wait for all of them.
    Concurrent,
    /// Simple, then sequential, then concurrent.
    All,
}

impl From<Strategy> for Mode {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Sequential => Mode::Sequential,
            Strategy::Concurrent => Mode::Concurrent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub mode: Mode,
    pub hello_delay: Duration,
    pub sequential: Vec<Task>,
    pub concurrent: Vec<Task>,
    pub json: bool,
}

impl Plan {
    pub fn resolve(cli: &Cli, config: Option<&GatherConfig>) -> Result<Self> {
        let mode = cli
            .mode
            .or_else(|| config.and_then(GatherConfig::strategy).map(Mode::from))
            .unwrap_or(Mode::All);

        let flag_delay = cli.delay_ms.map(Duration::from_millis);
        let delay = flag_delay
            .or_else(|| config.and_then(GatherConfig::delay))
            .unwrap_or(DEFAULT_DELAY);

        let hello_delay = config
            .and_then(GatherConfig::hello_delay)
            .unwrap_or(HELLO_DELAY);

        let explicit = if cli.tasks.is_empty() {
            None
        } else {
            Some(
                cli.tasks
                    .iter()
                    .map(|raw| {
                        TaskId::new(raw.as_str())
                            .map(|id| Task::new(id, delay))
                            .with_context(|| format!("invalid --task {raw:?}"))
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        let configured = config
            .map(GatherConfig::tasks)
            .filter(|specs| !specs.is_empty())
            .map(|specs| {
                specs
                    .iter()
                    .map(|spec| match flag_delay {
                        Some(flag) => Task::new(spec.id().clone(), flag),
                        None => spec.to_task(delay),
                    })
                    .collect::<Vec<_>>()
            });

        let (sequential, concurrent) = match explicit.or(configured) {
            Some(tasks) => (tasks.clone(), tasks),
            None => (
                default_tasks(&SEQUENTIAL_IDS, delay)?,
                default_tasks(&CONCURRENT_IDS, delay)?,
            ),
        };

        Ok(Self {
            mode,
            hello_delay,
            sequential,
            concurrent,
            json: cli.json,
        })
    }
}

fn default_tasks(ids: &[&str], delay: Duration) -> Result<Vec<Task>> {
    ids.iter()
        .map(|id| -> Result<Task> { Ok(Task::new(TaskId::new(*id)?, delay)) })
        .collect()
}
