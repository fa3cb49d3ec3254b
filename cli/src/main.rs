//! gather CLI - compares sequential and concurrent execution of simulated tasks.
//!
//! # Flow
//!
//! ```text
//! main() -> Cli::parse() + GatherConfig::load() -> Plan::resolve()
//!                                                      |
//!                    simple ----> hello()              v
//!                    sequential -> Runner::run(Sequential)
//!                    concurrent -> Runner::run(Concurrent)
//! ```
//!
//! The runtime is current-thread: tasks interleave only at their delays.
//! Console output goes to stdout; logs go to stderr.

mod console;
mod output;
mod plan;

use std::any::type_name_of_val;
use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gather_config::GatherConfig;
use gather_engine::{Runner, Strategy, Task, hello};

use crate::console::ConsoleObserver;
use crate::plan::{Cli, Mode, Plan};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GatherConfig::load().context("Failed to load config")?;
    let plan = Plan::resolve(&cli, config.as_ref())?;
    tracing::debug!(?plan, "Resolved plan");

    match plan.mode {
        Mode::Simple => run_simple(&plan).await?,
        Mode::Sequential => run_batch(Strategy::Sequential, &plan.sequential, plan.json).await?,
        Mode::Concurrent => run_batch(Strategy::Concurrent, &plan.concurrent, plan.json).await?,
        Mode::All => {
            run_simple(&plan).await?;
            run_batch(Strategy::Sequential, &plan.sequential, plan.json).await?;
            run_batch(Strategy::Concurrent, &plan.concurrent, plan.json).await?;
        }
    }

    Ok(())
}

async fn run_simple(plan: &Plan) -> Result<()> {
    let console = ConsoleObserver::new(false, plan.json);

    // Creating the future runs nothing; only awaiting it does.
    let pending = hello(plan.hello_delay, &console);
    println!("{}", output::pending_line(type_name_of_val(&pending)));
    println!();

    let result = pending.await;
    println!("{}", output::result_line(&result, plan.json)?);
    Ok(())
}

async fn run_batch(strategy: Strategy, tasks: &[Task], json: bool) -> Result<()> {
    println!("{}", output::heading(strategy));

    // Sequential mode shows each result as soon as it is awaited.
    let console = ConsoleObserver::new(strategy == Strategy::Sequential, json);
    let report = Runner::new(&console).run(strategy, tasks).await;

    println!(
        "{}",
        output::summary_line(strategy, Local::now().time(), report.elapsed())
    );
    if strategy == Strategy::Concurrent {
        println!("{}", output::results_line(report.results(), json)?);
    }
    Ok(())
}
