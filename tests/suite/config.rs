//! Config file loading through the public API.

use std::fs;
use std::time::Duration;

use tempfile::tempdir;
use tokio::time::Instant;

use gather_config::{ConfigError, GatherConfig};
use gather_engine::{Strategy, run_concurrent};

#[test]
fn full_config_file_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[runner]
strategy = "gather"
delay_ms = 40
hello_delay_ms = 5

[[tasks]]
id = "101"

[[tasks]]
id = "102"
delay_ms = 80
"#,
    )
    .unwrap();

    let config = GatherConfig::load_from(&path).unwrap();
    assert_eq!(config.strategy(), Some(Strategy::Concurrent));
    assert_eq!(config.delay(), Some(Duration::from_millis(40)));
    assert_eq!(config.hello_delay(), Some(Duration::from_millis(5)));

    let ids: Vec<&str> = config.tasks().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, ["101", "102"]);
    assert_eq!(config.tasks()[0].delay(), None);
    assert_eq!(config.tasks()[1].delay(), Some(Duration::from_millis(80)));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "runner = [").unwrap();

    let err = GatherConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("config.toml"));
}

#[tokio::test(start_paused = true)]
async fn configured_tasks_run_with_their_delays() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[[tasks]]\nid = \"a\"\ndelay_ms = 300\n\n[[tasks]]\nid = \"b\"\n",
    )
    .unwrap();

    let config = GatherConfig::load_from(&path).unwrap();
    let tasks: Vec<_> = config
        .tasks()
        .iter()
        .map(|spec| spec.to_task(Duration::from_millis(100)))
        .collect();

    let begin = Instant::now();
    let results = run_concurrent(&tasks).await;
    assert_eq!(results.len(), 2);
    assert!(begin.elapsed() >= Duration::from_millis(300));
    assert!(begin.elapsed() < Duration::from_millis(400));
}
