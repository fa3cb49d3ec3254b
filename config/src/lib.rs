//! Configuration for gather.
//!
//! Loaded from `$GATHER_CONFIG` when set, otherwise `~/.gather/config.toml`.
//! A missing file is not an error; callers fall back to built-in defaults.
//!
//! ```toml
//! [runner]
//! strategy = "concurrent"
//! delay_ms = 2000
//! hello_delay_ms = 1000
//!
//! [[tasks]]
//! id = "001"
//! delay_ms = 500
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use gather_types::{Strategy, Task, TaskId};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GATHER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    runner: Option<RawRunner>,
    #[serde(default)]
    tasks: Vec<RawTask>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRunner {
    strategy: Option<String>,
    delay_ms: Option<u64>,
    hello_delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTask {
    id: String,
    delay_ms: Option<u64>,
}

/// A task entry from `[[tasks]]`. The delay falls back to the batch default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    id: TaskId,
    delay: Option<Duration>,
}

impl TaskSpec {
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }

    #[must_use]
    pub fn to_task(&self, default_delay: Duration) -> Task {
        Task::new(self.id.clone(), self.delay.unwrap_or(default_delay))
    }
}

/// Validated configuration. Every field is optional; unset fields defer to
/// command-line flags or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatherConfig {
    strategy: Option<Strategy>,
    delay: Option<Duration>,
    hello_delay: Option<Duration>,
    tasks: Vec<TaskSpec>,
}

impl GatherConfig {
    /// Load the config from the default location.
    ///
    /// Returns `Ok(None)` when no path can be determined or the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        Self::parse(&content, path)
    }

    /// Parse and validate config text. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = match toml::from_str(content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawConfig, path: &Path) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        let runner = raw.runner.unwrap_or_default();
        let strategy = runner
            .strategy
            .as_deref()
            .map(Strategy::parse)
            .transpose()
            .map_err(|e| invalid(e.to_string()))?;

        let tasks = raw
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| -> Result<TaskSpec, ConfigError> {
                let id = TaskId::new(task.id)
                    .map_err(|e| invalid(format!("tasks[{index}]: {e}")))?;
                Ok(TaskSpec {
                    id,
                    delay: task.delay_ms.map(Duration::from_millis),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            strategy,
            delay: runner.delay_ms.map(Duration::from_millis),
            hello_delay: runner.hello_delay_ms.map(Duration::from_millis),
            tasks,
        })
    }

    #[must_use]
    pub const fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }

    #[must_use]
    pub const fn hello_delay(&self) -> Option<Duration> {
        self.hello_delay
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".gather").join("config.toml"))
}
