use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const STRATEGY_PARSE_VALUES: &[&str] = &["sequential", "seq", "concurrent", "gather"];

/// How a batch of tasks is driven to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Await each task before starting the next. Latency is additive.
    Sequential,
    /// Start every task, then wait for all. Latency is bounded by the slowest task.
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid strategy '{raw}'; expected one of: {expected:?}")]
pub struct StrategyParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl StrategyParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
        }
    }

    pub fn parse(s: &str) -> Result<Self, StrategyParseError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "concurrent" | "gather" => Ok(Strategy::Concurrent),
            _ => Err(StrategyParseError {
                raw: trimmed.to_string(),
                expected: STRATEGY_PARSE_VALUES,
            }),
        }
    }

    #[must_use]
    pub fn all() -> &'static [Strategy] {
        &[Strategy::Sequential, Strategy::Concurrent]
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
