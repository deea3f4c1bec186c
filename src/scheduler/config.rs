//! Scheduling run configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Fcfs, Algorithm::Sjf];

    /// Lowercase name (`"fcfs"`, `"sjf"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
        }
    }

    /// Rule chain that orders candidate jobs under this discipline.
    ///
    /// FCFS orders by arrival. SJF orders by burst, then arrival.
    /// Remaining ties keep input order.
    pub fn rule_engine(self) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new().with_rule(rules::Fifo),
            Self::Sjf => RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            _ => Err(ScheduleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Explicit configuration for one scheduling run.
///
/// # Example
/// ```
/// use core_sched::scheduler::{Algorithm, SchedulerConfig};
///
/// let config = SchedulerConfig::new()
///     .with_core_count(4)
///     .with_algorithm(Algorithm::Sjf);
/// assert_eq!(config.core_count, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of identical cores in the pool.
    pub core_count: usize,
    /// Scheduling discipline.
    pub algorithm: Algorithm,
}

impl SchedulerConfig {
    /// Creates the default configuration: one core, FCFS.
    pub fn new() -> Self {
        Self {
            core_count: 1,
            algorithm: Algorithm::Fcfs,
        }
    }

    /// Sets the core count.
    pub fn with_core_count(mut self, core_count: usize) -> Self {
        self.core_count = core_count;
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!(" Sjf ".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!(
            "rr".parse::<Algorithm>(),
            Err(ScheduleError::UnknownAlgorithm("rr".into()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_rule_engines() {
        assert_eq!(Algorithm::Fcfs.rule_engine().rule_names(), vec!["FIFO"]);
        assert_eq!(
            Algorithm::Sjf.rule_engine().rule_names(),
            vec!["SPT", "FIFO"]
        );
    }

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();
        assert_eq!(config.core_count, 1);
        assert_eq!(config.algorithm, Algorithm::Fcfs);
    }

    #[test]
    fn test_serde_lowercase() {
        let config = SchedulerConfig::new()
            .with_core_count(2)
            .with_algorithm(Algorithm::Sjf);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"core_count":2,"algorithm":"sjf"}"#);

        let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
