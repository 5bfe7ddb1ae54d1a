// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Solver configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! partitions = 2
//! strategy = "auto"
//! allow_empty_groups = false
//! output = "text"
//! max_concurrency = 4
//!
//! [random]
//! count = 10
//! min = 1
//! max = 199
//! seed = 42
//! ```

use number_set::RandomUniverse;
use partition_solver::{strategy_by_name, PartitionStrategy};
use std::path::Path;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = super::RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(super::RuntimeError::ConfigError(format!(
                "unknown output format '{other}'; expected 'text' or 'json'"
            ))),
        }
    }
}

/// Configuration for partition runs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SolverConfig {
    /// Number of groups to split into.
    #[serde(default = "default_partitions")]
    pub partitions: usize,
    /// `"auto"` (Karmarkar-Karp for 2 groups, greedy otherwise),
    /// `"karmarkar-karp"`, or `"greedy"`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Whether more groups than numbers is acceptable.
    #[serde(default)]
    pub allow_empty_groups: bool,
    /// Report format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Upper bound on concurrently solved batch instances
    /// (defaults to the number of online CPU cores).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
    /// Random universe parameters.
    #[serde(default)]
    pub random: RandomUniverse,
}

fn default_partitions() -> usize {
    2
}

fn default_strategy() -> String {
    "auto".to_string()
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::RuntimeError::ConfigError(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::RuntimeError> {
        toml::from_str(toml_str).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML parse error: {e}"))
        })
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::RuntimeError> {
        toml::to_string_pretty(self).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML serialise error: {e}"))
        })
    }

    /// Resolves the batch concurrency limit.
    pub fn resolve_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            })
            .max(1)
    }

    /// Creates the strategy for `partitions` groups.
    ///
    /// `"auto"` defers to [`partition_solver::strategy_for`]. A named
    /// strategy that cannot produce `partitions` groups is rejected.
    pub fn create_strategy(
        &self,
        partitions: usize,
    ) -> Result<Box<dyn PartitionStrategy>, super::RuntimeError> {
        let strategy = match self.strategy.trim().to_lowercase().as_str() {
            "auto" => partition_solver::strategy_for(partitions)?,
            name => strategy_by_name(name)
                .map_err(|e| super::RuntimeError::ConfigError(e.to_string()))?,
        };

        if !strategy.supports(partitions) {
            return Err(super::RuntimeError::InvalidArgument(format!(
                "strategy '{}' cannot produce {partitions} partitions",
                strategy.name(),
            )));
        }
        Ok(strategy)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            partitions: default_partitions(),
            strategy: default_strategy(),
            allow_empty_groups: false,
            output: OutputFormat::Text,
            max_concurrency: None,
            random: RandomUniverse::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuntimeError;
    use std::io::Write;

    #[test]
    fn test_default() {
        let c = SolverConfig::default();
        assert_eq!(c.partitions, 2);
        assert_eq!(c.strategy, "auto");
        assert!(!c.allow_empty_groups);
        assert_eq!(c.output, OutputFormat::Text);
        assert_eq!(c.random.max, 199);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
partitions = 3
strategy = "greedy"
allow_empty_groups = true
output = "json"
max_concurrency = 2

[random]
count = 25
seed = 9
"#;
        let c = SolverConfig::from_toml(toml).unwrap();
        assert_eq!(c.partitions, 3);
        assert_eq!(c.strategy, "greedy");
        assert!(c.allow_empty_groups);
        assert_eq!(c.output, OutputFormat::Json);
        assert_eq!(c.resolve_concurrency(), 2);
        assert_eq!(c.random.count, 25);
        assert_eq!(c.random.min, 1);
        assert_eq!(c.random.max, 199);
        assert_eq!(c.random.seed, Some(9));
    }

    #[test]
    fn test_from_toml_defaults() {
        let c = SolverConfig::from_toml("").unwrap();
        assert_eq!(c.partitions, 2);
        assert_eq!(c.strategy, "auto");
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            SolverConfig::from_toml("partitions = \"two\""),
            Err(RuntimeError::ConfigError(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = SolverConfig {
            partitions: 4,
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = SolverConfig::from_toml(&toml).unwrap();
        assert_eq!(back.partitions, 4);
        assert_eq!(back.strategy, c.strategy);
        assert_eq!(back.random, c.random);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "partitions = 5").unwrap();
        let c = SolverConfig::from_file(file.path()).unwrap();
        assert_eq!(c.partitions, 5);

        assert!(SolverConfig::from_file(Path::new("/nonexistent/npp.toml")).is_err());
    }

    #[test]
    fn test_create_strategy_auto() {
        let c = SolverConfig::default();
        assert_eq!(c.create_strategy(2).unwrap().name(), "karmarkar-karp");
        assert_eq!(c.create_strategy(3).unwrap().name(), "greedy");
        assert!(c.create_strategy(0).is_err());
    }

    #[test]
    fn test_create_strategy_named() {
        let c = SolverConfig {
            strategy: "greedy".into(),
            ..Default::default()
        };
        assert_eq!(c.create_strategy(2).unwrap().name(), "greedy");

        let c = SolverConfig {
            strategy: "kk".into(),
            ..Default::default()
        };
        assert!(matches!(
            c.create_strategy(3),
            Err(RuntimeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_create_strategy_unknown() {
        let c = SolverConfig {
            strategy: "bogus".into(),
            ..Default::default()
        };
        assert!(matches!(
            c.create_strategy(2),
            Err(RuntimeError::ConfigError(_))
        ));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_resolve_concurrency_default() {
        assert!(SolverConfig::default().resolve_concurrency() >= 1);
        let c = SolverConfig {
            max_concurrency: Some(0),
            ..Default::default()
        };
        assert_eq!(c.resolve_concurrency(), 1);
    }
}
