// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The partition engine: policy checks, strategy selection and timing
//! around the pure solvers.
//!
//! ```text
//! Universe<Validated> ──► check_request ──► create_strategy ──► partition
//!                                                                  │
//!                                                                  ▼
//!                                                             SolveReport
//! ```

use crate::{RuntimeError, SolveReport, SolverConfig};
use number_set::{Universe, Validated};
use partition_solver::all_strategies;
use std::time::Instant;

/// Runs partition requests under a [`SolverConfig`].
///
/// The engine holds no per-solve state; cloning it is cheap and each
/// clone can solve independently on its own thread.
///
/// # Example
/// ```
/// use number_set::Universe;
/// use runtime::{PartitionEngine, SolverConfig};
///
/// let engine = PartitionEngine::new(SolverConfig::default());
/// let universe = Universe::parse("1 1 1 1").unwrap().validate().unwrap();
/// let report = engine.solve(&universe).unwrap();
/// assert!(report.result.is_perfect);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionEngine {
    config: SolverConfig,
}

impl PartitionEngine {
    /// Creates an engine from the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        tracing::info!(
            "engine created: {} partitions, strategy '{}'",
            config.partitions,
            config.strategy,
        );
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Checks a request against the configured policy.
    ///
    /// - `partitions` must be at least 1.
    /// - More groups than items is rejected unless `allow_empty_groups`.
    pub fn check_request(
        &self,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<(), RuntimeError> {
        if partitions == 0 {
            return Err(RuntimeError::InvalidArgument(
                "number of partitions must be at least 1".into(),
            ));
        }
        if partitions > universe.len() {
            if !self.config.allow_empty_groups {
                return Err(RuntimeError::InvalidArgument(format!(
                    "partition count {partitions} cannot be greater than the universe ({} items)",
                    universe.len(),
                )));
            }
            tracing::warn!(
                "{partitions} partitions for {} items: some groups will be empty",
                universe.len(),
            );
        }
        Ok(())
    }

    /// Solves with the configured partition count.
    pub fn solve(&self, universe: &Universe<Validated>) -> Result<SolveReport, RuntimeError> {
        self.solve_labeled("input", universe, self.config.partitions)
    }

    /// Solves `universe` into `partitions` groups and labels the report.
    pub fn solve_labeled(
        &self,
        label: &str,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<SolveReport, RuntimeError> {
        self.check_request(universe, partitions)?;
        let strategy = self.config.create_strategy(partitions)?;

        if !partition_solver::perfect_partition_possible(universe, partitions) {
            tracing::info!(
                "{label}: total {} is not divisible by {partitions}, no perfect partition exists",
                universe.total(),
            );
        }

        let start = Instant::now();
        let result = strategy.partition(universe, partitions)?;
        let report = SolveReport::new(label, universe, result, start.elapsed());

        tracing::debug!("{}", report.summary());
        Ok(report)
    }

    /// Runs every strategy that supports `partitions` on the same universe.
    ///
    /// Strategies that do not support `partitions` are skipped. Any error,
    /// from the policy check or from a strategy, aborts the whole comparison.
    pub fn compare(
        &self,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<Vec<SolveReport>, RuntimeError> {
        self.check_request(universe, partitions)?;

        let mut reports = Vec::new();
        for strategy in all_strategies() {
            if !strategy.supports(partitions) {
                tracing::debug!(
                    "skipping '{}': does not support {partitions} partitions",
                    strategy.name()
                );
                continue;
            }
            let start = Instant::now();
            let result = strategy.partition(universe, partitions)?;
            reports.push(SolveReport::new(
                strategy.name(),
                universe,
                result,
                start.elapsed(),
            ));
        }
        Ok(reports)
    }
}
