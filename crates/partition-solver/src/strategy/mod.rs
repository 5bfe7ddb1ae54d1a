// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PartitionStrategy`] trait and strategy implementations.

pub mod greedy;
pub mod karmarkar_karp;

use crate::{PartitionResult, SolverError};
use greedy::GreedyLeastLoaded;
use karmarkar_karp::KarmarkarKarp;
use number_set::{Universe, Validated};

/// Trait for partition strategies.
///
/// Each strategy takes a validated universe and a group count and produces
/// a [`PartitionResult`] covering every item exactly once.
///
/// Strategies are purely algorithmic: no I/O, no shared state between
/// calls. Independent solves can run on separate threads freely.
pub trait PartitionStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Returns `true` if this strategy can produce `partitions` groups.
    fn supports(&self, partitions: usize) -> bool;

    /// Partitions the universe into `partitions` groups.
    fn partition(
        &self,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<PartitionResult, SolverError>;
}

/// Looks up a strategy by name.
///
/// Accepts `"karmarkar-karp"` / `"kk"` and `"greedy"` / `"greedy-least-loaded"`,
/// case-insensitively.
pub fn strategy_by_name(name: &str) -> Result<Box<dyn PartitionStrategy>, SolverError> {
    match name.trim().to_lowercase().as_str() {
        "karmarkar-karp" | "kk" => Ok(Box::new(KarmarkarKarp::new())),
        "greedy" | "greedy-least-loaded" => Ok(Box::new(GreedyLeastLoaded::new())),
        other => Err(SolverError::InvalidArgument(format!(
            "unknown strategy '{other}'; expected 'karmarkar-karp' or 'greedy'"
        ))),
    }
}

/// Every available strategy, in a fixed order.
pub fn all_strategies() -> Vec<Box<dyn PartitionStrategy>> {
    vec![
        Box::new(KarmarkarKarp::new()),
        Box::new(GreedyLeastLoaded::new()),
    ]
}
