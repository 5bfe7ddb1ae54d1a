// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-solver
//!
//! Approximate multi-way number partitioning: split a multiset of positive
//! integers into `k` groups whose sums are as close as possible.
//!
//! # Strategies
//!
//! | Strategy | Groups | Idea |
//! |---|---|---|
//! | [`KarmarkarKarp`] | 2 | Replace the two largest numbers by their difference until one is left |
//! | [`GreedyLeastLoaded`] | any k >= 1 | Largest number first, into the group with the smallest sum |
//!
//! [`solve`] picks between them: Karmarkar-Karp for `k == 2`, greedy
//! otherwise. Neither is exact.
//!
//! The hard part of Karmarkar-Karp is not the arithmetic but recovering
//! *which* numbers end up on which side; see [`tracker`].
//!
//! # Sums
//!
//! Group sums and residuals are `u64`. Inputs are validated positive and
//! their total is checked against `u64` overflow, so no sum is ever negative
//! and the full unsigned range is available.
//!
//! # Example
//! ```
//! use number_set::Universe;
//!
//! let universe = Universe::parse("8 7 6 5 4").unwrap().validate().unwrap();
//! let result = partition_solver::solve(&universe, 2).unwrap();
//! assert_eq!(result.residual, 2);
//! assert_eq!(result.sums(), vec![16, 14]);
//! ```

mod error;
pub(crate) mod result;
pub mod strategy;
pub mod tracker;

pub use error::SolverError;
pub use result::{PartitionGroup, PartitionResult};
pub use strategy::greedy::GreedyLeastLoaded;
pub use strategy::karmarkar_karp::KarmarkarKarp;
pub use strategy::{all_strategies, strategy_by_name, PartitionStrategy};
pub use tracker::{GroupTracker, Side, TwoWaySplit, ValueId};

use number_set::{Universe, Validated};

/// Partitions `universe` into `partitions` groups with the matching heuristic.
///
/// - `partitions == 2` → [`KarmarkarKarp`].
/// - any other `partitions >= 1` → [`GreedyLeastLoaded`] (`1` is the
///   trivial single group).
/// - `partitions == 0` → [`SolverError::InvalidArgument`].
pub fn solve(
    universe: &Universe<Validated>,
    partitions: usize,
) -> Result<PartitionResult, SolverError> {
    strategy_for(partitions)?.partition(universe, partitions)
}

/// Returns the strategy [`solve`] uses for `partitions` groups.
pub fn strategy_for(partitions: usize) -> Result<Box<dyn PartitionStrategy>, SolverError> {
    match partitions {
        0 => Err(SolverError::InvalidArgument(
            "number of partitions must be at least 1".into(),
        )),
        2 => {
            tracing::info!("2 partitions → using karmarkar-karp");
            Ok(Box::new(KarmarkarKarp::new()))
        }
        k => {
            tracing::info!("{k} partitions → using greedy least-loaded");
            Ok(Box::new(GreedyLeastLoaded::new()))
        }
    }
}

/// Returns `true` if the total is divisible by `partitions`.
///
/// Divisibility is necessary for a perfect partition, not sufficient:
/// `[3, 3, 2]` sums to 8 but has no 4/4 split.
pub fn perfect_partition_possible(universe: &Universe<Validated>, partitions: usize) -> bool {
    partitions > 0 && universe.total() % partitions as u64 == 0
}
