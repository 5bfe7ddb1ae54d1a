// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy least-loaded partitioning for any number of groups.
//!
//! Numbers are taken largest first and each one goes to whichever group
//! currently has the smallest sum. This is the LPT (longest processing
//! time) rule from multiprocessor scheduling: fast and usually close, but
//! with no exactness guarantee.
//!
//! # Tie-breaking
//! - Equal values are taken in input order.
//! - Among groups with equal sums the lowest group index wins.
//!
//! Group loads live in a min-heap keyed on `(sum, group_index)`, so each
//! assignment is O(log k) and the tie rule falls out of the key order.
//!
//! More groups than items is allowed; the surplus groups stay empty.

use crate::result::ResultBuilder;
use crate::strategy::PartitionStrategy;
use crate::{PartitionResult, SolverError};
use number_set::{Item, Universe, Validated};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Greedy least-loaded-bin assignment.
#[derive(Debug, Clone, Default)]
pub struct GreedyLeastLoaded;

impl GreedyLeastLoaded {
    pub fn new() -> Self {
        Self
    }
}

impl PartitionStrategy for GreedyLeastLoaded {
    fn name(&self) -> &str {
        "greedy"
    }

    fn supports(&self, partitions: usize) -> bool {
        partitions >= 1
    }

    fn partition(
        &self,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<PartitionResult, SolverError> {
        if !self.supports(partitions) {
            return Err(SolverError::InvalidArgument(
                "number of partitions must be at least 1".into(),
            ));
        }
        if partitions > universe.len() {
            tracing::debug!(
                "{partitions} groups for {} items: {} groups will stay empty",
                universe.len(),
                partitions - universe.len(),
            );
        }

        let mut order: Vec<&Item> = universe.iter_items().collect();
        order.sort_by(|a, b| b.value.cmp(&a.value).then(a.index.cmp(&b.index)));

        let mut loads: BinaryHeap<Reverse<(u64, usize)>> =
            (0..partitions).map(|g| Reverse((0, g))).collect();
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); partitions];
        let mut sums = vec![0u64; partitions];

        for item in order {
            let Some(Reverse((sum, group))) = loads.pop() else {
                return Err(SolverError::InvariantViolation(
                    "no group available for assignment".into(),
                ));
            };
            let sum = sum + item.value;
            members[group].push(item.index);
            sums[group] = sum;
            loads.push(Reverse((sum, group)));

            tracing::trace!("item {} ({}) -> group {group}, sum {sum}", item.index, item.value);
        }

        let mut builder = ResultBuilder::new(self.name());
        for (indices, sum) in members.into_iter().zip(sums) {
            builder.add_group(indices, sum);
        }
        let result = builder.build();
        result.validate(universe)?;

        tracing::debug!("{}", result.summary());
        Ok(result)
    }
}
