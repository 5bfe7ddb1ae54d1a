// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition result: the output of every solver.
//!
//! A result is `k` groups of input indices with their sums. Group order is
//! deterministic for a given input but carries no ranking. The result is
//! the contract between the solvers and whatever presents them.

use crate::SolverError;
use number_set::{Universe, Validated};

/// One group of a partition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PartitionGroup {
    /// Position of this group in the result.
    pub group_index: usize,
    /// Input indices of the items in this group, ascending.
    pub item_indices: Vec<usize>,
    /// Sum of the values of those items. Unsigned: every value is positive,
    /// and a validated universe's total fits in a `u64`.
    pub sum: u64,
}

impl PartitionGroup {
    /// Number of items in this group.
    pub fn num_items(&self) -> usize {
        self.item_indices.len()
    }

    /// Returns `true` if no item was assigned here.
    pub fn is_empty(&self) -> bool {
        self.item_indices.is_empty()
    }

    /// The values of this group's items, in index order.
    pub fn values(&self, universe: &Universe<Validated>) -> Vec<u64> {
        self.item_indices
            .iter()
            .filter_map(|&i| universe.item(i).map(|item| item.value))
            .collect()
    }
}

/// The complete partition produced by a [`crate::PartitionStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PartitionResult {
    /// Strategy that produced this result.
    pub strategy_name: String,
    /// The groups, `k` of them.
    pub groups: Vec<PartitionGroup>,
    /// Largest group sum minus smallest group sum.
    pub residual: u64,
    /// `true` iff every group has the same sum.
    pub is_perfect: bool,
}

impl PartitionResult {
    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.num_items()).sum()
    }

    /// Group sums in group order.
    pub fn sums(&self) -> Vec<u64> {
        self.groups.iter().map(|g| g.sum).collect()
    }

    /// Group index holding each item, indexed by input position.
    pub fn assignment(&self, num_items: usize) -> Vec<Option<usize>> {
        let mut owner = vec![None; num_items];
        for group in &self.groups {
            for &i in &group.item_indices {
                if let Some(slot) = owner.get_mut(i) {
                    *slot = Some(group.group_index);
                }
            }
        }
        owner
    }

    /// Checks the result against the universe it was computed from.
    ///
    /// Checks:
    /// - At least one group.
    /// - Group indices are consecutive starting from 0.
    /// - Every item appears in exactly one group, and no unknown index appears.
    /// - Each group's sum equals the sum of its items.
    /// - `residual` equals max sum minus min sum.
    /// - `is_perfect` holds iff all sums are equal.
    pub fn validate(&self, universe: &Universe<Validated>) -> Result<(), SolverError> {
        let fail = |detail: String| {
            Err(SolverError::InvariantViolation(format!(
                "{} result: {detail}",
                self.strategy_name
            )))
        };

        if self.groups.is_empty() {
            return fail("no groups".into());
        }

        let mut seen = vec![false; universe.len()];
        for (expected, group) in self.groups.iter().enumerate() {
            if group.group_index != expected {
                return fail(format!(
                    "expected group index {expected}, got {}",
                    group.group_index,
                ));
            }

            let mut sum: u64 = 0;
            for &i in &group.item_indices {
                let Some(item) = universe.item(i) else {
                    return fail(format!("group {expected} references unknown item {i}"));
                };
                if std::mem::replace(&mut seen[i], true) {
                    return fail(format!("item {i} appears in more than one group"));
                }
                sum += item.value;
            }

            if sum != group.sum {
                return fail(format!(
                    "group {expected} reports sum {} but its items sum to {sum}",
                    group.sum,
                ));
            }
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return fail(format!("item {missing} is not assigned to any group"));
        }

        let (min, max) = min_max(&self.sums());
        if self.residual != max - min {
            return fail(format!(
                "residual {} does not match sum spread {}",
                self.residual,
                max - min,
            ));
        }
        if self.is_perfect != (min == max) {
            return fail(format!(
                "perfect flag is {} but sums range over {min}..={max}",
                self.is_perfect,
            ));
        }

        Ok(())
    }

    /// Returns a one-line summary of the result.
    pub fn summary(&self) -> String {
        format!(
            "Partition '{}': {} groups, sums {:?}, residual {}, {}",
            self.strategy_name,
            self.num_groups(),
            self.sums(),
            self.residual,
            if self.is_perfect {
                "perfect"
            } else {
                "not perfect"
            },
        )
    }

    /// Renders the groups as value lists, e.g. `{4, 5, 7} and {6, 8}`.
    pub fn render(&self, universe: &Universe<Validated>) -> String {
        let parts: Vec<String> = self
            .groups
            .iter()
            .map(|g| {
                let values: Vec<String> =
                    g.values(universe).iter().map(|v| v.to_string()).collect();
                format!("{{{}}}", values.join(", "))
            })
            .collect();
        if parts.len() == 2 {
            parts.join(" and ")
        } else {
            parts.join(" ")
        }
    }
}

/// Sums the values of `indices`, failing on an index outside the universe.
pub(crate) fn group_sum(
    universe: &Universe<Validated>,
    indices: &[usize],
) -> Result<u64, SolverError> {
    indices.iter().try_fold(0u64, |acc, &i| {
        universe
            .item(i)
            .map(|item| acc + item.value)
            .ok_or_else(|| SolverError::InvariantViolation(format!("unknown item {i}")))
    })
}

fn min_max(sums: &[u64]) -> (u64, u64) {
    let min = sums.iter().copied().min().unwrap_or(0);
    let max = sums.iter().copied().max().unwrap_or(0);
    (min, max)
}

/// Builder for assembling a [`PartitionResult`] group by group.
///
/// Used internally by strategy implementations; `residual` and
/// `is_perfect` are derived from the sums on `build`.
pub(crate) struct ResultBuilder {
    strategy_name: String,
    groups: Vec<PartitionGroup>,
}

impl ResultBuilder {
    pub fn new(strategy_name: &str) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            groups: Vec::new(),
        }
    }

    /// Adds a group; indices are sorted ascending.
    pub fn add_group(&mut self, mut item_indices: Vec<usize>, sum: u64) {
        item_indices.sort_unstable();
        let group_index = self.groups.len();
        self.groups.push(PartitionGroup {
            group_index,
            item_indices,
            sum,
        });
    }

    pub fn build(self) -> PartitionResult {
        let (min, max) = min_max(&self.groups.iter().map(|g| g.sum).collect::<Vec<_>>());
        PartitionResult {
            strategy_name: self.strategy_name,
            groups: self.groups,
            residual: max - min,
            is_perfect: min == max,
        }
    }
}
