// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Karmarkar-Karp differencing for 2-way partitions.
//!
//! Sort the numbers descending, then repeatedly replace the two largest
//! with their difference until at most one value is left. That value (or
//! zero) is the difference between the two group sums.
//!
//! # Working-set order
//!
//! Values are popped largest first. Among equal values a freshly computed
//! difference comes before everything already waiting, and original
//! numbers keep their input order. This is the order a descending list
//! gets when each difference is inserted at the first slot whose value it
//! is >= to; a max-heap keyed on `(value, rank)` reproduces it in
//! O(log n) per step.
//!
//! A zero difference is never reinserted: it cannot change any later
//! difference, so its items are settled where they are.
//!
//! Group membership comes from [`GroupTracker`]; side A of the last value
//! is group 0 (the heavier group), side B is group 1.

use crate::result::{group_sum, ResultBuilder};
use crate::strategy::PartitionStrategy;
use crate::tracker::{GroupTracker, ValueId};
use crate::{PartitionResult, SolverError};
use number_set::{Universe, Validated};
use std::collections::BinaryHeap;

/// Karmarkar-Karp heuristic: 2-way partitions only.
#[derive(Debug, Clone, Default)]
pub struct KarmarkarKarp;

impl KarmarkarKarp {
    pub fn new() -> Self {
        Self
    }
}

/// An entry in the working set. Ordered by value, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Working {
    value: u64,
    rank: usize,
    id: ValueId,
}

impl PartitionStrategy for KarmarkarKarp {
    fn name(&self) -> &str {
        "karmarkar-karp"
    }

    fn supports(&self, partitions: usize) -> bool {
        partitions == 2
    }

    fn partition(
        &self,
        universe: &Universe<Validated>,
        partitions: usize,
    ) -> Result<PartitionResult, SolverError> {
        if !self.supports(partitions) {
            return Err(SolverError::InvalidArgument(format!(
                "{} produces 2-way partitions only, {partitions} requested",
                self.name(),
            )));
        }

        let n = universe.len();
        let mut tracker = GroupTracker::new(n);

        // Originals rank n..=1 in input order, so earlier items win ties.
        let mut working = universe
            .iter_items()
            .map(|item| {
                Ok(Working {
                    value: item.value,
                    rank: n - item.index,
                    id: tracker.leaf(item.index)?,
                })
            })
            .collect::<Result<BinaryHeap<_>, SolverError>>()?;

        // Differences rank above every original and above each other in
        // creation order.
        let mut next_rank = n + 1;
        let mut steps = 0usize;

        while working.len() > 1 {
            let (Some(larger), Some(smaller)) = (working.pop(), working.pop()) else {
                return Err(SolverError::InvariantViolation(
                    "working set drained mid-step".into(),
                ));
            };

            let difference = larger.value - smaller.value;
            let id = tracker.merge(larger.id, smaller.id)?;
            steps += 1;

            tracing::trace!(
                "step {steps}: {} - {} = {difference}",
                larger.value,
                smaller.value,
            );

            if difference == 0 {
                tracker.settle(id)?;
            } else {
                working.push(Working {
                    value: difference,
                    rank: next_rank,
                    id,
                });
                next_rank += 1;
            }
        }

        let survivor = working.pop();
        let residual = survivor.map_or(0, |w| w.value);
        let split = tracker.split(survivor.map(|w| w.id))?;

        let sum_a = group_sum(universe, &split.side_a)?;
        let sum_b = group_sum(universe, &split.side_b)?;
        if sum_a.checked_sub(sum_b) != Some(residual) {
            return Err(SolverError::InvariantViolation(format!(
                "group sums {sum_a} and {sum_b} do not differ by the residual {residual}"
            )));
        }

        let mut builder = ResultBuilder::new(self.name());
        builder.add_group(split.side_a, sum_a);
        builder.add_group(split.side_b, sum_b);
        let result = builder.build();
        result.validate(universe)?;

        tracing::debug!(
            "{} finished after {steps} differencing steps, residual {residual}",
            self.name(),
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(values: &[u64]) -> PartitionResult {
        let universe = Universe::from_values(values).unwrap();
        KarmarkarKarp::new().partition(&universe, 2).unwrap()
    }

    #[test]
    fn test_textbook_instance() {
        let r = solve(&[8, 7, 6, 5, 4]);
        assert_eq!(r.residual, 2);
        assert_eq!(r.sums(), vec![16, 14]);
        assert!(!r.is_perfect);
        // 8-7, 6-5, 4-(6-5), (4-6+5)-(8-7): {7, 5, 4} against {8, 6}.
        assert_eq!(r.groups[0].item_indices, vec![1, 3, 4]);
        assert_eq!(r.groups[1].item_indices, vec![0, 2]);
    }

    #[test]
    fn test_input_order_does_not_change_sums() {
        let r = solve(&[4, 5, 6, 7, 8]);
        assert_eq!(r.residual, 2);
        assert_eq!(r.sums(), vec![16, 14]);
        // Same values as the textbook instance, indices mirrored.
        assert_eq!(r.groups[0].item_indices, vec![0, 1, 3]);
        assert_eq!(r.groups[1].item_indices, vec![2, 4]);
    }

    #[test]
    fn test_perfect_with_all_zero_differences() {
        let r = solve(&[1, 1, 1, 1]);
        assert_eq!(r.residual, 0);
        assert_eq!(r.sums(), vec![2, 2]);
        assert!(r.is_perfect);
        assert_eq!(r.groups[0].item_indices, vec![0, 2]);
        assert_eq!(r.groups[1].item_indices, vec![1, 3]);
    }

    #[test]
    fn test_single_item_leftover() {
        let r = solve(&[9]);
        assert_eq!(r.residual, 9);
        assert_eq!(r.groups[0].item_indices, vec![0]);
        assert!(r.groups[1].is_empty());
        assert!(!r.is_perfect);
    }

    #[test]
    fn test_two_equal_items() {
        let r = solve(&[5, 5]);
        assert!(r.is_perfect);
        assert_eq!(r.sums(), vec![5, 5]);
    }

    #[test]
    fn test_interior_pivot_instance() {
        // 10-1=9, 9-6=3 ... exercises merges where the lighter operand
        // is the longer chain.
        let r = solve(&[10, 1, 5, 6, 3]);
        assert_eq!(r.sums().iter().sum::<u64>(), 25);
        assert_eq!(r.residual, r.sums()[0] - r.sums()[1]);
    }

    #[test]
    fn test_zero_difference_midway() {
        // 6-6 settles at zero, the rest keeps differencing.
        let r = solve(&[6, 6, 4, 3]);
        assert_eq!(r.residual, 1);
        assert_eq!(r.sums(), vec![10, 9]);
    }

    #[test]
    fn test_not_exact() {
        // {8, 7} / {6, 5, 4} splits evenly; differencing settles on 2.
        let r = solve(&[8, 7, 6, 5, 4]);
        assert_ne!(r.residual, 0);
    }

    #[test]
    fn test_rejects_other_partition_counts() {
        let u = Universe::from_values(&[3, 2, 1]).unwrap();
        for k in [0, 1, 3, 7] {
            assert!(matches!(
                KarmarkarKarp::new().partition(&u, k),
                Err(SolverError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_large_values() {
        let big = u64::MAX / 4;
        let r = solve(&[big, big - 1, 3]);
        assert_eq!(r.sums().iter().sum::<u64>(), 2 * big + 2);
        assert_eq!(r.residual, 2);
    }
}
