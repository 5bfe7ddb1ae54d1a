// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property and scenario tests for the partition solvers.
//!
//! Every result is checked against the universe it came from: each item
//! exactly once, sums that match their members, and a perfect flag that
//! agrees with the sums.

use number_set::{Universe, Validated};
use partition_solver::{
    solve, GreedyLeastLoaded, KarmarkarKarp, PartitionResult, PartitionStrategy, SolverError,
};
use proptest::prelude::*;

// ── Helpers ────────────────────────────────────────────────────

fn universe(values: &[u64]) -> Universe<Validated> {
    Universe::from_values(values).unwrap()
}

/// Asserts the partition invariants independently of `validate`.
fn assert_partition(result: &PartitionResult, universe: &Universe<Validated>, k: usize) {
    assert_eq!(result.num_groups(), k);

    let mut hits = vec![0usize; universe.len()];
    for group in &result.groups {
        let mut sum = 0u64;
        for &i in &group.item_indices {
            hits[i] += 1;
            sum += universe.item(i).unwrap().value;
        }
        assert_eq!(sum, group.sum, "group {} sum", group.group_index);
    }
    assert!(hits.iter().all(|&h| h == 1), "item coverage {hits:?}");

    let sums = result.sums();
    let all_equal = sums.windows(2).all(|w| w[0] == w[1]);
    assert_eq!(result.is_perfect, all_equal);
}

fn sorted(mut v: Vec<u64>) -> Vec<u64> {
    v.sort_unstable();
    v
}

// ── Scenarios ──────────────────────────────────────────────────

#[test]
fn kk_textbook_instance() {
    let u = universe(&[8, 7, 6, 5, 4]);
    let r = solve(&u, 2).unwrap();
    assert_partition(&r, &u, 2);
    assert_eq!(r.residual, 2);
    assert_eq!(r.sums(), vec![16, 14]);
    assert!(!r.is_perfect);
    assert_eq!(r.render(&u), "{7, 5, 4} and {8, 6}");
}

#[test]
fn kk_reordered_textbook_instance_has_same_sums() {
    let a = solve(&universe(&[8, 7, 6, 5, 4]), 2).unwrap();
    let b = solve(&universe(&[4, 5, 6, 7, 8]), 2).unwrap();
    assert_eq!(a.sums(), b.sums());
    assert_eq!(a.residual, b.residual);
}

#[test]
fn kk_all_ones_is_perfect() {
    let u = universe(&[1, 1, 1, 1]);
    let r = solve(&u, 2).unwrap();
    assert_partition(&r, &u, 2);
    assert_eq!(r.residual, 0);
    assert_eq!(r.sums(), vec![2, 2]);
    assert!(r.is_perfect);
}

#[test]
fn greedy_three_way_instance() {
    let u = universe(&[10, 9, 8, 7, 6, 5]);
    let r = solve(&u, 3).unwrap();
    assert_partition(&r, &u, 3);
    assert_eq!(r.sums(), vec![15, 15, 15]);
    assert!(r.is_perfect);
}

#[test]
fn empty_input_never_reaches_the_solver() {
    assert!(Universe::new(vec![]).validate().is_err());
    assert!(Universe::parse("").unwrap().validate().is_err());
}

#[test]
fn zero_partitions_rejected() {
    let u = universe(&[1, 2, 3]);
    assert!(matches!(solve(&u, 0), Err(SolverError::InvalidArgument(_))));
}

#[test]
fn kk_long_run_of_equal_values() {
    let values = vec![12u64; 101];
    let u = universe(&values);
    let r = solve(&u, 2).unwrap();
    assert_partition(&r, &u, 2);
    assert_eq!(r.residual, 12);
    assert_eq!(sorted(r.sums()), vec![600, 612]);
}

#[test]
fn kk_powers_of_two() {
    // 64 - 32 - 16 - 8 - 4 - 2 - 1 - 1 = 0.
    let u = universe(&[1, 1, 2, 4, 8, 16, 32, 64]);
    let r = solve(&u, 2).unwrap();
    assert_partition(&r, &u, 2);
    assert!(r.is_perfect);
    assert_eq!(r.groups[0].item_indices, vec![7]);
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_kk_partition_is_complete(values in prop::collection::vec(1u64..10_000, 1..60)) {
        let u = universe(&values);
        let r = KarmarkarKarp::new().partition(&u, 2).unwrap();
        assert_partition(&r, &u, 2);
    }

    #[test]
    fn prop_kk_sides_differ_by_residual(values in prop::collection::vec(1u64..10_000, 1..60)) {
        let u = universe(&values);
        let r = KarmarkarKarp::new().partition(&u, 2).unwrap();
        let sums = r.sums();
        prop_assert_eq!(sums[0].abs_diff(sums[1]), r.residual);
        prop_assert_eq!(r.is_perfect, r.residual == 0);
        prop_assert!(r.residual <= u.max_value());
    }

    #[test]
    fn prop_greedy_partition_is_complete(
        values in prop::collection::vec(1u64..10_000, 1..60),
        k in 1usize..8,
    ) {
        let u = universe(&values);
        let r = GreedyLeastLoaded::new().partition(&u, k).unwrap();
        assert_partition(&r, &u, k);
        prop_assert!(r.residual <= u.max_value());
    }

    #[test]
    fn prop_solve_matches_dispatch(
        values in prop::collection::vec(1u64..1_000, 1..40),
        k in 1usize..6,
    ) {
        let u = universe(&values);
        let r = solve(&u, k).unwrap();
        assert_partition(&r, &u, k);
        let expected = if k == 2 { "karmarkar-karp" } else { "greedy" };
        prop_assert_eq!(r.strategy_name.as_str(), expected);
    }

    #[test]
    fn prop_permutation_keeps_sums(
        (values, shuffled) in prop::collection::vec(1u64..50, 1..30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        k in 1usize..5,
    ) {
        let a = solve(&universe(&values), k).unwrap();
        let b = solve(&universe(&shuffled), k).unwrap();
        prop_assert_eq!(a.sums(), b.sums());
        prop_assert_eq!(a.residual, b.residual);
    }
}
