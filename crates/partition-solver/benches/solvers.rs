// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the partition solvers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use number_set::RandomUniverse;
use partition_solver::{GreedyLeastLoaded, KarmarkarKarp, PartitionStrategy};

fn bench_karmarkar_karp(c: &mut Criterion) {
    let mut group = c.benchmark_group("karmarkar-karp");
    for n in [100usize, 1_000, 10_000] {
        let universe = RandomUniverse::new(n)
            .with_range(1, 1_000_000)
            .with_seed(7)
            .generate()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &universe, |b, u| {
            b.iter(|| KarmarkarKarp::new().partition(black_box(u), 2).unwrap())
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    let universe = RandomUniverse::new(10_000)
        .with_range(1, 1_000_000)
        .with_seed(7)
        .generate()
        .unwrap();
    for k in [3usize, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| GreedyLeastLoaded::new().partition(black_box(&universe), k).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_karmarkar_karp, bench_greedy);
criterion_main!(benches);
