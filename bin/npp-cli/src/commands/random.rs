// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp random` command: draw a random universe, print it, partition it.

use super::{banner, print_report, resolve_format};
use runtime::{OutputFormat, PartitionEngine, SolverConfig};

pub fn execute(
    mut config: SolverConfig,
    count: Option<usize>,
    min: Option<u64>,
    max: Option<u64>,
    seed: Option<u64>,
    partitions: Option<usize>,
    format: Option<String>,
) -> anyhow::Result<()> {
    let format = resolve_format(&config, format)?;

    let random = &mut config.random;
    if let Some(count) = count {
        random.count = count;
    }
    if let Some(min) = min {
        random.min = min;
    }
    if let Some(max) = max {
        random.max = max;
    }
    if seed.is_some() {
        random.seed = seed;
    }
    if let Some(k) = partitions {
        config.partitions = k;
    }

    let universe = config.random.generate()?;

    if format == OutputFormat::Text {
        banner("Random Universe");
        println!(
            "  Universe ({} values in {}..={}{}):",
            universe.len(),
            config.random.min,
            config.random.max,
            config
                .random
                .seed
                .map(|s| format!(", seed {s}"))
                .unwrap_or_default(),
        );
        println!("   {universe}");
        println!();
    }

    let partitions = config.partitions;
    let engine = PartitionEngine::new(config);
    let report = engine.solve_labeled("random", &universe, partitions)?;
    print_report(&report, format)
}
