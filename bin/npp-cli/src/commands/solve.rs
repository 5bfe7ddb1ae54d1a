// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp solve` command: partition values given on the command line.

use super::{banner, print_report, resolve_format, truncate};
use number_set::Universe;
use runtime::{OutputFormat, PartitionEngine, SolverConfig};

pub fn execute(
    mut config: SolverConfig,
    values: String,
    partitions: Option<usize>,
    strategy: Option<String>,
    format: Option<String>,
    allow_empty_groups: bool,
) -> anyhow::Result<()> {
    let format = resolve_format(&config, format)?;
    if let Some(k) = partitions {
        config.partitions = k;
    }
    if let Some(s) = strategy {
        config.strategy = s;
    }
    config.allow_empty_groups |= allow_empty_groups;

    let universe = Universe::parse(&values)?.validate()?;

    if format == OutputFormat::Text {
        banner("Partition Solver");
        println!("  Config:");
        println!("   Values:     {}", truncate(&universe.to_string(), 60));
        println!("   Partitions: {}", config.partitions);
        println!("   Strategy:   {}", config.strategy);
        println!();
    }

    let engine = PartitionEngine::new(config);
    let report = engine.solve(&universe)?;
    print_report(&report, format)
}
