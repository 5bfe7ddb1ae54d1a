// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp compare` command: every applicable strategy on the same input.

use super::banner;
use number_set::Universe;
use runtime::{PartitionEngine, SolverConfig};

pub fn execute(
    config: SolverConfig,
    values: String,
    partitions: Option<usize>,
) -> anyhow::Result<()> {
    banner("Strategy Comparison");

    let universe = Universe::parse(&values)?.validate()?;
    let k = partitions.unwrap_or(config.partitions);
    let engine = PartitionEngine::new(config);

    println!("  {}", universe.summary());
    if !partition_solver::perfect_partition_possible(&universe, k) {
        println!("  Total is not divisible by {k}; no perfect partition exists.");
    }
    println!();

    let reports = engine.compare(&universe, k)?;

    println!(
        "  {:<16} {:<24} {:>10} {:>8} {:>10}",
        "Strategy", "Sums", "Residual", "Perfect", "Time",
    );
    println!("  {}", "-".repeat(72));
    for report in &reports {
        let sums = format!("{:?}", report.result.sums());
        println!(
            "  {:<16} {:<24} {:>10} {:>8} {:>7.3} ms",
            report.strategy,
            super::truncate(&sums, 24),
            report.result.residual,
            if report.result.is_perfect { "yes" } else { "no" },
            report.elapsed.as_secs_f64() * 1000.0,
        );
    }
    println!();

    if let Some(best) = reports.iter().min_by_key(|r| r.result.residual) {
        println!("  Best: {} ({})", best.strategy, best.result.render(&universe));
    }

    Ok(())
}
