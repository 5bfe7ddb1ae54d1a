// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: compare partitioning strategies on a random universe.
//!
//! ```bash
//! cargo run -p partition-runtime --example strategy_comparison
//! ```

use number_set::RandomUniverse;
use runtime::{PartitionEngine, SolverConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let universe = RandomUniverse::new(30).with_seed(42).generate()?;
    println!("Universe ({} items, total {}):", universe.len(), universe.total());
    println!("  {universe}\n");

    let engine = PartitionEngine::new(SolverConfig::default());

    for k in [2, 3, 5] {
        println!("── {k} partitions ──");
        for report in engine.compare(&universe, k)? {
            println!(
                "  {:<16} sums {:?}  residual {}",
                report.strategy,
                report.result.sums(),
                report.result.residual,
            );
        }
        println!();
    }

    Ok(())
}
