// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp batch` command: solve every instance of a JSON file concurrently.
//!
//! Instances run on tokio's blocking pool, capped by `max_concurrency`.
//! A failing instance is reported in its row and the command exits with an
//! error once every instance has been printed.

use super::{banner, resolve_format, truncate};
use number_set::InstanceFile;
use runtime::{BatchOutcome, OutputFormat, PartitionEngine, SolverConfig};
use std::path::PathBuf;

pub async fn execute(
    config: SolverConfig,
    file: PathBuf,
    format: Option<String>,
) -> anyhow::Result<()> {
    let format = resolve_format(&config, format)?;
    let instances = InstanceFile::from_file(&file).map_err(|e| {
        anyhow::anyhow!("failed to load instances from '{}': {e}", file.display())
    })?;

    let engine = PartitionEngine::new(config);
    let outcomes = engine.solve_batch(&instances).await?;
    let failed = log_failures(&outcomes);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            banner("Batch Solver");
            println!("  File:      {}", file.display());
            println!("  Instances: {}", outcomes.len());
            println!(
                "  Workers:   {}",
                engine.config().resolve_concurrency()
            );
            println!();

            println!(
                "  {:<20} {:<16} {:>4} {:>6} {:>10} {:>8}",
                "Instance", "Strategy", "k", "Items", "Residual", "Perfect",
            );
            println!("  {}", "-".repeat(70));
            for outcome in &outcomes {
                match (&outcome.report, &outcome.error) {
                    (Some(report), _) => println!(
                        "  {:<20} {:<16} {:>4} {:>6} {:>10} {:>8}",
                        truncate(&outcome.name, 20),
                        report.strategy,
                        report.partitions,
                        report.item_count,
                        report.result.residual,
                        if report.result.is_perfect { "yes" } else { "no" },
                    ),
                    (None, error) => println!(
                        "  {:<20} FAILED: {}",
                        truncate(&outcome.name, 20),
                        error.as_deref().unwrap_or("unknown error"),
                    ),
                }
            }
            println!();
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} instances failed", outcomes.len());
    }
    Ok(())
}

/// Logs every failed instance and returns how many failed.
fn log_failures(outcomes: &[BatchOutcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes.iter().filter(|o| !o.is_ok()) {
        tracing::warn!(
            "batch instance '{}' failed: {}",
            outcome.name,
            outcome.error.as_deref().unwrap_or("unknown error"),
        );
        failed += 1;
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_failures_counts_failed_rows() {
        let engine = PartitionEngine::new(SolverConfig::default());
        let instances = InstanceFile::from_json(
            r#"{ "instances": [
                { "name": "ok", "values": [8, 7, 6, 5, 4] },
                { "name": "negative", "values": [4, -2] },
                { "name": "empty", "values": [] }
            ] }"#,
        )
        .unwrap();
        let outcomes: Vec<BatchOutcome> = instances
            .instances
            .iter()
            .map(|instance| match engine.solve_instance(instance) {
                Ok(report) => BatchOutcome {
                    name: instance.name.clone(),
                    report: Some(report),
                    error: None,
                },
                Err(e) => BatchOutcome {
                    name: instance.name.clone(),
                    report: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        assert_eq!(log_failures(&outcomes), 2);
        assert_eq!(log_failures(&outcomes[..1]), 0);
    }
}
