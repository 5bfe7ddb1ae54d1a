// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod batch;
pub mod compare;
pub mod random;
pub mod solve;

use runtime::{OutputFormat, SolveReport, SolverConfig};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber. `RUST_LOG` is honoured only at the
/// default verbosity.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SolverConfig> {
    match path {
        Some(path) => {
            let config = SolverConfig::from_file(path).map_err(|e| {
                anyhow::anyhow!("failed to load config from '{}': {e}", path.display())
            })?;
            tracing::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(SolverConfig::default())
        }
    }
}

/// Resolves the output format: the flag wins over the config file.
pub fn resolve_format(
    config: &SolverConfig,
    flag: Option<String>,
) -> anyhow::Result<OutputFormat> {
    match flag {
        Some(f) => Ok(f.parse::<OutputFormat>()?),
        None => Ok(config.output),
    }
}

/// Prints the boxed title used by every text-mode command.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", format!("npp · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

/// Prints a single report in the requested format.
pub fn print_report(report: &SolveReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            for line in report.render_text().lines() {
                println!("  {line}");
            }
            println!();
            println!("  Solved in {:.3} ms", report.elapsed.as_secs_f64() * 1000.0);
        }
    }
    Ok(())
}

/// Truncates a string to `max` characters, adding an ellipsis if needed.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
