// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # npp
//!
//! Command-line interface for the number partitioning solvers.
//!
//! ## Usage
//! ```bash
//! # Two-way partition with Karmarkar-Karp
//! npp solve --values "8 7 6 5 4"
//!
//! # Three-way partition of a seeded random universe
//! npp random --count 20 --seed 42 -k 3
//!
//! # Run every applicable strategy side by side
//! npp compare --values "8 7 6 5 4" -k 2
//!
//! # Solve a JSON file of instances concurrently
//! npp batch --file instances.json --format json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "npp",
    about = "Number partitioning: Karmarkar-Karp for two groups, greedy for more",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a list of positive integers.
    Solve {
        /// Values separated by spaces or commas (e.g., "8 7 6 5 4").
        #[arg(long)]
        values: String,

        /// Number of groups.
        #[arg(short = 'k', long)]
        partitions: Option<usize>,

        /// Strategy: auto, karmarkar-karp, greedy.
        #[arg(short, long)]
        strategy: Option<String>,

        /// Output format: text or json.
        #[arg(short, long)]
        format: Option<String>,

        /// Allow more groups than values (extra groups stay empty).
        #[arg(long)]
        allow_empty_groups: bool,
    },

    /// Generate a random universe and partition it.
    Random {
        /// Number of values to generate.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Smallest value (inclusive).
        #[arg(long)]
        min: Option<u64>,

        /// Largest value (inclusive).
        #[arg(long)]
        max: Option<u64>,

        /// Seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of groups.
        #[arg(short = 'k', long)]
        partitions: Option<usize>,

        /// Output format: text or json.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Run every strategy that supports the requested group count.
    Compare {
        /// Values separated by spaces or commas.
        #[arg(long)]
        values: String,

        /// Number of groups.
        #[arg(short = 'k', long)]
        partitions: Option<usize>,
    },

    /// Solve every instance of a JSON instance file concurrently.
    Batch {
        /// Path to the instance file.
        #[arg(long)]
        file: std::path::PathBuf,

        /// Output format: text or json.
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Solve {
            values,
            partitions,
            strategy,
            format,
            allow_empty_groups,
        } => commands::solve::execute(
            config,
            values,
            partitions,
            strategy,
            format,
            allow_empty_groups,
        ),
        Commands::Random {
            count,
            min,
            max,
            seed,
            partitions,
            format,
        } => commands::random::execute(config, count, min, max, seed, partitions, format),
        Commands::Compare { values, partitions } => {
            commands::compare::execute(config, values, partitions)
        }
        Commands::Batch { file, format } => commands::batch::execute(config, file, format).await,
    }
}
