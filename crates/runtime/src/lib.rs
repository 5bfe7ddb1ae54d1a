// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # runtime
//!
//! Everything around the pure solvers that a front end needs:
//!
//! - [`SolverConfig`] : TOML configuration (partition count, strategy,
//!   empty-group policy, output format, batch concurrency, random universe).
//! - [`PartitionEngine`] : applies the policy, picks the strategy, times
//!   the solve and produces a [`SolveReport`].
//! - [`BatchOutcome`] : per-instance results of
//!   [`PartitionEngine::solve_batch`], which fans instances out on tokio.

mod batch;
mod config;
mod engine;
mod error;
mod report;

pub use batch::BatchOutcome;
pub use config::{OutputFormat, SolverConfig};
pub use engine::PartitionEngine;
pub use error::RuntimeError;
pub use report::SolveReport;
