// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition runtime.

/// Errors that can occur while configuring or running partition jobs.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The request is not allowed by the configured policy.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input numbers could not be turned into a universe.
    #[error("universe error: {0}")]
    Universe(#[from] number_set::UniverseError),

    /// The solver rejected the request or failed internally.
    #[error("solver error: {0}")]
    Solver(#[from] partition_solver::SolverError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A report could not be serialised.
    #[error("report serialisation failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A batch worker task panicked or was cancelled.
    #[error("batch task failed: {0}")]
    TaskFailed(String),
}
