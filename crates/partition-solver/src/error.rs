// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition solvers.

/// Errors that can occur while partitioning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// The caller asked for something the solver cannot do
    /// (zero partitions, or a partition count a strategy does not support).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal bookkeeping is inconsistent. This is a bug, never a user error.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
