// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for universe construction and loading.

/// Errors raised while building or loading a [`crate::Universe`].
#[derive(Debug, thiserror::Error)]
pub enum UniverseError {
    /// The universe contains no numbers.
    #[error("universe cannot be empty")]
    Empty,

    /// A number is zero or negative.
    #[error("value {value} at position {index} is not a positive integer")]
    NonPositive { index: usize, value: i64 },

    /// A token in the textual input is not an integer.
    #[error("token '{token}' at position {position} is not an integer")]
    Parse { position: usize, token: String },

    /// A single value is larger than the universe can hold.
    #[error("value {value} at position {index} exceeds the largest supported value {}", i64::MAX)]
    ValueTooLarge { index: usize, value: u64 },

    /// The total of all values does not fit in a `u64`.
    #[error("sum of the universe overflows a 64-bit integer")]
    SumOverflow,

    /// The requested random value range is unusable.
    #[error("invalid value range {min}..={max}: values must be positive and min <= max")]
    InvalidRange { min: u64, max: u64 },

    /// An instance file could not be read.
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    /// An instance file is not valid JSON for the expected layout.
    #[error("failed to parse instance file: {0}")]
    Json(#[from] serde_json::Error),

    /// An instance inside an instance file is malformed.
    #[error("invalid instance '{name}': {detail}")]
    InvalidInstance { name: String, detail: String },
}
