// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Instance files: named partitioning problems stored as JSON.
//!
//! # Format
//! ```json
//! {
//!   "instances": [
//!     { "name": "textbook", "values": [8, 7, 6, 5, 4], "partitions": 2 },
//!     { "name": "three-way", "values": [10, 9, 8, 7, 6, 5], "partitions": 3 }
//!   ]
//! }
//! ```

use crate::{Universe, UniverseError, Validated};
use std::path::Path;

/// A file holding one or more partitioning instances.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InstanceFile {
    pub instances: Vec<Instance>,
}

/// A single named instance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Instance {
    /// Label used in reports.
    pub name: String,
    /// The numbers to partition.
    pub values: Vec<i64>,
    /// Requested number of groups.
    #[serde(default = "default_partitions")]
    pub partitions: usize,
}

fn default_partitions() -> usize {
    2
}

impl Instance {
    /// Validates the values into a universe.
    pub fn universe(&self) -> Result<Universe<Validated>, UniverseError> {
        Universe::new(self.values.clone()).validate()
    }
}

impl InstanceFile {
    /// Loads an instance file from disk.
    pub fn from_file(path: &Path) -> Result<Self, UniverseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses an instance file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, UniverseError> {
        let file: Self = serde_json::from_str(json)?;
        Ok(file)
    }

    /// Serialises the file to pretty JSON.
    pub fn to_json(&self) -> Result<String, UniverseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the file is usable as a batch.
    ///
    /// Checks:
    /// - At least one instance.
    /// - No duplicate names.
    /// - No empty names.
    ///
    /// Values are validated per instance at solve time, so one bad
    /// instance does not hide the others.
    pub fn validate(&self) -> Result<(), UniverseError> {
        if self.instances.is_empty() {
            return Err(UniverseError::InvalidInstance {
                name: "<file>".into(),
                detail: "instance file contains no instances".into(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for instance in &self.instances {
            if instance.name.trim().is_empty() {
                return Err(UniverseError::InvalidInstance {
                    name: instance.name.clone(),
                    detail: "instance name is empty".into(),
                });
            }
            if !seen.insert(instance.name.as_str()) {
                return Err(UniverseError::InvalidInstance {
                    name: instance.name.clone(),
                    detail: "duplicate instance name".into(),
                });
            }
        }
        Ok(())
    }
}
