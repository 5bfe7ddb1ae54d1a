// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Solve reports.
//!
//! A [`SolveReport`] wraps a [`PartitionResult`] with the context needed
//! to present it on its own: the input size and total, the group values,
//! whether a perfect split was arithmetically possible, and timing.

use crate::RuntimeError;
use number_set::{Universe, Validated};
use partition_solver::PartitionResult;
use std::time::Duration;

/// The outcome of a single solve, ready for printing or serialisation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SolveReport {
    /// Label for the solved instance (`"input"`, `"random"`, or an instance name).
    pub label: String,
    /// Strategy that produced the result.
    pub strategy: String,
    /// Number of groups requested.
    pub partitions: usize,
    /// Number of input items.
    pub item_count: usize,
    /// Sum of all input values.
    pub total: u64,
    /// Whether the total is divisible by the number of groups.
    pub perfect_possible: bool,
    /// Values of each group's items, in input order.
    pub group_values: Vec<Vec<u64>>,
    /// The partition itself.
    pub result: PartitionResult,
    /// Wall-clock solve time.
    pub elapsed: Duration,
}

impl SolveReport {
    /// Assembles a report from a finished result.
    pub fn new(
        label: &str,
        universe: &Universe<Validated>,
        result: PartitionResult,
        elapsed: Duration,
    ) -> Self {
        let partitions = result.num_groups();
        Self {
            label: label.to_string(),
            strategy: result.strategy_name.clone(),
            partitions,
            item_count: universe.len(),
            total: universe.total(),
            perfect_possible: partition_solver::perfect_partition_possible(universe, partitions),
            group_values: result.groups.iter().map(|g| g.values(universe)).collect(),
            result,
            elapsed,
        }
    }

    /// Returns a one-line summary suitable for logs and tables.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} items into {} groups with {}, sums {:?}, residual {}{} ({:.3}ms)",
            self.label,
            self.item_count,
            self.partitions,
            self.strategy,
            self.result.sums(),
            self.result.residual,
            if self.result.is_perfect {
                ", perfect"
            } else {
                ""
            },
            self.elapsed.as_secs_f64() * 1000.0,
        )
    }

    /// Renders the report as human-readable text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if !self.perfect_possible {
            out.push_str(&format!(
                "No perfect partition: total {} is not divisible by {}. Giving approximate solution...\n",
                self.total, self.partitions,
            ));
        }

        let subsets: Vec<String> = self
            .group_values
            .iter()
            .map(|values| {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                format!("{{{}}}", values.join(", "))
            })
            .collect();
        let joined = if subsets.len() == 2 {
            subsets.join(" and ")
        } else {
            subsets.join(" ")
        };

        out.push_str(&format!(
            "Subsets produced by {} ({} groups):\n  {joined}\n",
            self.strategy, self.partitions,
        ));
        out.push_str(&format!("Subset sums: {:?}\n", self.result.sums()));
        if self.result.residual > 0 {
            out.push_str(&format!("Subsets difference: {}\n", self.result.residual));
        }
        if self.result.is_perfect {
            out.push_str("***** Perfect partition exists. *****\n");
        } else {
            out.push_str("***** No perfect partition found. *****\n");
        }
        out
    }

    /// Serialises the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, RuntimeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
