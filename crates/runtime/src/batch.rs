// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Concurrent batch solving.
//!
//! Each instance is an independent pure computation, so instances are
//! fanned out to tokio's blocking pool. A semaphore caps how many run at
//! once. Outcomes come back in file order, and a bad instance only fails
//! its own outcome.

use crate::{PartitionEngine, RuntimeError, SolveReport};
use number_set::{Instance, InstanceFile};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// The result of one batch instance.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchOutcome {
    /// Instance name.
    pub name: String,
    /// The report, if the instance solved.
    pub report: Option<SolveReport>,
    /// The error message, if it did not.
    pub error: Option<String>,
}

impl BatchOutcome {
    fn from_result(name: String, result: Result<SolveReport, RuntimeError>) -> Self {
        match result {
            Ok(report) => Self {
                name,
                report: Some(report),
                error: None,
            },
            Err(e) => Self {
                name,
                report: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Returns `true` if the instance solved.
    pub fn is_ok(&self) -> bool {
        self.report.is_some()
    }
}

impl PartitionEngine {
    /// Solves a single named instance.
    pub fn solve_instance(&self, instance: &Instance) -> Result<SolveReport, RuntimeError> {
        let universe = instance.universe()?;
        self.solve_labeled(&instance.name, &universe, instance.partitions)
    }

    /// Solves every instance of `file` concurrently.
    ///
    /// Fails only if the file itself is unusable (no instances, duplicate
    /// names); per-instance failures are reported in the outcomes.
    pub async fn solve_batch(&self, file: &InstanceFile) -> Result<Vec<BatchOutcome>, RuntimeError> {
        file.validate()?;

        let limit = self.config().resolve_concurrency();
        let semaphore = Arc::new(Semaphore::new(limit));
        tracing::info!(
            "solving {} instances, at most {limit} at a time",
            file.instances.len(),
        );

        let mut handles = Vec::with_capacity(file.instances.len());
        for instance in file.instances.iter().cloned() {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| RuntimeError::TaskFailed(e.to_string()))?;
            let engine = self.clone();
            let name = instance.name.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                engine.solve_instance(&instance)
            });
            handles.push((name, handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(RuntimeError::TaskFailed(format!("{name}: {e}"))),
            };
            if let Err(e) = &result {
                tracing::warn!("instance '{name}' failed: {e}");
            }
            outcomes.push(BatchOutcome::from_result(name, result));
        }

        Ok(outcomes)
    }
}
