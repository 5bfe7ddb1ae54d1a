// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Random universe generation.
//!
//! Values are drawn uniformly from an inclusive range. The default range
//! `1..=199` gives small universes whose sums are easy to eyeball. A fixed
//! seed makes the draw reproducible across runs and platforms.

use crate::{Universe, UniverseError, Validated};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for a randomly generated universe.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomUniverse {
    /// Number of values to draw.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Smallest value (inclusive, must be >= 1).
    #[serde(default = "default_min")]
    pub min: u64,
    /// Largest value (inclusive).
    #[serde(default = "default_max")]
    pub max: u64,
    /// Seed for a reproducible draw; `None` uses OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    10
}

fn default_min() -> u64 {
    1
}

fn default_max() -> u64 {
    199
}

impl Default for RandomUniverse {
    fn default() -> Self {
        Self {
            count: default_count(),
            min: default_min(),
            max: default_max(),
            seed: None,
        }
    }
}

impl RandomUniverse {
    /// Draws `count` values in the default range.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the inclusive value range.
    pub fn with_range(mut self, min: u64, max: u64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Generates and validates the universe.
    pub fn generate(&self) -> Result<Universe<Validated>, UniverseError> {
        if self.min == 0 || self.min > self.max || self.max > i64::MAX as u64 {
            return Err(UniverseError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let values: Vec<i64> = (0..self.count)
            .map(|_| rng.random_range(self.min..=self.max) as i64)
            .collect();

        tracing::debug!(
            "generated {} random values in {}..={} (seed {:?})",
            values.len(),
            self.min,
            self.max,
            self.seed,
        );

        Universe::new(values).validate()
    }
}
