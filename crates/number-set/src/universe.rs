// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The universe: the multiset of numbers to be partitioned.
//!
//! # Type-State Pattern
//!
//! ```text
//! Universe<Raw>       : signed values as typed or generated, unchecked.
//!       │  .validate()
//!       ▼
//! Universe<Validated> : non-empty, strictly positive, total fits in u64.
//! ```
//!
//! The solvers only accept `Universe<Validated>`, so an empty universe or
//! a non-positive number can never reach them.

use crate::{Item, UniverseError};
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: values have not been checked.
#[derive(Debug, Clone)]
pub struct Raw;

/// Marker: values are non-empty, positive and their sum fits in a `u64`.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for universe states.
pub trait UniverseState: fmt::Debug + Clone {}
impl UniverseState for Raw {}
impl UniverseState for Validated {}

// ── Universe ───────────────────────────────────────────────────────

/// An ordered multiset of integers.
///
/// Order matters only for identity: item `i` is the `i`-th number of the
/// input, whatever its value.
#[derive(Debug, Clone)]
pub struct Universe<S: UniverseState = Raw> {
    raw: Vec<i64>,
    items: Vec<Item>,
    total: u64,
    _state: std::marker::PhantomData<S>,
}

// ── Raw state ──────────────────────────────────────────────────────

impl Universe<Raw> {
    /// Creates an unchecked universe from signed values.
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            raw: values,
            items: Vec::new(),
            total: 0,
            _state: std::marker::PhantomData,
        }
    }

    /// Parses a universe from text.
    ///
    /// Numbers are separated by whitespace and/or commas:
    /// `"8 7 6 5 4"` and `"8, 7, 6, 5, 4"` are equivalent.
    pub fn parse(text: &str) -> Result<Self, UniverseError> {
        let values = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<i64>().map_err(|_| UniverseError::Parse {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(values))
    }

    /// Returns the unchecked values.
    pub fn raw_values(&self) -> &[i64] {
        &self.raw
    }

    /// Validates the values and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - At least one number.
    /// - Every number is strictly positive.
    /// - The total does not overflow a `u64`.
    pub fn validate(self) -> Result<Universe<Validated>, UniverseError> {
        if self.raw.is_empty() {
            return Err(UniverseError::Empty);
        }

        let mut items = Vec::with_capacity(self.raw.len());
        let mut total: u64 = 0;
        for (index, &value) in self.raw.iter().enumerate() {
            if value <= 0 {
                return Err(UniverseError::NonPositive { index, value });
            }
            let value = value as u64;
            total = total.checked_add(value).ok_or(UniverseError::SumOverflow)?;
            items.push(Item::new(index, value));
        }

        Ok(Universe {
            raw: self.raw,
            items,
            total,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl Universe<Validated> {
    /// Builds a validated universe directly from positive values.
    pub fn from_values(values: &[u64]) -> Result<Self, UniverseError> {
        let raw = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                i64::try_from(value).map_err(|_| UniverseError::ValueTooLarge { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Universe::new(raw).validate()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: validation rejects empty universes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns an item by its input index.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterates over the items in input order.
    pub fn iter_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The values in input order.
    pub fn values(&self) -> Vec<u64> {
        self.items.iter().map(|i| i.value).collect()
    }

    /// Sum of all values.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest value.
    pub fn max_value(&self) -> u64 {
        self.items.iter().map(|i| i.value).max().unwrap_or(0)
    }

    /// Returns a one-line description of the universe.
    pub fn summary(&self) -> String {
        format!(
            "Universe: {} items, total {}, largest {}",
            self.len(),
            self.total,
            self.max_value(),
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: UniverseState> fmt::Display for Universe<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.raw {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}
