// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single member of a universe.

use std::fmt;

/// One input number.
///
/// Two items with the same value are still distinct: `index` is the
/// position of the number in the original input and is what partition
/// results refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Position in the input sequence.
    pub index: usize,
    /// The number itself (always > 0 once validated).
    pub value: u64,
}

impl Item {
    pub fn new(index: usize, value: u64) -> Self {
        Self { index, value }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.value, self.index)
    }
}
