// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # number-set
//!
//! The input side of number partitioning: a multiset of strictly positive
//! integers whose members keep their identity (input position) so that
//! solvers can report *which* numbers went where, not just the sums.
//!
//! - [`Item`]: one input number and its position.
//! - [`Universe`]: the whole multiset, with a **type-state pattern**
//!   (`Raw` → `Validated`). Solvers only accept `Universe<Validated>`.
//! - [`RandomUniverse`]: reproducible random universe generation.
//! - [`InstanceFile`]: a JSON file holding named partitioning instances.
//!
//! # Example
//! ```
//! use number_set::Universe;
//!
//! let universe = Universe::parse("8 7 6 5 4").unwrap().validate().unwrap();
//! assert_eq!(universe.len(), 5);
//! assert_eq!(universe.total(), 30);
//! ```

mod error;
mod instance;
mod item;
mod random;
pub mod universe;

pub use error::UniverseError;
pub use instance::{Instance, InstanceFile};
pub use item::Item;
pub use random::RandomUniverse;
pub use universe::{Raw, Universe, Validated};
