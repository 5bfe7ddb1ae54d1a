// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Group tracking for the Karmarkar-Karp differencing method.
//!
//! KK repeatedly replaces the two largest working values `x >= y` with
//! `x - y`. Numerically that is all there is to it, but recovering the
//! actual 2-way split means remembering, for every working value, which
//! original items sit on its "plus" side and which on its "minus" side:
//!
//! ```text
//! value(v) = sum(items of v on side A) - sum(items of v on side B)
//! ```
//!
//! Replacing `x, y` by `x - y` keeps `x`'s items where they are and moves
//! every item of `y` to the opposite side. After the last step the
//! surviving value's sides are the two groups, and their difference is the
//! KK residual.
//!
//! # Representation
//!
//! Each working value owns a **chain**: a singly linked list of item
//! records threaded through one shared `Vec`, with `head`/`tail` indices
//! and a length. Merging splices the smaller operand's chain after the
//! larger operand's tail in O(1).
//!
//! Sides are recorded per link rather than inferred from position in the
//! chain. Position-alternation only works while every splice happens to
//! join two ends of matching polarity; e.g. `6 - (10 - 1 - 5)` needs `6`
//! opposite `10`, which sits in the middle of its chain.
//!
//! Flipping a whole operand is made cheap with a per-chain `flipped` bit:
//! a link's effective side is `link.side` XOR `chain.flipped`. A merge
//! rewrites the links of whichever operand is *shorter* and adopts the
//! other's bit, so each item is rewritten O(log n) times over a full run.
//!
//! Live chains are indexed by [`ValueId`] in a hash map. Looking up a value
//! that was never issued, or that has already been merged away, is an
//! [`SolverError::InvariantViolation`], never a silent miss.

use crate::SolverError;
use std::collections::HashMap;
use std::fmt;

/// One of the two sides of a 2-way split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Side {
    /// The side that carries a working value's positive contribution.
    A,
    /// The side subtracted from it.
    B,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn flip_if(self, flip: bool) -> Self {
        if flip {
            self.opposite()
        } else {
            self
        }
    }
}

/// Handle to a working value known to a [`GroupTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(usize);

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Per-item record. `next` threads the item into its value's chain.
#[derive(Debug, Clone, Copy)]
struct Link {
    next: Option<usize>,
    side: Side,
}

/// A working value's item chain.
#[derive(Debug, Clone, Copy)]
struct Chain {
    head: usize,
    tail: usize,
    len: usize,
    flipped: bool,
}

impl Chain {
    fn leaf(index: usize) -> Self {
        Self {
            head: index,
            tail: index,
            len: 1,
            flipped: false,
        }
    }
}

/// The final 2-way membership: input indices on each side, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TwoWaySplit {
    pub side_a: Vec<usize>,
    pub side_b: Vec<usize>,
}

/// Tracks side membership across a sequence of differencing merges.
///
/// Owned by a single solve; nothing is shared between runs.
#[derive(Debug)]
pub struct GroupTracker {
    links: Vec<Link>,
    live: HashMap<ValueId, Chain>,
    settled: Vec<Chain>,
    next_id: usize,
}

impl GroupTracker {
    /// Creates a tracker with one leaf value per item.
    ///
    /// Item `i` is registered as `ValueId` `i`, on side A of itself.
    pub fn new(num_items: usize) -> Self {
        let links = vec![
            Link {
                next: None,
                side: Side::A,
            };
            num_items
        ];
        let live = (0..num_items)
            .map(|i| (ValueId(i), Chain::leaf(i)))
            .collect();
        Self {
            links,
            live,
            settled: Vec::new(),
            next_id: num_items,
        }
    }

    /// Number of items being tracked.
    pub fn num_items(&self) -> usize {
        self.links.len()
    }

    /// Number of working values that have not been merged or settled.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if `id` is a live working value.
    pub fn is_live(&self, id: ValueId) -> bool {
        self.live.contains_key(&id)
    }

    /// Returns the leaf value for item `index`.
    pub fn leaf(&self, index: usize) -> Result<ValueId, SolverError> {
        if index >= self.links.len() {
            return Err(SolverError::InvariantViolation(format!(
                "item {index} is out of range for {} tracked items",
                self.links.len(),
            )));
        }
        Ok(ValueId(index))
    }

    /// Replaces `larger` and `smaller` with their difference.
    ///
    /// `larger`'s items keep their sides, every item of `smaller` moves to
    /// the opposite side, and `smaller`'s chain is spliced after
    /// `larger`'s tail. Both operands stop being live.
    pub fn merge(&mut self, larger: ValueId, smaller: ValueId) -> Result<ValueId, SolverError> {
        if larger == smaller {
            return Err(SolverError::InvariantViolation(format!(
                "cannot merge {larger} with itself"
            )));
        }
        for id in [larger, smaller] {
            if !self.live.contains_key(&id) {
                return Err(self.not_live(id));
            }
        }
        let big = self.live.remove(&larger).ok_or_else(|| self.not_live(larger))?;
        let small = self.live.remove(&smaller).ok_or_else(|| self.not_live(smaller))?;

        let flipped = if small.len <= big.len {
            self.rewrite(&small, Side::opposite, big.flipped);
            big.flipped
        } else {
            // Keep `small`'s links and invert its bit, then bring `big`'s
            // links into that orientation unchanged.
            let flipped = !small.flipped;
            self.rewrite(&big, |side| side, flipped);
            flipped
        };

        self.links[big.tail].next = Some(small.head);

        let id = ValueId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Chain {
                head: big.head,
                tail: small.tail,
                len: big.len + small.len,
                flipped,
            },
        );

        tracing::trace!(
            "merged {larger} ({} items) with {smaller} ({} items) into {id}",
            big.len,
            small.len,
        );
        Ok(id)
    }

    /// Retires a value whose sides already balance.
    ///
    /// A zero difference never needs to be differenced again; its items
    /// keep their sides and are folded into the final split as they are.
    pub fn settle(&mut self, id: ValueId) -> Result<(), SolverError> {
        let chain = self.live.remove(&id).ok_or_else(|| self.not_live(id))?;
        self.settled.push(chain);
        Ok(())
    }

    /// Walks a live value's chain from head to tail.
    pub fn chain(&self, id: ValueId) -> Result<Vec<(usize, Side)>, SolverError> {
        let chain = self.live.get(&id).ok_or_else(|| self.not_live(id))?;
        Ok(self.members(chain).collect())
    }

    /// Produces the final 2-way split.
    ///
    /// `survivor` is the last working value, or `None` when every value
    /// settled at zero. All other values must have been merged or settled.
    pub fn split(&self, survivor: Option<ValueId>) -> Result<TwoWaySplit, SolverError> {
        let survivor_chain = match survivor {
            Some(id) => Some(self.live.get(&id).ok_or_else(|| self.not_live(id))?),
            None => None,
        };

        let unresolved = self.live.len() - usize::from(survivor_chain.is_some());
        if unresolved > 0 {
            return Err(SolverError::InvariantViolation(format!(
                "{unresolved} working values are still unresolved"
            )));
        }

        let mut split = TwoWaySplit::default();
        for chain in self.settled.iter().chain(survivor_chain) {
            for (index, side) in self.members(chain) {
                match side {
                    Side::A => split.side_a.push(index),
                    Side::B => split.side_b.push(index),
                }
            }
        }

        let placed = split.side_a.len() + split.side_b.len();
        if placed != self.links.len() {
            return Err(SolverError::InvariantViolation(format!(
                "split places {placed} of {} items",
                self.links.len(),
            )));
        }

        split.side_a.sort_unstable();
        split.side_b.sort_unstable();
        Ok(split)
    }

    /// Iterates `(item index, effective side)` along a chain.
    fn members<'a>(&'a self, chain: &Chain) -> impl Iterator<Item = (usize, Side)> + 'a {
        let Chain {
            head, len, flipped, ..
        } = *chain;
        std::iter::successors(Some(head), move |&i| self.links[i].next)
            .take(len)
            .map(move |i| (i, self.links[i].side.flip_if(flipped)))
    }

    /// Re-encodes a chain's links for a new `flipped` bit, mapping each
    /// effective side through `f` on the way.
    fn rewrite(&mut self, chain: &Chain, f: impl Fn(Side) -> Side, target_flipped: bool) {
        let mut cursor = Some(chain.head);
        for _ in 0..chain.len {
            let Some(i) = cursor else { break };
            let link = &mut self.links[i];
            let effective = link.side.flip_if(chain.flipped);
            link.side = f(effective).flip_if(target_flipped);
            cursor = link.next;
        }
    }

    fn not_live(&self, id: ValueId) -> SolverError {
        let detail = if id.0 < self.next_id {
            "was already merged or settled"
        } else {
            "was never issued"
        };
        SolverError::InvariantViolation(format!("working value {id} {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signed sum of a chain: side A minus side B.
    fn signed(tracker: &GroupTracker, id: ValueId, values: &[i64]) -> i64 {
        tracker
            .chain(id)
            .unwrap()
            .iter()
            .map(|&(i, side)| match side {
                Side::A => values[i],
                Side::B => -values[i],
            })
            .sum()
    }

    #[test]
    fn test_leaves_start_on_side_a() {
        let t = GroupTracker::new(3);
        assert_eq!(t.live_count(), 3);
        let leaf = t.leaf(2).unwrap();
        assert_eq!(t.chain(leaf).unwrap(), vec![(2, Side::A)]);
    }

    #[test]
    fn test_leaf_merge() {
        let mut t = GroupTracker::new(2);
        let v = t.merge(t.leaf(0).unwrap(), t.leaf(1).unwrap()).unwrap();
        assert_eq!(t.chain(v).unwrap(), vec![(0, Side::A), (1, Side::B)]);
        assert_eq!(t.live_count(), 1);
    }

    #[test]
    fn test_textbook_sequence() {
        // 8 7 6 5 4: (8-7)=1, (6-5)=1, 4-(6-5)=3, (4-(6-5))-(8-7)=2.
        let values = [8, 7, 6, 5, 4];
        let mut t = GroupTracker::new(5);
        let l = |t: &GroupTracker, i| t.leaf(i).unwrap();

        let a = t.merge(l(&t, 0), l(&t, 1)).unwrap();
        let b = t.merge(l(&t, 2), l(&t, 3)).unwrap();
        let c = t.merge(l(&t, 4), b).unwrap();
        assert_eq!(signed(&t, c, &values), 3);
        let d = t.merge(c, a).unwrap();
        assert_eq!(signed(&t, d, &values), 2);

        assert_eq!(
            t.chain(d).unwrap(),
            vec![
                (4, Side::A),
                (2, Side::B),
                (3, Side::A),
                (0, Side::B),
                (1, Side::A),
            ]
        );

        let split = t.split(Some(d)).unwrap();
        assert_eq!(split.side_a, vec![1, 3, 4]);
        assert_eq!(split.side_b, vec![0, 2]);
    }

    #[test]
    fn test_interior_pivot() {
        // 6 - (10 - 1 - 5): 10 ends up opposite 6 although it is not a
        // chain end, which positional alternation cannot express.
        let values = [10, 1, 5, 6];
        let mut t = GroupTracker::new(4);
        let v = t.merge(t.leaf(0).unwrap(), t.leaf(1).unwrap()).unwrap();
        let w = t.merge(v, t.leaf(2).unwrap()).unwrap();
        assert_eq!(signed(&t, w, &values), 4);

        // Larger operand is the single leaf: the longer chain keeps its links.
        let x = t.merge(t.leaf(3).unwrap(), w).unwrap();
        assert_eq!(signed(&t, x, &values), 2);

        let split = t.split(Some(x)).unwrap();
        assert_eq!(split.side_a, vec![1, 2, 3]);
        assert_eq!(split.side_b, vec![0]);
    }

    #[test]
    fn test_repeated_flips_keep_signed_sum() {
        // Chain grows by absorbing ever larger chains, forcing the
        // "rewrite the larger operand" branch over and over.
        let values: Vec<i64> = (1..=16).collect();
        let mut t = GroupTracker::new(values.len());
        let mut acc = t.leaf(0).unwrap();
        let mut acc_value = values[0];
        for i in 1..values.len() {
            let leaf = t.leaf(i).unwrap();
            let (larger, smaller, value) = if values[i] >= acc_value {
                (leaf, acc, values[i] - acc_value)
            } else {
                (acc, leaf, acc_value - values[i])
            };
            acc = t.merge(larger, smaller).unwrap();
            acc_value = value;
            assert_eq!(signed(&t, acc, &values), acc_value);
        }
        let split = t.split(Some(acc)).unwrap();
        assert_eq!(split.side_a.len() + split.side_b.len(), 16);
    }

    #[test]
    fn test_settled_values_join_split() {
        let mut t = GroupTracker::new(4);
        let a = t.merge(t.leaf(0).unwrap(), t.leaf(1).unwrap()).unwrap();
        t.settle(a).unwrap();
        let b = t.merge(t.leaf(2).unwrap(), t.leaf(3).unwrap()).unwrap();
        t.settle(b).unwrap();

        let split = t.split(None).unwrap();
        assert_eq!(split.side_a, vec![0, 2]);
        assert_eq!(split.side_b, vec![1, 3]);
    }

    #[test]
    fn test_single_item_split() {
        let t = GroupTracker::new(1);
        let split = t.split(Some(t.leaf(0).unwrap())).unwrap();
        assert_eq!(split.side_a, vec![0]);
        assert!(split.side_b.is_empty());
    }

    #[test]
    fn test_merge_with_itself() {
        let mut t = GroupTracker::new(2);
        let leaf = t.leaf(0).unwrap();
        assert!(matches!(
            t.merge(leaf, leaf),
            Err(SolverError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_merge_retired_value() {
        let mut t = GroupTracker::new(3);
        let a = t.leaf(0).unwrap();
        let b = t.leaf(1).unwrap();
        t.merge(a, b).unwrap();
        let err = t.merge(a, t.leaf(2).unwrap()).unwrap_err();
        assert!(err.to_string().contains("already merged"));
        // The failed merge must not disturb the remaining leaf.
        assert!(t.is_live(t.leaf(2).unwrap()));
    }

    #[test]
    fn test_unknown_value() {
        let mut t = GroupTracker::new(2);
        let err = t.settle(ValueId(99)).unwrap_err();
        assert!(err.to_string().contains("never issued"));
        assert!(t.leaf(2).is_err());
    }

    #[test]
    fn test_split_with_unresolved_values() {
        let mut t = GroupTracker::new(3);
        let v = t.merge(t.leaf(0).unwrap(), t.leaf(1).unwrap()).unwrap();
        assert!(matches!(
            t.split(Some(v)),
            Err(SolverError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
    }
}
