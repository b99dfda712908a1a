//! Sorted frontier of pending nodes.
//!
//! Entries are kept in a `BTreeMap` keyed by `(key, tiebreak)`, so the
//! lowest key is always first. A new entry is placed before every existing
//! entry with an equal key; the most recent insertion wins ties. A per-node
//! slot table makes membership and removal by node O(log n) and keeps each
//! node in the frontier at most once.

use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Slot {
    key: i32,
    // Later insertions carry a higher sequence and sort first among equals.
    tiebreak: Reverse<u64>,
}

/// An ordered set of `(node, key)` entries, ascending by key.
///
/// Nodes are identified by flat grid index.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    entries: BTreeMap<Slot, usize>,
    slots: Vec<Option<Slot>>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier able to hold node indices below `capacity`
    /// without growing its slot table.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            slots: vec![None; capacity],
            seq: 0,
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.iter_mut().for_each(|s| *s = None);
        self.seq = 0;
    }

    /// Remove every entry and resize the slot table to `capacity`.
    pub fn reset(&mut self, capacity: usize) {
        self.clear();
        self.slots.resize(capacity, None);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `node` currently has an entry.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.key_of(node).is_some()
    }

    /// The key `node` is queued under, if any.
    #[inline]
    pub fn key_of(&self, node: usize) -> Option<i32> {
        self.slots.get(node).copied().flatten().map(|s| s.key)
    }

    /// Key of the head entry.
    pub fn peek_key(&self) -> Option<i32> {
        self.entries.first_key_value().map(|(s, _)| s.key)
    }

    /// Insert `node` at the head of the frontier.
    ///
    /// Only valid when `key` does not exceed the current head's key, which
    /// always holds for the first node of a search.
    pub fn push_front(&mut self, node: usize, key: i32) {
        debug_assert!(self.peek_key().is_none_or(|head| key <= head));
        self.insert_sorted(node, key);
    }

    /// Remove and return the head entry as `(node, key)`.
    ///
    /// Returns `None` if the frontier is empty.
    pub fn pop_front(&mut self) -> Option<(usize, i32)> {
        let (slot, node) = self.entries.pop_first()?;
        self.slots[node] = None;
        Some((node, slot.key))
    }

    /// Remove the entry for `node`, returning its key.
    pub fn remove(&mut self, node: usize) -> Option<i32> {
        let slot = self.slots.get_mut(node)?.take()?;
        self.entries.remove(&slot);
        Some(slot.key)
    }

    /// Scan in order and remove the first entry matching `pred`.
    pub fn remove_if(&mut self, mut pred: impl FnMut(usize, i32) -> bool) -> Option<(usize, i32)> {
        let (slot, node) = self
            .entries
            .iter()
            .find(|&(s, &n)| pred(n, s.key))
            .map(|(s, &n)| (*s, n))?;
        self.entries.remove(&slot);
        self.slots[node] = None;
        Some((node, slot.key))
    }

    /// Insert `node` before the first entry whose key is >= `key`.
    ///
    /// An existing entry for `node` is replaced.
    pub fn insert_sorted(&mut self, node: usize, key: i32) {
        self.remove(node);
        if node >= self.slots.len() {
            self.slots.resize(node + 1, None);
        }
        self.seq += 1;
        let slot = Slot {
            key,
            tiebreak: Reverse(self.seq),
        };
        self.entries.insert(slot, node);
        self.slots[node] = Some(slot);
    }

    /// Iterate over `(node, key)` entries from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.entries.iter().map(|(s, &n)| (n, s.key))
    }
}
