//! Key-addressable binary min-heap
//!
//! [`IndexedHeap`] is an array-backed binary heap of `(key, value)` entries,
//! paired with a map from each key to its current position in the array.
//! The map lets any key be read, replaced, or removed directly, not only the
//! minimum, which is what timer wheels and schedulers need to cancel or
//! reschedule a pending item.
//!
//! Values are ordered by a comparator supplied at construction (see
//! [`Compare`]). The heap is always a min-heap under that comparator; pass an
//! inverted comparator for max-heap behaviour.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `push`         | O(log n) amortized |
//! | `pop`          | O(log n)           |
//! | `remove`       | O(log n)           |
//! | `peek`         | O(1)               |
//! | `get`          | O(1)               |
//! | `contains_key` | O(1)               |
//! | `clear`        | O(n) drop, O(1) if empty |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::IndexedHeap;
//!
//! let mut timers = IndexedHeap::new(|a: &u64, b: &u64| a.cmp(b));
//! timers.push("flush", 30);
//! timers.push("heartbeat", 10);
//! timers.push("retry", 20);
//!
//! // Reschedule and cancel by key
//! timers.push("flush", 5);
//! assert_eq!(timers.remove("retry"), Some(20));
//!
//! assert_eq!(timers.pop(), Some(("flush", 5)));
//! assert_eq!(timers.pop(), Some(("heartbeat", 10)));
//! assert_eq!(timers.pop(), None);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use log::trace;

use crate::traits::{Compare, InvariantViolation, NaturalOrder};

/// Hasher used for the key index unless one is supplied
#[cfg(not(feature = "std-hash"))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher used for the key index unless one is supplied
#[cfg(feature = "std-hash")]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[inline]
fn parent(position: usize) -> usize {
    (position - 1) / 2
}

/// A binary min-heap whose entries can be addressed by key
///
/// Keys are unique: pushing a key that is already present replaces its
/// value (or does nothing if the values compare equal). Keys are stored
/// both in the heap array and in the index, hence the `Clone` bound; cheap
/// keys such as integers, ids, or `Rc<str>` work best.
///
/// A key's hash and equality must not change while it is in the heap.
#[derive(Clone)]
pub struct IndexedHeap<K, V, C, S = DefaultHashBuilder> {
    /// Complete binary tree of entries; children of `i` are `2i + 1` and `2i + 2`
    items: Vec<(K, V)>,
    /// Current array position of every key in `items`
    index: HashMap<K, usize, S>,
    cmp: C,
}

impl<K, V, C> IndexedHeap<K, V, C, DefaultHashBuilder> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self::with_hasher(cmp, DefaultHashBuilder::default())
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(cmp, capacity, DefaultHashBuilder::default())
    }
}

impl<K, V: Ord> IndexedHeap<K, V, NaturalOrder, DefaultHashBuilder> {
    /// Creates an empty heap ordered by the values' `Ord` implementation
    pub fn new_natural() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<K, V, C, S> IndexedHeap<K, V, C, S> {
    /// Creates an empty heap whose key index uses `hasher`
    pub fn with_hasher(cmp: C, hasher: S) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::with_hasher(hasher),
            cmp,
        }
    }

    /// Creates an empty heap with room for `capacity` entries, using `hasher`
    pub fn with_capacity_and_hasher(cmp: C, capacity: usize, hasher: S) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            cmp,
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of entries the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the comparator the heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.items.first().map(|(k, v)| (k, v))
    }

    /// Iterates over all entries in heap-array order, which is not sorted
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.items.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over all keys in heap-array order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items.iter().map(|(k, _)| k)
    }

    /// Removes every entry, keeping the allocated capacity
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            trace!("clearing indexed heap of {} entries", self.items.len());
            self.items.clear();
            self.index.clear();
        }
    }
}

impl<K, V, C, S> IndexedHeap<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: Compare<V>,
    S: BuildHasher,
{
    /// Inserts `value` under `key`
    ///
    /// If `key` is already present with a value comparing equal to `value`,
    /// the heap is left untouched. With any other value the old entry is
    /// removed and the new one inserted.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&position) = self.index.get(&key) {
            if self.cmp.compare(&self.items[position].1, &value) == Ordering::Equal {
                return;
            }
            trace!("replacing value of existing key at position {}", position);
            self.remove_at(position);
        }

        let position = self.items.len();
        self.index.insert(key.clone(), position);
        self.items.push((key, value));
        self.sift_up(position);
    }

    /// Removes and returns the minimum entry
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Returns true if `key` is in the heap
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&position| &self.items[position].1)
    }

    /// Removes `key` from the heap, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        Some(self.remove_at(position).1)
    }

    /// Consumes the heap, returning its entries in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Verifies heap order and index consistency
    ///
    /// Returns the first violation found. A heap only ever fails this check
    /// if its comparator is not a consistent total preorder, or if a key's
    /// hash changed while it was stored.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.items.len() != self.index.len() {
            return Err(InvariantViolation::SizeMismatch {
                items: self.items.len(),
                index: self.index.len(),
            });
        }

        for (position, (key, value)) in self.items.iter().enumerate() {
            if self.index.get(key) != Some(&position) {
                return Err(InvariantViolation::IndexMismatch { position });
            }
            if position > 0 {
                let parent = parent(position);
                if self.cmp.compare(&self.items[parent].1, value) == Ordering::Greater {
                    return Err(InvariantViolation::HeapOrder {
                        parent,
                        child: position,
                    });
                }
            }
        }
        Ok(())
    }

    /// Removes the entry at `position`, filling the hole with the last entry
    fn remove_at(&mut self, position: usize) -> (K, V) {
        let (key, value) = self.items.swap_remove(position);
        self.index.remove(&key);

        // Nothing moved if the removed entry was the last one
        if position < self.items.len() {
            self.reindex(position);
            // The moved entry only conflicts with its new parent or its new children
            if position > 0
                && self
                    .cmp
                    .compare(&self.items[parent(position)].1, &self.items[position].1)
                    == Ordering::Greater
            {
                self.sift_up(position);
            } else {
                self.sift_down(position);
            }
        }

        (key, value)
    }

    /// Move entry at position up to maintain heap property
    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = parent(position);
            if self.cmp.compare(&self.items[parent].1, &self.items[position].1)
                != Ordering::Greater
            {
                break;
            }
            self.swap(parent, position);
            position = parent;
        }
    }

    /// Move entry at position down to maintain heap property
    ///
    /// Ties between the two children go to the left one.
    fn sift_down(&mut self, mut position: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == position {
                break;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.items[a].1, &self.items[b].1) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    /// Points the index entry of the key at `position` back to `position`
    fn reindex(&mut self, position: usize) {
        let key = &self.items[position].0;
        if let Some(slot) = self.index.get_mut(key) {
            *slot = position;
        }
    }
}

impl<K, V, C, S> Default for IndexedHeap<K, V, C, S>
where
    C: Default,
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(C::default(), S::default())
    }
}

impl<K, V, C, S> Extend<(K, V)> for IndexedHeap<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: Compare<V>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, S> fmt::Debug for IndexedHeap<K, V, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("len", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}
