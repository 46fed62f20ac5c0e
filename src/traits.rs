//! Comparator seam and error type for [`IndexedHeap`](crate::IndexedHeap)
//!
//! The heap never uses `Ord` on its values directly. Ordering is supplied
//! once at construction through the [`Compare`] trait, which is implemented
//! for every `Fn(&V, &V) -> Ordering`, so a closure is usually all you need:
//!
//! ```rust
//! use rust_indexed_heap::IndexedHeap;
//!
//! // Max-heap by inverting the comparator
//! let mut heap = IndexedHeap::new(|a: &i32, b: &i32| b.cmp(a));
//! heap.push("low", 1);
//! heap.push("high", 9);
//! assert_eq!(heap.peek(), Some((&"high", &9)));
//! ```
//!
//! The comparator must be a consistent total preorder. One that is not
//! leaves the heap order unspecified, but never causes a panic.

use std::cmp::Ordering;
use std::fmt;

/// A total preorder over values of type `V`
pub trait Compare<V: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &V, b: &V) -> Ordering;
}

impl<V: ?Sized, F> Compare<V> for F
where
    F: Fn(&V, &V) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their `Ord` implementation
///
/// This is the comparator used by [`IndexedHeap::new_natural`](crate::IndexedHeap::new_natural)
/// and by `IndexedHeap::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<V: Ord + ?Sized> Compare<V> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// A broken structural invariant, reported by
/// [`IndexedHeap::check_invariants`](crate::IndexedHeap::check_invariants)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The value at `parent` compares greater than the value at `child`
    HeapOrder { parent: usize, child: usize },
    /// The key stored at `position` is missing from the index or indexed elsewhere
    IndexMismatch { position: usize },
    /// The array and the index disagree on the number of entries
    SizeMismatch { items: usize, index: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder { parent, child } => {
                write!(f, "entry at {parent} is greater than its child at {child}")
            }
            InvariantViolation::IndexMismatch { position } => {
                write!(f, "index does not point back to the entry at {position}")
            }
            InvariantViolation::SizeMismatch { items, index } => {
                write!(f, "heap holds {items} entries but index holds {index} keys")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
