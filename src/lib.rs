//! Indexed Heap for Rust
//!
//! This crate provides [`IndexedHeap`], a binary min-heap over key/value pairs
//! that also keeps a key → position index, so any pending entry can be found,
//! read, replaced, or removed by key in O(log n), not only the minimum.
//!
//! Typical users are timer wheels, event schedulers, and work queues that
//! need "the next item due" together with "cancel or reschedule this item".
//!
//! # Features
//!
//! - **Injected ordering**: values are compared by a [`Compare`] implementation
//!   given at construction, usually a closure. Invert it for a max-heap.
//! - **Keyed access**: `contains_key`, `get`, and `remove` by key, with `Borrow`
//!   lookups like `HashMap`.
//! - **Idempotent push**: pushing an existing key with an equal value is a no-op;
//!   an unequal value replaces the old entry.
//! - **Pluggable hasher**: the key index uses FxHash by default; enable the
//!   `std-hash` feature or call [`IndexedHeap::with_hasher`] to change it.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new(|a: &i32, b: &i32| a.cmp(b));
//! heap.push("a", 5);
//! heap.push("b", 1);
//! heap.push("c", 3);
//!
//! assert_eq!(heap.get("a"), Some(&5));
//! assert_eq!(heap.pop(), Some(("b", 1)));
//! assert_eq!(heap.pop(), Some(("c", 3)));
//! assert_eq!(heap.pop(), Some(("a", 5)));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod indexed;
pub mod traits;

pub use indexed::{DefaultHashBuilder, IndexedHeap};
pub use traits::{Compare, InvariantViolation, NaturalOrder};
