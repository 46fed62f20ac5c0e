//! Behavioural tests for IndexedHeap
//!
//! These tests drive the public API only and cover every operation,
//! including the empty and absent-key edge cases.

use rust_indexed_heap::{IndexedHeap, NaturalOrder};
use std::cmp::Ordering;

type StrHeap = IndexedHeap<&'static str, i32, NaturalOrder>;

/// Test that empty heap behaves correctly
#[test]
fn test_empty_heap() {
    let mut heap = StrHeap::new_natural();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.get("missing"), None);
    assert_eq!(heap.remove("missing"), None);
    assert!(!heap.contains_key("missing"));
    assert_eq!(heap.len(), 0);
    assert!(heap.check_invariants().is_ok());
}

#[test]
fn test_drain_example() {
    let mut heap = StrHeap::new_natural();
    heap.push("a", 5);
    heap.push("b", 1);
    heap.push("c", 3);

    assert_eq!(heap.pop(), Some(("b", 1)));
    assert_eq!(heap.pop(), Some(("c", 3)));
    assert_eq!(heap.pop(), Some(("a", 5)));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_len_counts_distinct_keys() {
    let mut heap = StrHeap::new_natural();
    heap.push("a", 1);
    heap.push("b", 2);
    heap.push("a", 1);
    heap.push("b", 7);
    heap.push("c", 0);

    assert_eq!(heap.len(), 3);
}

#[test]
fn test_repeated_push_leaves_heap_unchanged() {
    let mut heap = StrHeap::new_natural();
    heap.extend([("a", 4), ("b", 2), ("c", 9), ("d", 2)]);

    let before: Vec<_> = heap.iter().map(|(k, v)| (*k, *v)).collect();
    heap.push("c", 9);
    let after: Vec<_> = heap.iter().map(|(k, v)| (*k, *v)).collect();

    assert_eq!(before, after);
    assert_eq!(heap.get("c"), Some(&9));
}

#[test]
fn test_get_then_remove_returns_pushed_value() {
    let mut heap = StrHeap::new_natural();
    heap.push("x", 42);
    heap.push("y", 7);

    assert_eq!(heap.get("x"), Some(&42));
    assert_eq!(heap.remove("x"), Some(42));
    assert!(!heap.contains_key("x"));
    assert_eq!(heap.len(), 1);

    // Second remove is a miss and mutates nothing
    assert_eq!(heap.remove("x"), None);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), Some((&"y", &7)));
}

#[test]
fn test_remove_every_position() {
    for victim in 0..15 {
        let mut heap = IndexedHeap::new_natural();
        for i in 0..15 {
            // Interleave so the array is not simply sorted
            heap.push(i, (i * 7) % 15);
        }

        assert_eq!(heap.remove(&victim), Some((victim * 7) % 15));
        assert!(heap.check_invariants().is_ok());
        assert_eq!(heap.len(), 14);

        let mut expected: Vec<_> = (0..15)
            .filter(|&i| i != victim)
            .map(|i| (i * 7) % 15)
            .collect();
        expected.sort();
        let drained: Vec<_> = heap.into_sorted_vec().into_iter().map(|(_, v)| v).collect();
        assert_eq!(drained, expected);
    }
}

#[test]
fn test_reschedule_up_and_down() {
    let mut heap = IndexedHeap::new(|a: &u64, b: &u64| a.cmp(b));
    for id in 0..20u32 {
        heap.push(id, 100 + id as u64);
    }

    // Pull one forward, push one back
    heap.push(15, 1);
    heap.push(0, 1_000);
    assert!(heap.check_invariants().is_ok());

    assert_eq!(heap.pop(), Some((15, 1)));
    assert_eq!(heap.pop(), Some((1, 101)));

    let rest = heap.into_sorted_vec();
    assert_eq!(rest.last(), Some(&(0, 1_000)));
    assert_eq!(rest.len(), 18);
}

#[test]
fn test_custom_comparator_on_struct_values() {
    #[derive(Debug, Clone, PartialEq)]
    struct Deadline {
        at: f64,
        label: &'static str,
    }

    let mut heap = IndexedHeap::new(|a: &Deadline, b: &Deadline| a.at.total_cmp(&b.at));
    heap.push(1, Deadline { at: 2.5, label: "second" });
    heap.push(2, Deadline { at: -1.0, label: "first" });
    heap.push(3, Deadline { at: 9.0, label: "third" });

    let labels: Vec<_> = heap
        .into_sorted_vec()
        .into_iter()
        .map(|(_, d)| d.label)
        .collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

#[test]
fn test_max_heap_via_inverted_comparator() {
    let mut heap = IndexedHeap::new(|a: &i32, b: &i32| b.cmp(a));
    heap.extend([("a", 5), ("b", 1), ("c", 3)]);

    assert_eq!(heap.pop(), Some(("a", 5)));
    assert_eq!(heap.pop(), Some(("c", 3)));
    assert_eq!(heap.pop(), Some(("b", 1)));
}

#[test]
fn test_inconsistent_comparator_does_not_panic() {
    // Not a total preorder; order is unspecified but operations still work
    let mut heap = IndexedHeap::new(|_: &i32, _: &i32| Ordering::Less);
    for i in 0..50 {
        heap.push(i, i);
    }
    for i in (0..50).step_by(3) {
        assert_eq!(heap.remove(&i), Some(i));
    }

    let mut drained = 0;
    while heap.pop().is_some() {
        drained += 1;
    }
    assert_eq!(drained, 33);
}

#[test]
fn test_clear_then_reuse() {
    let mut heap = StrHeap::new_natural();
    heap.extend([("a", 1), ("b", 2)]);
    heap.clear();

    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert!(!heap.contains_key("a"));

    heap.push("a", 3);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop(), Some(("a", 3)));
}

#[test]
fn test_default_and_hasher_constructors() {
    let mut heap: StrHeap = IndexedHeap::default();
    heap.push("a", 1);
    assert_eq!(heap.peek(), Some((&"a", &1)));

    let mut heap = IndexedHeap::with_hasher(
        NaturalOrder,
        std::collections::hash_map::RandomState::new(),
    );
    heap.push("k", 2);
    heap.push("j", 1);
    assert_eq!(heap.pop(), Some(("j", 1)));
    assert_eq!(heap.get("k"), Some(&2));
}

#[test]
fn test_clone_is_independent() {
    let mut heap = StrHeap::new_natural();
    heap.extend([("a", 1), ("b", 2)]);

    let mut copy = heap.clone();
    copy.remove("a");

    assert_eq!(heap.len(), 2);
    assert_eq!(copy.len(), 1);
    assert_eq!(heap.peek(), Some((&"a", &1)));
    assert_eq!(copy.peek(), Some((&"b", &2)));
}
