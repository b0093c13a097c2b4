// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the Oahu Heap.

use proptest::prelude::*;
use test_case::test_case;

use crate::data_structures::OahuHeap;

fn drain<T, F: Fn(&T, &T) -> bool>(heap: &mut OahuHeap<T, F>) -> Vec<T> {
    std::iter::from_fn(|| heap.delete()).collect()
}

/// Checks the parent/child relation for every index of the backing array.
fn holds_heap_order<T, F: Fn(&T, &T) -> bool>(items: &[T], compare: F) -> bool {
    (1..items.len()).all(|i| !compare(&items[i], &items[(i - 1) / 2]))
}

#[test_case(OahuHeap::max_heap(), vec![8, 7, 3, 2, 1] ; "max heap")]
#[test_case(OahuHeap::min_heap(), vec![1, 2, 3, 7, 8] ; "min heap")]
fn test_pop_order(mut heap: OahuHeap<i32>, expected: Vec<i32>) {
    for value in [7, 8, 1, 2, 3] {
        heap.insert(value);
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), expected.first());
    assert_eq!(drain(&mut heap), expected);
    assert!(heap.is_empty());
}

#[test]
fn test_duplicates_and_interleaving() {
    let mut heap = OahuHeap::min_heap();
    heap.insert(5);
    heap.insert(5);
    heap.insert(1);
    assert_eq!(heap.delete(), Some(1));

    heap.insert(0);
    heap.insert(5);
    assert_eq!(drain(&mut heap), vec![0, 5, 5, 5]);
}

#[test]
fn test_with_capacity() {
    let mut heap = OahuHeap::with_capacity_and_comparator(16, |a: &u8, b: &u8| a > b);
    for value in [3, 9, 4] {
        heap.insert(value);
    }
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.as_slice(), &[9, 3, 4]);
}

proptest! {
    /// Draining a max-heap yields the inputs in descending order.
    #[test]
    fn proptest_max_heap_drains_sorted(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut heap = OahuHeap::max_heap();
        for value in &values {
            heap.insert(*value);
            prop_assert!(holds_heap_order(heap.as_slice(), |a: &i64, b: &i64| a > b));
        }

        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drain(&mut heap), expected);
    }

    /// Heap order is restored after every delete.
    #[test]
    fn proptest_min_heap_order_after_delete(values in prop::collection::vec(any::<u16>(), 1..100)) {
        let mut heap = OahuHeap::min_heap();
        for value in &values {
            heap.insert(*value);
        }

        let mut previous = None;
        while let Some(top) = heap.delete() {
            prop_assert!(holds_heap_order(heap.as_slice(), |a: &u16, b: &u16| a < b));
            if let Some(previous) = previous {
                prop_assert!(previous <= top);
            }
            previous = Some(top);
        }
    }
}
