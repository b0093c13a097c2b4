// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Oahu Heap Implementation
//!
//! An array-backed binary heap whose order is decided by a caller-supplied
//! predicate. `compare(x, y)` returning `true` means `x` belongs above `y`,
//! so `|x, y| x > y` builds a max-heap and `|x, y| x < y` a min-heap.
//!
//! The node at index `i` has its parent at `(i - 1) / 2` and its children at
//! `2i + 1` and `2i + 2`. Insert and delete are O(log n).
//!
//! The heap is a plain single-owner value; wrap it in a lock to share it.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::oahu_heap::OahuHeap;
//!
//! let mut heap = OahuHeap::max_heap();
//! for value in [7, 8, 1, 2, 3] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.as_slice(), &[8, 7, 1, 2, 3]);
//! assert_eq!(heap.delete(), Some(8));
//! assert_eq!(heap.delete(), Some(7));
//! ```

use std::fmt;

/// Comparator type used by the `Ord`-based constructors.
pub type OrdComparator<T> = fn(&T, &T) -> bool;

/// Binary heap ordered by a strict comparison predicate.
///
/// # Type Parameters
///
/// * `T` - Type of the stored elements.
/// * `F` - Predicate returning `true` when its first argument must sit above
///   its second.
pub struct OahuHeap<T, F = OrdComparator<T>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Elements in heap order
    elements: Vec<T>,

    /// Strict ordering predicate
    compare: F,
}

impl<T: Ord> OahuHeap<T> {
    /// Creates an empty heap that yields the largest element first.
    pub fn max_heap() -> Self {
        Self::with_comparator(|x: &T, y: &T| x > y)
    }

    /// Creates an empty heap that yields the smallest element first.
    pub fn min_heap() -> Self {
        Self::with_comparator(|x: &T, y: &T| x < y)
    }
}

impl<T, F> OahuHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `compare`.
    ///
    /// # Arguments
    ///
    /// * `compare` - Returns `true` when the first argument belongs above the second.
    pub fn with_comparator(compare: F) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, compare: F) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Adds a value, restoring heap order by sifting it up.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the top element.
    ///
    /// # Returns
    ///
    /// `None` if the heap is empty.
    pub fn delete(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        // The last element takes the root slot, then sinks.
        let top = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Checks if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in their array (heap) order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !(self.compare)(&self.elements[index], &self.elements[parent]) {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Left wins ties unless right strictly beats it.
            let candidate = if right < len
                && !(self.compare)(&self.elements[left], &self.elements[right])
            {
                right
            } else {
                left
            };

            if !(self.compare)(&self.elements[candidate], &self.elements[index]) {
                break;
            }
            self.elements.swap(candidate, index);
            index = candidate;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for OahuHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OahuHeap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_heap_layout() {
        let mut heap = OahuHeap::max_heap();
        let expected: [&[i32]; 5] = [&[7], &[8, 7], &[8, 7, 1], &[8, 7, 1, 2], &[8, 7, 1, 2, 3]];

        for (value, layout) in [7, 8, 1, 2, 3].into_iter().zip(expected) {
            heap.insert(value);
            assert_eq!(heap.as_slice(), layout);
        }

        assert_eq!(heap.delete(), Some(8));
        assert_eq!(heap.as_slice(), &[7, 3, 1, 2]);
        assert_eq!(heap.delete(), Some(7));
        assert_eq!(heap.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: OahuHeap<u32> = OahuHeap::min_heap();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.delete(), None);

        heap.insert(4);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.delete(), Some(4));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_custom_comparator() {
        // Shortest string first.
        let mut heap = OahuHeap::with_comparator(|a: &String, b: &String| a.len() < b.len());
        for word in ["fjdsngfjasd", "hi", "hello", "h"] {
            heap.insert(word.to_string());
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.delete()).collect();
        assert_eq!(order, vec!["h", "hi", "hello", "fjdsngfjasd"]);
    }

    #[test]
    fn test_debug_output() {
        let mut heap = OahuHeap::max_heap();
        heap.insert(1);
        heap.insert(2);
        let rendered = format!("{heap:?}");
        assert!(rendered.contains("[2, 1]"));
    }
}
