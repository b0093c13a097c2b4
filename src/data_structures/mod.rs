//! Data structures for Lanai.
//!
//! - [`maui_trie`]: concurrent byte-keyed prefix tree with eager pruning
//! - [`oahu_heap`]: array-backed binary heap driven by a comparison predicate
//!
//! No unsafe code lives here.

pub mod maui_trie;
pub mod oahu_heap;

// Re-export common data structures
pub use maui_trie::MauiTrie;
pub use oahu_heap::OahuHeap;
