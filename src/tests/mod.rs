//! Test modules for Lanai.
//!
//! This module contains crate-level testing infrastructure:
//! - Model-based property tests for the trie and the heap
//! - Configuration and error handling tests
//! - Shared fixtures and proptest strategies

pub mod error_tests;
pub mod oahu_heap_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_batch_strategy, key_strategy, word_strategy, TestFixture};
