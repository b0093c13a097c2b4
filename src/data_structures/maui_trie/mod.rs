// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Maui Trie Implementation
//!
//! A concurrent prefix tree over byte strings. Keys are split into single
//! bytes, shared prefixes share a path, and deleting a key prunes every node
//! on its path that no longer leads to a present key.
//!
//! # Concurrency
//!
//! The whole tree sits behind one reader/writer lock. [`MauiTrie::search`]
//! takes a shared guard so any number of lookups run together, while
//! [`MauiTrie::insert`], [`MauiTrie::delete`] and [`MauiTrie::clear`] take
//! the exclusive guard for their full duration. No caller ever observes a
//! half-applied mutation. The lock never poisons, so every operation is total.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::maui_trie::MauiTrie;
//!
//! let trie = MauiTrie::new();
//! trie.insert("hello");
//! trie.insert("hi");
//!
//! assert!(trie.search("hello"));
//! assert!(!trie.search("h"));
//!
//! trie.delete("hello");
//! assert!(!trie.search("hello"));
//! assert!(trie.search("hi"));
//! ```

mod node;

use parking_lot::RwLock;
use tracing::{debug, trace};

use node::TrieNode;

/// Maui Trie is a thread-safe set of byte strings with prefix-shared storage.
///
/// Key features:
/// * Any byte sequence is a valid key, including the empty one
/// * Lazy node creation on insert, eager pruning on delete
/// * Coarse reader/writer locking: parallel reads, serialized writes
///
/// Share it between threads with an `Arc`.
#[derive(Debug, Default)]
pub struct MauiTrie {
    /// The root node; never replaced, only mutated in place
    root: RwLock<TrieNode>,
}

impl MauiTrie {
    /// Creates a new empty `MauiTrie`.
    ///
    /// The root starts non-terminal with no children, so even the empty key
    /// is absent.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(TrieNode::new()),
        }
    }

    /// Inserts a key into the trie.
    ///
    /// Missing edges along the key's path are created one node per byte and
    /// the final node is marked terminal. Inserting the empty key marks the
    /// root. Keys inserted earlier, the empty key included, are left alone.
    ///
    /// # Arguments
    ///
    /// * `key` - The byte sequence to insert.
    pub fn insert<K>(&self, key: K)
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        let mut root = self.root.write();

        let node = key
            .iter()
            .fold(&mut *root, |node, &byte| node.child_or_insert(byte));
        node.set_terminal(true);

        trace!(key_len = key.len(), "Inserted key");
    }

    /// Checks whether a key is present in the trie.
    ///
    /// A path that exists only as the prefix of longer keys is not a match.
    ///
    /// # Arguments
    ///
    /// * `key` - The byte sequence to look up.
    ///
    /// # Returns
    ///
    /// `true` if `key` was inserted and has not been deleted since.
    pub fn search<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        let root = self.root.read();

        key.as_ref()
            .iter()
            .try_fold(&*root, |node, &byte| node.child(byte))
            .is_some_and(TrieNode::is_terminal)
    }

    /// Removes a key from the trie, pruning nodes that became dead.
    ///
    /// Deleting an absent key is a no-op. The root is never removed;
    /// deleting the empty key only clears its terminal flag.
    ///
    /// # Arguments
    ///
    /// * `key` - The byte sequence to remove.
    pub fn delete<K>(&self, key: K)
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        let mut root = self.root.write();

        Self::delete_from(&mut root, key);

        trace!(key_len = key.len(), "Deleted key");
    }

    /// Removal helper.
    ///
    /// A first walk finds the deepest node on the key's path that outlives
    /// the delete: the root, a terminal node, or a node with other children.
    /// Every node below it exists only for this key, so once the key's flag
    /// is gone the whole tail is dead and a single unlink at that edge prunes
    /// it. A target that still has children only loses its flag.
    fn delete_from(root: &mut TrieNode, key: &[u8]) {
        let Some(&first) = key.first() else {
            root.set_terminal(false);
            return;
        };

        // (depth of the surviving node, edge byte below it)
        let mut cut = (0, first);
        let mut node: &TrieNode = root;
        for (depth, &byte) in key.iter().enumerate() {
            if node.is_terminal() || node.child_count() > 1 {
                cut = (depth, byte);
            }
            node = match node.child(byte) {
                Some(child) => child,
                None => return,
            };
        }

        if !node.is_terminal() {
            return;
        }
        let keep_target = node.child_count() > 0;

        if keep_target {
            if let Some(target) = key.iter().try_fold(root, |node, &byte| node.child_mut(byte)) {
                target.set_terminal(false);
            }
            return;
        }

        let (depth, byte) = cut;
        if let Some(survivor) = key[..depth]
            .iter()
            .try_fold(root, |node, &byte| node.child_mut(byte))
        {
            survivor.remove_child(byte);
            debug!(depth, pruned = key.len() - depth, "Pruned dead trie branch");
        }
    }

    /// Returns the number of keys in the trie.
    ///
    /// This walks the entire tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.read().key_count()
    }

    /// Checks if the trie holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.read().is_empty()
    }

    /// Returns the number of nodes in the tree, the root included.
    ///
    /// Because deletes prune eagerly, a trie whose keys have all been
    /// deleted reports exactly 1.
    pub fn node_count(&self) -> usize {
        self.root.read().node_count()
    }

    /// Removes every key, resetting the root in place.
    pub fn clear(&self) {
        let mut root = self.root.write();
        *root = TrieNode::new();
    }
}
