// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Maui Trie.
//!
//! Each node owns its children by value, so dropping a node releases its
//! whole subtree. There are no back-references.
//!
//! Paths can be as deep as the longest key, so nothing here recurses per
//! level: counting walks an explicit stack and teardown drains a work-list.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the Maui Trie.
///
/// The path of edge bytes from the root to a node spells a key prefix. A
/// terminal node marks that the prefix itself is a present key.
#[derive(Default)]
pub(crate) struct TrieNode {
    /// Map of edge bytes to owned child nodes
    children: FnvHashMap<u8, TrieNode>,

    /// Whether a present key ends exactly at this node
    is_terminal: bool,
}

impl TrieNode {
    /// Creates a new non-terminal node with no children.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children.get(&byte)
    }

    pub(crate) fn child_mut(&mut self, byte: u8) -> Option<&mut TrieNode> {
        self.children.get_mut(&byte)
    }

    /// Returns the child for `byte`, creating it first if the edge is missing.
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> &mut TrieNode {
        self.children.entry(byte).or_default()
    }

    /// Unlinks the child for `byte`, dropping its subtree.
    pub(crate) fn remove_child(&mut self, byte: u8) -> Option<TrieNode> {
        self.children.remove(&byte)
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.is_terminal = terminal;
    }

    /// A node is empty when it is neither terminal nor has any children.
    ///
    /// Empty non-root nodes must never stay reachable from their parent.
    pub(crate) fn is_empty(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Depth-first walk over this subtree, this node included.
    fn subtree(&self) -> impl Iterator<Item = &TrieNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }

    /// Number of terminal nodes in this subtree, this node included.
    pub(crate) fn key_count(&self) -> usize {
        self.subtree().filter(|node| node.is_terminal).count()
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn node_count(&self) -> usize {
        self.subtree().count()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants one level at a time so each node is dropped
        // with no children left.
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new();
        assert!(node.is_empty());
        assert!(!node.is_terminal());
        assert_eq!(node.node_count(), 1);
        assert_eq!(node.key_count(), 0);
    }

    #[test]
    fn test_child_lifecycle() {
        let mut node = TrieNode::new();
        node.child_or_insert(b'a').set_terminal(true);
        node.child_or_insert(b'a').child_or_insert(b'b');

        assert!(!node.is_empty());
        assert!(node.child(b'a').is_some_and(TrieNode::is_terminal));
        assert!(node.child(b'z').is_none());
        assert_eq!(node.node_count(), 3);
        assert_eq!(node.key_count(), 1);

        let removed = node.remove_child(b'a');
        assert!(removed.is_some());
        assert!(node.is_empty());
        assert!(node.remove_child(b'a').is_none());
    }

    #[test]
    fn test_deep_chain_counts_and_drops() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..100_000 {
            node = node.child_or_insert(b'x');
        }
        node.set_terminal(true);

        assert_eq!(root.node_count(), 100_001);
        assert_eq!(root.key_count(), 1);
        drop(root);
    }

    #[test]
    fn test_terminal_node_is_not_empty() {
        let mut node = TrieNode::new();
        node.set_terminal(true);
        assert!(!node.is_empty());
        node.set_terminal(false);
        assert!(node.is_empty());
    }
}
