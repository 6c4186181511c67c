// src/leaf_node.rs

use crate::node::{Key, NodeId, RecordPointer};

/// Leaf level entries plus the link to the next leaf to the right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub(crate) id: Option<NodeId>,           // Assigned by the node store
    pub keys: Vec<Key>,                      // Sorted, duplicates allowed
    pub record_pointers: Vec<RecordPointer>, // record_pointers[i] belongs to keys[i]
    pub next_leaf: Option<NodeId>,           // None for the rightmost leaf
}

impl LeafNode {
    /// Creates a new empty, unsaved leaf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unsaved leaf holding a single entry.
    pub fn with_entry(key: Key, pointer: RecordPointer) -> Self {
        Self {
            id: None,
            keys: vec![key],
            record_pointers: vec![pointer],
            next_leaf: None,
        }
    }

    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    pub fn is_full(&self, max_keys: usize) -> bool {
        self.keys.len() >= max_keys
    }

    /// First index whose key is greater than `key`, so equal keys keep
    /// their insertion order.
    pub fn insert_position(&self, key: Key) -> usize {
        self.keys.partition_point(|k| *k <= key)
    }

    pub fn insert(&mut self, key: Key, pointer: RecordPointer) {
        let pos = self.insert_position(key);
        self.keys.insert(pos, key);
        self.record_pointers.insert(pos, pointer);
    }

    /// Inserts the entry and moves the upper half into a new, unsaved leaf.
    ///
    /// `self` keeps `[0, mid)` of the merged entries, the returned leaf gets
    /// `[mid, len)` and inherits `self.next_leaf`. Relinking `self` to the
    /// new leaf is left to the caller, which knows the freshly allocated id.
    pub fn split_off(&mut self, key: Key, pointer: RecordPointer) -> LeafNode {
        self.insert(key, pointer);

        let mid = self.keys.len() / 2;
        LeafNode {
            id: None,
            keys: self.keys.split_off(mid),
            record_pointers: self.record_pointers.split_off(mid),
            next_leaf: self.next_leaf,
        }
    }

    /// All pointers stored under `key`, left to right.
    pub fn pointers_for(&self, key: Key) -> Vec<RecordPointer> {
        self.keys
            .iter()
            .zip(&self.record_pointers)
            .filter(|(k, _)| **k == key)
            .map(|(_, p)| *p)
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Key, RecordPointer)> + '_ {
        self.keys.iter().copied().zip(self.record_pointers.iter().copied())
    }
}
