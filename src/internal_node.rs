// src/internal_node.rs

use crate::node::{Key, NodeId};

/// Separator keys and the ids of the subtrees between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalNode {
    pub(crate) id: Option<NodeId>, // Assigned by the node store
    pub keys: Vec<Key>,             // Sorted separator keys
    pub children: Vec<NodeId>,      // Always keys.len() + 1 entries
}

impl InternalNode {
    /// Creates the unsaved node that sits above a split root.
    pub fn new_root(key: Key, left: NodeId, right: NodeId) -> Self {
        Self {
            id: None,
            keys: vec![key],
            children: vec![left, right],
        }
    }

    /// Index of the child whose subtree covers `key`.
    ///
    /// Picks the first separator strictly greater than `key`; a key equal
    /// to a separator belongs to the subtree on its right.
    pub fn child_index(&self, key: Key) -> usize {
        self.assert_shape();
        self.keys.partition_point(|k| *k <= key)
    }

    pub fn child_for(&self, key: Key) -> NodeId {
        self.children[self.child_index(key)]
    }

    /// Records a promotion from the child at `index`: the separator goes at
    /// `index` and the new sibling right after the child that split.
    pub fn insert_child(&mut self, index: usize, key: Key, child: NodeId) {
        self.keys.insert(index, key);
        self.children.insert(index + 1, child);
        self.assert_shape();
    }

    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    pub fn is_full(&self, max_keys: usize) -> bool {
        self.keys.len() >= max_keys
    }

    /// Splits around the middle key, which is returned for the parent and
    /// kept in neither half. `self` keeps keys `[0, mid)` and children
    /// `[0, mid]`; the returned unsaved node gets the rest.
    pub fn split(&mut self) -> (Key, InternalNode) {
        self.assert_shape();
        let mid = self.keys.len() / 2;

        let mut right_keys = self.keys.split_off(mid);
        let promoted = right_keys.remove(0);
        let right_children = self.children.split_off(mid + 1);

        let right = InternalNode {
            id: None,
            keys: right_keys,
            children: right_children,
        };
        self.assert_shape();
        right.assert_shape();
        (promoted, right)
    }

    fn assert_shape(&self) {
        debug_assert_eq!(
            self.children.len(),
            self.keys.len() + 1,
            "internal node {:?} has {} keys but {} children",
            self.id,
            self.keys.len(),
            self.children.len()
        );
    }
}
