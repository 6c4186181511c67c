// src/node_store.rs

use log::trace;

use crate::error::{IndexError, Result};
use crate::node::{Node, NodeId};
use crate::node_id_allocator::NodeIdAllocator;

/// Owns node contents and hands out their ids.
///
/// The tree never keeps nodes between calls: every change goes through
/// `save`, every read through `load`.
pub trait NodeStore {
    /// Stores `node` under its id, allocating one first if the node has
    /// never been saved. Overwrites whatever was stored under that id.
    fn save(&mut self, node: &mut Node) -> NodeId;

    /// Returns a copy of the node stored under `id`.
    fn load(&self, id: NodeId) -> Result<Node>;

    /// Number of distinct nodes ever saved.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: NodeId) -> bool;
}

/// Fully resident node store. Ids index straight into the table.
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    table: Vec<Option<Node>>, // Vec acts as indirection array
    allocator: NodeIdAllocator,
    len: usize,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeStore for MemoryNodeStore {
    fn save(&mut self, node: &mut Node) -> NodeId {
        let id = match node.id() {
            Some(id) => id,
            None => {
                let id = self.allocator.allocate();
                node.set_id(id);
                id
            }
        };

        let index = id.as_index();
        if index >= self.table.len() {
            self.table.resize(index + 1, None);
        }
        if self.table[index].is_none() {
            self.len += 1;
        }
        trace!("save node {} (leaf={}, keys={:?})", id, node.is_leaf(), node.keys());
        self.table[index] = Some(node.clone());
        id
    }

    fn load(&self, id: NodeId) -> Result<Node> {
        self.table
            .get(id.as_index())
            .and_then(|entry| entry.clone())
            .ok_or(IndexError::NodeNotFound { id })
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, id: NodeId) -> bool {
        matches!(self.table.get(id.as_index()), Some(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf_node::LeafNode;

    #[test]
    fn test_save_assigns_ids_in_order() {
        let mut store = MemoryNodeStore::new();

        let mut first = Node::from(LeafNode::with_entry(1, 10));
        let mut second = Node::from(LeafNode::with_entry(2, 20));

        assert_eq!(store.save(&mut first), NodeId(0));
        assert_eq!(store.save(&mut second), NodeId(1));
        assert_eq!(first.id(), Some(NodeId(0)));
        assert_eq!(second.id(), Some(NodeId(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_overwrites_existing_id() {
        let mut store = MemoryNodeStore::new();
        let mut node = Node::from(LeafNode::with_entry(1, 10));
        let id = store.save(&mut node);

        if let Node::Leaf(leaf) = &mut node {
            leaf.insert(2, 20);
        }
        assert_eq!(store.save(&mut node), id);
        assert_eq!(store.len(), 1);

        let loaded = store.load(id).expect("node was saved");
        assert_eq!(loaded.keys(), &[1, 2]);
    }

    #[test]
    fn test_load_returns_independent_copy() {
        let mut store = MemoryNodeStore::new();
        let mut node = Node::from(LeafNode::with_entry(1, 10));
        let id = store.save(&mut node);

        let mut copy = store.load(id).expect("node was saved");
        if let Node::Leaf(leaf) = &mut copy {
            leaf.insert(5, 50);
        }
        assert_eq!(store.load(id).expect("node was saved").keys(), &[1]);
    }

    #[test]
    fn test_load_unknown_id_fails() {
        let mut store = MemoryNodeStore::new();
        assert_eq!(
            store.load(NodeId(0)),
            Err(IndexError::NodeNotFound { id: NodeId(0) })
        );

        let mut node = Node::from(LeafNode::with_entry(1, 10));
        store.save(&mut node);
        assert!(store.contains(NodeId(0)));
        assert!(!store.contains(NodeId(1)));
        assert_eq!(
            store.load(NodeId(42)),
            Err(IndexError::NodeNotFound { id: NodeId(42) })
        );
    }
}
