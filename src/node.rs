// src/node.rs

use std::fmt;

use crate::internal_node::InternalNode;
use crate::leaf_node::LeafNode;

pub type Key = i64;
pub type RecordPointer = i64;

/// Store-assigned node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn as_index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tree node as held by the node store.
///
/// `id` is `None` until the node is first saved; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Internal(InternalNode),
}

impl Node {
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Node::Leaf(leaf) => leaf.id(),
            Node::Internal(internal) => internal.id(),
        }
    }

    pub(crate) fn set_id(&mut self, id: NodeId) {
        match self {
            Node::Leaf(leaf) => leaf.id = Some(id),
            Node::Internal(internal) => internal.id = Some(id),
        }
    }

    pub fn keys(&self) -> &[Key] {
        match self {
            Node::Leaf(leaf) => &leaf.keys,
            Node::Internal(internal) => &internal.keys,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<InternalNode> for Node {
    fn from(internal: InternalNode) -> Self {
        Node::Internal(internal)
    }
}
