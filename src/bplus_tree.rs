// src/bplus_tree.rs

use log::{debug, trace};

use crate::config::TreeConfig;
use crate::error::Result;
use crate::internal_node::InternalNode;
use crate::leaf_node::LeafNode;
use crate::node::{Key, Node, NodeId, RecordPointer};
use crate::node_store::{MemoryNodeStore, NodeStore};

/// Separator key and new right sibling handed to the parent after a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    pub key: Key,
    pub right: NodeId,
}

/// B+ tree index from integer keys to record pointers.
///
/// Nodes live in the store `S`; the tree itself only remembers the root id.
pub struct BPlusTree<S: NodeStore = MemoryNodeStore> {
    config: TreeConfig,
    store: S,
    root: Option<NodeId>,
    len: usize,
}

impl BPlusTree<MemoryNodeStore> {
    /// Creates an empty tree of the given order over a fresh in-memory store.
    pub fn with_order(order: usize) -> Result<Self> {
        Ok(Self::new(TreeConfig::new(order)?, MemoryNodeStore::new()))
    }
}

impl<S: NodeStore> BPlusTree<S> {
    pub fn new(config: TreeConfig, store: S) -> Self {
        Self {
            config,
            store,
            root: None,
            len: 0,
        }
    }

    pub fn order(&self) -> usize {
        self.config.order()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of entries inserted so far, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds an entry. Duplicate keys are kept as separate entries.
    ///
    /// Splits propagate upward through the return values of the recursive
    /// descent; a promotion that comes back from the root grows the tree by
    /// one level.
    pub fn insert(&mut self, key: Key, pointer: RecordPointer) -> Result<()> {
        let Some(root_id) = self.root else {
            let mut root = Node::from(LeafNode::with_entry(key, pointer));
            let root_id = self.store.save(&mut root);
            debug!("created root leaf {root_id}");
            self.root = Some(root_id);
            self.len = 1;
            return Ok(());
        };

        if let Some(promotion) = self.insert_into(root_id, key, pointer)? {
            let mut new_root =
                Node::from(InternalNode::new_root(promotion.key, root_id, promotion.right));
            let new_root_id = self.store.save(&mut new_root);
            debug!(
                "root split: new root {new_root_id} over [{root_id}, {}] with separator {}",
                promotion.right, promotion.key
            );
            self.root = Some(new_root_id);
        }

        self.len += 1;
        Ok(())
    }

    fn insert_into(
        &mut self,
        node_id: NodeId,
        key: Key,
        pointer: RecordPointer,
    ) -> Result<Option<Promotion>> {
        match self.store.load(node_id)? {
            Node::Leaf(leaf) => Ok(self.insert_into_leaf(leaf, key, pointer)),
            Node::Internal(internal) => self.insert_into_internal(internal, key, pointer),
        }
    }

    fn insert_into_leaf(
        &mut self,
        mut leaf: LeafNode,
        key: Key,
        pointer: RecordPointer,
    ) -> Option<Promotion> {
        if !leaf.is_full(self.config.max_keys()) {
            leaf.insert(key, pointer);
            self.store.save(&mut Node::from(leaf));
            return None;
        }

        let right = leaf.split_off(key, pointer);
        let promoted_key = right.keys[0];

        // The new leaf needs its id before the left one can link to it.
        let right_id = self.store.save(&mut Node::from(right));
        leaf.next_leaf = Some(right_id);
        let left_id = self.store.save(&mut Node::from(leaf));

        debug!("split leaf {left_id}: new leaf {right_id} starts at key {promoted_key}");
        Some(Promotion {
            key: promoted_key,
            right: right_id,
        })
    }

    fn insert_into_internal(
        &mut self,
        mut internal: InternalNode,
        key: Key,
        pointer: RecordPointer,
    ) -> Result<Option<Promotion>> {
        let index = internal.child_index(key);
        let child_id = internal.children[index];
        trace!("insert {key}: descend {:?} -> child {child_id}", internal.id);

        let Some(promotion) = self.insert_into(child_id, key, pointer)? else {
            return Ok(None);
        };

        internal.insert_child(index, promotion.key, promotion.right);
        if !internal.is_full(self.config.max_keys()) {
            self.store.save(&mut Node::from(internal));
            return Ok(None);
        }

        let (promoted_key, right) = internal.split();
        let right_id = self.store.save(&mut Node::from(right));
        let left_id = self.store.save(&mut Node::from(internal));

        debug!("split internal {left_id}: new node {right_id}, promoting {promoted_key}");
        Ok(Some(Promotion {
            key: promoted_key,
            right: right_id,
        }))
    }

    /// Pointers stored under `key`.
    ///
    /// Only the leaf reached by descent is scanned. Equal keys that a split
    /// moved into the leaf to the left are not reported.
    pub fn search(&self, key: Key) -> Result<Vec<RecordPointer>> {
        match self.find_leaf(key)? {
            Some(leaf) => Ok(leaf.pointers_for(key)),
            None => Ok(Vec::new()),
        }
    }

    fn find_leaf(&self, key: Key) -> Result<Option<LeafNode>> {
        let Some(mut node_id) = self.root else {
            return Ok(None);
        };

        loop {
            match self.store.load(node_id)? {
                Node::Leaf(leaf) => return Ok(Some(leaf)),
                Node::Internal(internal) => {
                    node_id = internal.child_for(key);
                    trace!("search {key}: descend {:?} -> child {node_id}", internal.id);
                }
            }
        }
    }

    /// Number of levels, counting the leaf level. An empty tree has height 0.
    pub fn height(&self) -> Result<usize> {
        Ok(self.leftmost_leaf()?.map_or(0, |(_, depth)| depth))
    }

    /// Id of the leftmost leaf, where the leaf chain starts.
    pub fn first_leaf(&self) -> Result<Option<NodeId>> {
        Ok(self.leftmost_leaf()?.map(|(leaf_id, _)| leaf_id))
    }

    /// Follows `children[0]` from the root down to a leaf. Returns the leaf id
    /// and the number of levels visited, the leaf included.
    fn leftmost_leaf(&self) -> Result<Option<(NodeId, usize)>> {
        let Some(mut node_id) = self.root else {
            return Ok(None);
        };

        let mut depth = 1;
        loop {
            match self.store.load(node_id)? {
                Node::Leaf(_) => return Ok(Some((node_id, depth))),
                Node::Internal(internal) => {
                    node_id = internal.children[0];
                    depth += 1;
                }
            }
        }
    }

    /// Walks the leaf chain left to right.
    pub fn leaves(&self) -> Result<LeafChain<'_, S>> {
        Ok(LeafChain {
            store: &self.store,
            next: self.first_leaf()?,
        })
    }
}

/// Iterator over leaves following `next_leaf` links.
pub struct LeafChain<'a, S: NodeStore> {
    store: &'a S,
    next: Option<NodeId>,
}

impl<'a, S: NodeStore> Iterator for LeafChain<'a, S> {
    type Item = Result<LeafNode>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        match self.store.load(id) {
            Ok(Node::Leaf(leaf)) => {
                self.next = leaf.next_leaf;
                Some(Ok(leaf))
            }
            Ok(Node::Internal(_)) => panic!("leaf chain points at internal node {id}"),
            Err(err) => Some(Err(err)),
        }
    }
}
