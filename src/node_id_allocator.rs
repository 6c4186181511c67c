// src/node_id_allocator.rs

use crate::node::NodeId;

/// Hands out node ids in increasing order. Ids are never reused.
#[derive(Debug, Clone)]
pub struct NodeIdAllocator {
    next_id: usize,
}

impl NodeIdAllocator {
    pub fn new(start: usize) -> Self {
        Self { next_id: start }
    }

    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self::new(0)
    }
}
