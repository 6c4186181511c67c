#![allow(dead_code)]

use std::collections::HashSet;

use bplus_index::{BPlusTree, Key, Node, NodeId, NodeStore, RecordPointer};
use log::debug;

/// Initializes env_logger for tests automatically.
#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shape facts gathered while checking a tree.
#[derive(Debug, Default)]
pub struct TreeShape {
    pub leaf_depth: Option<usize>,
    pub leaves: Vec<NodeId>, // left to right, as reached from the root
    pub nodes: usize,
}

/// Walks the whole tree from the root and panics on the first broken
/// structural invariant. Returns the shape it saw.
pub fn check_tree<S: NodeStore>(tree: &BPlusTree<S>) -> TreeShape {
    let mut shape = TreeShape::default();
    let mut seen = HashSet::new();

    if let Some(root) = tree.root() {
        check_node(tree, root, 1, None, None, &mut seen, &mut shape);
    }

    let chain: Vec<NodeId> = tree
        .leaves()
        .expect("first leaf")
        .map(|leaf| leaf.expect("leaf in chain").id().expect("saved leaf has an id"))
        .collect();
    assert_eq!(chain, shape.leaves, "leaf chain must visit leaves left to right");

    debug!(
        "checked tree: {} nodes, {} leaves, depth {:?}",
        shape.nodes,
        shape.leaves.len(),
        shape.leaf_depth
    );
    shape
}

fn check_node<S: NodeStore>(
    tree: &BPlusTree<S>,
    id: NodeId,
    depth: usize,
    low: Option<Key>,
    high: Option<Key>,
    seen: &mut HashSet<NodeId>,
    shape: &mut TreeShape,
) {
    assert!(seen.insert(id), "node {id} reachable twice");
    shape.nodes += 1;

    let node = tree.store().load(id).expect("reachable node is stored");
    assert_eq!(node.id(), Some(id), "stored node carries its own id");

    let keys = node.keys();
    let max_keys = tree.order() - 1;
    assert!(keys.len() <= max_keys, "node {id} holds {} keys (max {max_keys})", keys.len());
    assert!(keys.windows(2).all(|w| w[0] <= w[1]), "node {id} keys unsorted: {keys:?}");
    if let Some(low) = low {
        assert!(keys.iter().all(|k| *k >= low), "node {id} has a key below {low}: {keys:?}");
    }
    if let Some(high) = high {
        assert!(keys.iter().all(|k| *k <= high), "node {id} has a key above {high}: {keys:?}");
    }

    match node {
        Node::Leaf(leaf) => {
            assert_eq!(leaf.keys.len(), leaf.record_pointers.len());
            match shape.leaf_depth {
                Some(expected) => assert_eq!(depth, expected, "leaf {id} at uneven depth"),
                None => shape.leaf_depth = Some(depth),
            }
            shape.leaves.push(id);
        }
        Node::Internal(internal) => {
            assert_eq!(
                internal.children.len(),
                internal.keys.len() + 1,
                "internal node {id} has mismatched children"
            );
            for (i, child) in internal.children.iter().enumerate() {
                let child_low = if i == 0 { low } else { Some(internal.keys[i - 1]) };
                let child_high = internal.keys.get(i).copied().or(high);
                check_node(tree, *child, depth + 1, child_low, child_high, seen, shape);
            }
        }
    }
}

/// All entries in leaf chain order.
pub fn chain_entries<S: NodeStore>(tree: &BPlusTree<S>) -> Vec<(Key, RecordPointer)> {
    tree.leaves()
        .expect("first leaf")
        .flat_map(|leaf| leaf.expect("leaf in chain").entries().collect::<Vec<_>>())
        .collect()
}
