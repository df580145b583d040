use std::collections::BTreeMap;

use common::FrequencyTable;
use common::HuffError;
use common::Result;
use log::Level::Trace;
use log::{debug, log_enabled, trace};

use crate::pqueue::MinHeap;
use crate::tree::tree_node::{Node, NodeKey};
use crate::tree::Tree;

/// Creates a huffman tree by greedily merging the two nodes with the lowest count.
///
/// Every symbol with a positive count becomes a leaf, plus one leaf for the end-of-stream symbol
/// with a count of zero. The node removed first from the queue becomes the left child.
/// An empty table yields a tree consisting only of the end-of-stream leaf.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Tree> {
    let space = freqs.space();
    let end_of_stream = space.end_of_stream();
    let num_leaves = freqs.num_symbols() + 1;

    let mut nodes = Vec::with_capacity(2 * num_leaves - 1);
    let mut leaf_index = BTreeMap::new();
    let mut heap = MinHeap::with_capacity(num_leaves);

    let leaves = freqs
        .iter()
        .chain(std::iter::once((end_of_stream, 0)));
    for (symbol, count) in leaves {
        let node_pos = nodes.len();
        nodes.push(Node::leaf(symbol, count));
        leaf_index.insert(symbol, node_pos);
        heap.insert(NodeKey::leaf(symbol, count), node_pos);
    }

    let mut merge_seq: u32 = 0;
    while heap.len() > 1 {
        let (key1, node1_pos) = heap.remove_min()?;
        let (key2, node2_pos) = heap.remove_min()?;
        let count = key1
            .count
            .checked_add(key2.count)
            .ok_or(HuffError::FrequencyOverflow)?;

        let parent_pos = nodes.len();
        nodes.push(Node {
            count,
            left: Some(node1_pos),
            right: Some(node2_pos),
            ..Default::default()
        });
        nodes[node1_pos].parent = Some(parent_pos);
        nodes[node2_pos].parent = Some(parent_pos);
        if log_enabled!(Trace) {
            trace!(
                "merge {:?} + {:?} -> node {} count {}",
                key1,
                key2,
                parent_pos,
                count
            );
        }

        heap.insert(NodeKey::merged(count, merge_seq), parent_pos);
        merge_seq += 1;
    }
    let (_, root_node) = heap.remove_min()?;
    debug_assert_eq!(root_node, nodes.len() - 1);
    debug_assert_eq!(nodes.len(), 2 * num_leaves - 1);

    let tree = Tree {
        nodes,
        root_node,
        leaf_index,
        space,
    };
    debug!(
        "built tree with {} leaves, {} merges, depth {}",
        num_leaves,
        merge_seq,
        tree.get_depth()
    );
    Ok(tree)
}
