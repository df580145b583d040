use std::collections::BTreeMap;

use common::HuffError;
use common::Result;
use common::Symbol;
use common::SymbolSpace;

use super::tree_node::{Node, NodeId};
use crate::tree::render_tree::render_plan_to;

/// Huffman tree stored in an arena.
///
/// Children are owned by the arena and referenced by position, the `parent` of a node is a plain
/// back reference used by the codeword derivation. The tree is immutable once built.
#[derive(Debug, Clone)]
pub struct Tree {
    /// leaves first, in symbol order, the end-of-stream leaf last of them. Internal nodes follow
    /// in creation order, so the root is always the last node.
    pub(crate) nodes: Vec<Node>,
    pub(crate) root_node: NodeId,
    /// symbol to leaf position, filled once while building
    pub(crate) leaf_index: BTreeMap<Symbol, NodeId>,
    pub(crate) space: SymbolSpace,
}

impl Tree {
    #[inline]
    pub fn get_node(&self, node_pos: NodeId) -> &Node {
        &self.nodes[node_pos]
    }

    #[inline]
    pub fn get_root_node(&self) -> &Node {
        &self.nodes[self.root_node]
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root_node
    }

    /// total number of nodes, leaves and internal
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// number of leaves, including the end-of-stream leaf
    pub fn num_leaves(&self) -> usize {
        self.leaf_index.len()
    }

    /// leaf position of the symbol
    #[inline]
    pub fn leaf(&self, symbol: Symbol) -> Option<NodeId> {
        self.leaf_index.get(&symbol).copied()
    }

    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.leaf_index.contains_key(&symbol)
    }

    /// all symbols of the tree in ascending order, the end-of-stream symbol is the last one
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.leaf_index.keys().copied()
    }

    #[inline]
    pub fn space(&self) -> SymbolSpace {
        self.space
    }

    #[inline]
    pub fn end_of_stream(&self) -> Symbol {
        self.space.end_of_stream()
    }

    /// The child reached from `node_pos` by the transition bit, `None` if there is no such edge,
    /// which is always the case for leaves.
    #[inline]
    pub fn child(&self, node_pos: NodeId, bit: bool) -> Option<NodeId> {
        self.nodes[node_pos].child(bit)
    }

    /// returns the length of the longest codeword
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(self.root_node, &mut |_, _, path| {
            max_depth = max_depth.max(path.len());
        });
        max_depth
    }

    /// Number of bits needed to encode every counted symbol once, the end-of-stream codeword is not
    /// included since its count is zero.
    ///
    /// A root count that fits in u64 does not bound this sum, it fails with `FrequencyOverflow`.
    pub fn encoded_bit_len(&self) -> Result<u64> {
        let mut size_in_bits = Some(0_u64);
        self.walk_tree(self.root_node, &mut |_, node, path| {
            if node.is_leaf() {
                size_in_bits = size_in_bits.and_then(|size| {
                    node.count
                        .checked_mul(path.len() as u64)?
                        .checked_add(size)
                });
            }
        });
        size_in_bits.ok_or(HuffError::FrequencyOverflow)
    }

    /// returns estimated compressed size in byte
    pub fn estimate_compressed_size(&self) -> Result<usize> {
        let size_in_bits = self.encoded_bit_len()?;
        Ok((size_in_bits / 8 + (size_in_bits % 8 != 0) as u64) as usize)
    }

    /// Calls `fun` for every node below `start_node_pos` in pre-order, left before right, with
    /// the path from the start node (`false` is left).
    pub fn walk_tree<F>(&self, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(NodeId, &Node, &[bool]),
    {
        let mut path = Vec::new();
        fun(start_node_pos, &self.nodes[start_node_pos], &path);
        self.walk_graph_internal(&mut path, start_node_pos, fun);
    }

    fn walk_graph_internal<F>(&self, path: &mut Vec<bool>, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(NodeId, &Node, &[bool]),
    {
        let node = &self.nodes[start_node_pos];
        for (bit, child) in [(false, node.left), (true, node.right)].iter() {
            if let Some(child) = child {
                path.push(*bit);
                fun(*child, &self.nodes[*child], &path[..]);
                self.walk_graph_internal(path, *child, fun);
                path.pop();
            }
        }
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(&self, f)
    }
}
