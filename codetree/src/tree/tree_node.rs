use common::Symbol;

/// position of a node in the arena of the [`Tree`](super::Tree)
pub type NodeId = usize;

#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// the symbol of a leaf, `None` for internal nodes
    pub(crate) symbol: Option<Symbol>,
    /// the number of occurences, for internal nodes the sum of both children
    pub(crate) count: u64,
    /// position of the left node in the array
    pub(crate) left: Option<NodeId>,
    /// position of the right node in the array
    pub(crate) right: Option<NodeId>,
    /// position of the parent node in the array, `None` for the root.
    /// Only used to walk upwards, the arena owns all nodes.
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn leaf(symbol: Symbol, count: u64) -> Self {
        Node {
            symbol: Some(symbol),
            count,
            ..Default::default()
        }
    }

    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// child for the transition bit, `false` is left
    #[inline]
    pub fn child(&self, bit: bool) -> Option<NodeId> {
        if bit {
            self.right
        } else {
            self.left
        }
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Node{{ symbol:{:?} count:{} left:{:?} right:{:?} parent:{:?} }}",
            self.symbol, self.count, self.left, self.right, self.parent
        ))
    }
}

/// Tie-break part of the heap key.
///
/// Leaves rank by their symbol, internal nodes by the sequence number of the merge which created
/// them. Variant order puts every leaf before every internal node of the same count, so the two
/// kinds can never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Symbol(Symbol),
    Merge(u32),
}

/// Heap ordering key, count first, then [`Rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey {
    pub count: u64,
    pub rank: Rank,
}

impl NodeKey {
    pub fn leaf(symbol: Symbol, count: u64) -> Self {
        NodeKey {
            count,
            rank: Rank::Symbol(symbol),
        }
    }

    pub fn merged(count: u64, seq: u32) -> Self {
        NodeKey {
            count,
            rank: Rank::Merge(seq),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order() {
        assert!(NodeKey::leaf(10, 1) < NodeKey::leaf(2, 2));
        assert!(NodeKey::leaf(2, 1) < NodeKey::leaf(10, 1));
        // a leaf wins against a merged node of the same count, even for symbol 0
        assert!(NodeKey::leaf(u32::MAX, 3) < NodeKey::merged(3, 0));
        assert!(NodeKey::leaf(0, 3) < NodeKey::merged(3, 0));
        assert!(NodeKey::merged(3, 0) < NodeKey::merged(3, 1));
        assert!(NodeKey::merged(3, 7) < NodeKey::leaf(0, 4));
    }

    #[test]
    fn child_by_bit() {
        let node = Node {
            left: Some(1),
            right: Some(2),
            ..Default::default()
        };
        assert_eq!(node.child(false), Some(1));
        assert_eq!(node.child(true), Some(2));
        assert!(!node.is_leaf());
        assert!(Node::leaf(65, 1).is_leaf());
        assert_eq!(Node::leaf(65, 1).child(true), None);
    }
}
