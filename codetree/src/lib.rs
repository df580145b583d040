/*!
Huffman code construction.

[`build_tree`] merges the two nodes with the lowest count until one root is left, using the
[`MinHeap`](pqueue::MinHeap) priority queue. Every tree carries a leaf for the end-of-stream
sentinel of its [`SymbolSpace`](common::SymbolSpace), so any tree built from a non-empty table
has at least two leaves and every codeword is at least one bit long.

Codewords are derived by walking the parent links from a leaf up to the root, see
[`Tree::codeword`].

```
use codetree::build_tree;
use common::FrequencyTable;

let freqs = FrequencyTable::from_text("AACGTAAATAATGAAC");
let tree = build_tree(&freqs).unwrap();
assert_eq!(tree.codeword('A' as u32).unwrap().len(), 1);
println!("{}", tree.code_table());
```
*/

pub mod pqueue;
pub mod tree;

pub use crate::tree::build_tree;
pub use crate::tree::codeword::test_prefix_property;
pub use crate::tree::{CodeTable, Codeword, Node, NodeId, Tree};

#[cfg(test)]
mod tests {
    use crate::tree::minimum_tree_depth;
    use crate::*;
    use common::{FrequencyTable, Symbol, SymbolSpace};

    fn test_tree(data: &str) -> Tree {
        let tree = build_tree(&FrequencyTable::from_text(data)).unwrap();
        test_prefix_property(&tree.code_table());
        tree
    }

    #[test]
    fn test_strings() {
        let texts = [
            "AACGTAAATAATGAAC",
            "Hey,this is my second test!",
            "I AM SAM, SAM I AM. THAT SAM I AM,THAT SAM I AM, I DO NOT LIKE THAT SAM I AM",
            "Death is like the wind, always by my side.",
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAa",
        ];
        for text in texts.iter() {
            let tree = test_tree(text);
            assert!(tree.get_depth() >= minimum_tree_depth(tree.num_leaves()));
        }
    }

    #[test]
    fn skewed_text_has_one_bit_code() {
        let tree = test_tree("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAa");
        assert_eq!(tree.codeword('A' as Symbol).unwrap().len(), 1);
        assert_eq!(tree.codeword('a' as Symbol).unwrap().len(), 2);
        assert_eq!(tree.codeword(tree.end_of_stream()).unwrap().len(), 2);
    }

    #[test]
    fn byte_space_tree() {
        let tree = build_tree(&FrequencyTable::from_bytes(&[0, 0, 0, 1, 255])).unwrap();
        assert_eq!(tree.space(), SymbolSpace::BYTES);
        assert_eq!(tree.end_of_stream(), 256);
        assert_eq!(tree.symbols().collect::<Vec<_>>(), vec![0, 1, 255, 256]);
        test_prefix_property(&tree.code_table());
    }

    #[test]
    fn custom_space_tree() {
        let space = SymbolSpace::new(3).unwrap();
        let freqs = FrequencyTable::from_symbols(space, vec![0, 1, 1, 2, 2, 2, 3, 3, 3, 3]).unwrap();
        let tree = build_tree(&freqs).unwrap();
        assert_eq!(tree.end_of_stream(), 4);
        assert_eq!(tree.num_leaves(), 5);
        assert_eq!(tree.get_root_node().count(), 10);
        test_prefix_property(&tree.code_table());
    }
}
