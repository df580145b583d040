#![no_main]

use codetree::build_tree;
use common::FrequencyTable;
use libfuzzer_sys::fuzz_target;

// following the derived codeword from the root has to end at the leaf of the symbol
fuzz_target!(|data: &[u8]| {
    let freqs = FrequencyTable::from_bytes(data);
    let tree = build_tree(&freqs).unwrap();
    for symbol in tree.symbols() {
        let codeword = tree.codeword(symbol).unwrap();
        let mut current = tree.root();
        for bit in codeword.bits() {
            current = tree.child(current, *bit).unwrap();
        }
        assert_eq!(tree.get_node(current).symbol(), Some(symbol));
        assert!(tree.get_node(current).is_leaf());
    }
});
