#![no_main]

use codetree::build_tree;
use codetree::test_prefix_property;
use common::FrequencyTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let freqs = FrequencyTable::from_bytes(data);
    let tree = build_tree(&freqs).unwrap();
    test_prefix_property(&tree.code_table());
});
