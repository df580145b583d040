use std::collections::BTreeMap;
use std::fmt;

use common::HuffError;
use common::Result;
use common::Symbol;
use common::SymbolSpace;

use crate::tree::tree_node::NodeId;
use crate::tree::Tree;

/// Path from the root to a leaf, `false` is a left edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// only the codeword of a single leaf tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// true if `self` is a prefix of `other`, every codeword is a prefix of itself
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Codeword {
    fn from(bits: Vec<bool>) -> Self {
        Codeword { bits }
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Tree {
    /// Derives the codeword of a symbol by walking from its leaf up to the root.
    pub fn codeword(&self, symbol: Symbol) -> Result<Codeword> {
        let leaf = self.leaf(symbol).ok_or(HuffError::UnknownSymbol(symbol))?;
        Ok(self.derive_codeword(leaf))
    }

    fn derive_codeword(&self, leaf: NodeId) -> Codeword {
        let mut bits = vec![];
        let mut current = leaf;
        while let Some(parent) = self.nodes[current].parent {
            let parent_node = &self.nodes[parent];
            debug_assert!(parent_node.left == Some(current) || parent_node.right == Some(current));
            bits.push(parent_node.right == Some(current));
            current = parent;
        }
        debug_assert_eq!(current, self.root_node);
        bits.reverse();
        Codeword { bits }
    }

    /// derives the codewords of all symbols
    pub fn code_table(&self) -> CodeTable {
        let codes = self
            .leaf_index
            .iter()
            .map(|(symbol, leaf)| (*symbol, self.derive_codeword(*leaf)))
            .collect();
        CodeTable {
            space: self.space,
            codes,
        }
    }
}

/// Codeword per symbol, ordered by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    space: SymbolSpace,
    codes: BTreeMap<Symbol, Codeword>,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Result<&Codeword> {
        self.codes.get(&symbol).ok_or(HuffError::UnknownSymbol(symbol))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn end_of_stream(&self) -> Symbol {
        self.space.end_of_stream()
    }

    pub fn max_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }
}

/// One `symbol:codeword` line per symbol, the sentinel is listed as `EndOfStream`.
impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in &self.codes {
            writeln!(f, "{}:{}", self.space.display_symbol(*symbol), code)?;
        }
        Ok(())
    }
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow (quadratic) and should not be used in a regular compression execution.
pub fn test_prefix_property(table: &CodeTable) {
    let codes: Vec<(Symbol, &Codeword)> = table.iter().collect();
    for (i, (symbol, code)) in codes.iter().enumerate() {
        for (other_symbol, other_code) in &codes[i + 1..] {
            if code.is_prefix_of(other_code) || other_code.is_prefix_of(code) {
                panic!(
                    "invalid prefix detected between {} ({}) and {} ({})",
                    symbol, code, other_symbol, other_code
                );
            }
        }
    }
}
