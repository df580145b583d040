use std::collections::btree_map;
use std::collections::BTreeMap;

use log::debug;

use crate::count_simple;
use crate::error::{HuffError, Result};
use crate::Symbol;
use crate::SymbolSpace;

/// Occurrence counts per symbol, the input of the tree builder.
///
/// The table is ordered by symbol, so building a tree from it does not depend on the order in which
/// the counts were added. The end-of-stream sentinel is never stored here, the builder adds it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    space: SymbolSpace,
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new(space: SymbolSpace) -> Self {
        FrequencyTable {
            space,
            counts: BTreeMap::new(),
        }
    }

    /// counts every symbol of the input
    pub fn from_symbols<I>(space: SymbolSpace, symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut table = FrequencyTable::new(space);
        for symbol in symbols {
            table.add(symbol, 1)?;
        }
        Ok(table)
    }

    /// counts the UTF-16 code units of the text
    pub fn from_text(text: &str) -> Self {
        let mut table = FrequencyTable::new(SymbolSpace::UTF16);
        for unit in text.encode_utf16() {
            *table.counts.entry(unit as Symbol).or_insert(0) += 1;
        }
        debug!(
            "counted {} distinct code units in {} bytes of text",
            table.len(),
            text.len()
        );
        table
    }

    pub fn from_bytes(input: &[u8]) -> Self {
        let counts = count_simple(input);
        let mut table = FrequencyTable::new(SymbolSpace::BYTES);
        for (byte, count) in counts.iter().enumerate().filter(|(_, count)| **count != 0) {
            table.counts.insert(byte as Symbol, *count);
        }
        table
    }

    /// Sets the count of a symbol, replacing any previous count.
    pub fn insert(&mut self, symbol: Symbol, count: u64) -> Result<Option<u64>> {
        self.space.check(symbol)?;
        Ok(self.counts.insert(symbol, count))
    }

    /// Adds to the count of a symbol.
    pub fn add(&mut self, symbol: Symbol, count: u64) -> Result<u64> {
        self.space.check(symbol)?;
        let entry = self.counts.entry(symbol).or_insert(0);
        *entry = entry.checked_add(count).ok_or(HuffError::FrequencyOverflow)?;
        Ok(*entry)
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    #[inline]
    pub fn space(&self) -> SymbolSpace {
        self.space
    }

    #[inline]
    pub fn end_of_stream(&self) -> Symbol {
        self.space.end_of_stream()
    }

    /// number of stored symbols, including those with a zero count
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// symbols with a positive count, ascending by symbol
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count != 0)
            .map(|(symbol, count)| (*symbol, *count))
    }

    /// number of symbols with a positive count
    pub fn num_symbols(&self) -> usize {
        self.iter().count()
    }

    /// sum of all counts, fails with `FrequencyOverflow` if it does not fit in u64
    pub fn total(&self) -> Result<u64> {
        self.counts
            .values()
            .try_fold(0_u64, |total, count| total.checked_add(*count))
            .ok_or(HuffError::FrequencyOverflow)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Symbol, &'a u64);
    type IntoIter = btree_map::Iter<'a, Symbol, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
