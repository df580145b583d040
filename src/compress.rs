use bitstream::BitSink;
use codetree::CodeTable;
use codetree::Tree;
use common::Result;
use common::Symbol;
use log::{debug, trace};

/// Encodes symbols with the codewords of a tree.
///
/// The codewords of all symbols are derived once from the tree when the encoder is created, the
/// encoder itself is immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Encoder {
    table: CodeTable,
}

impl Encoder {
    pub fn new(tree: &Tree) -> Self {
        Encoder {
            table: tree.code_table(),
        }
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// appends the codeword of a single symbol, returns the number of bits written
    #[inline]
    pub fn encode_symbol<S: BitSink>(&self, symbol: Symbol, sink: &mut S) -> Result<usize> {
        let codeword = self.table.get(symbol)?;
        sink.put_bits(codeword.bits());
        Ok(codeword.len())
    }

    /// Appends the codewords of all symbols followed by the end-of-stream codeword.
    ///
    /// Returns the number of bits written. On an unknown symbol the codewords of the preceding
    /// symbols are already in the sink.
    pub fn encode<I, S>(&self, symbols: I, sink: &mut S) -> Result<usize>
    where
        I: IntoIterator<Item = Symbol>,
        S: BitSink,
    {
        let mut num_bits = 0;
        let mut num_symbols = 0;
        for symbol in symbols {
            num_bits += self.encode_symbol(symbol, sink)?;
            num_symbols += 1;
        }
        let end_of_stream = self.table.end_of_stream();
        let terminator_bits = self.encode_symbol(end_of_stream, sink)?;
        trace!("end-of-stream codeword with {} bits", terminator_bits);
        num_bits += terminator_bits;
        debug!("encoded {} symbols into {} bits", num_symbols, num_bits);
        Ok(num_bits)
    }
}
