/*!
huffstream is a Huffman coder over an open symbol alphabet, with an explicit end-of-stream symbol.

The code tree is built from a [`FrequencyTable`] (see the `codetree` crate). Encoding appends the
codeword of every symbol and finally the codeword of the end-of-stream sentinel, so the decoder
knows where the message ends without a length prefix and ignores whatever follows, e.g. the zero
padding of the last byte.

The frequency table is not part of the encoded bits. Encoder and decoder have to build the tree
from the same table, which is transported out of band.

```
use huffstream::HuffmanCodec;
use common::FrequencyTable;

let freqs = FrequencyTable::from_text("ABACAD");
let codec = HuffmanCodec::new(&freqs).unwrap();
let symbols: Vec<u32> = "ABACAD".chars().map(|ch| ch as u32).collect();
let bits = codec.encode_to_bits(symbols.iter().copied()).unwrap();
assert_eq!(codec.decode(&mut bits.reader()).unwrap(), symbols);
```

*/

use std::convert::TryFrom;
use std::fmt;

use bitstream::BitReader;
use bitstream::BitSink;
use bitstream::BitSource;
use bitstream::BitWriter;
use common::HuffError;
use log::debug;

pub use bitstream::PackedBits;
pub use codetree::{build_tree, CodeTable, Codeword, Tree};
pub use common::{FrequencyTable, Result, Symbol, SymbolSpace};

pub use crate::compress::Encoder;
pub use crate::decompress::{decode, DecodeStep, Decoder};

pub mod compress;
pub mod decompress;

/// Tree and codewords for one frequency table.
///
/// The tree is built once and only read afterwards, a codec can be shared between threads and
/// used for any number of messages.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: Tree,
    encoder: Encoder,
}

impl HuffmanCodec {
    pub fn new(freqs: &FrequencyTable) -> Result<Self> {
        let tree = build_tree(freqs)?;
        let encoder = Encoder::new(&tree);
        debug!(
            "codec with {} leaves, max codeword length {}",
            tree.num_leaves(),
            encoder.code_table().max_len()
        );
        Ok(HuffmanCodec { tree, encoder })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        self.encoder.code_table()
    }

    /// writes the codewords and the end-of-stream codeword, returns the number of bits written
    pub fn encode<I, S>(&self, symbols: I, sink: &mut S) -> Result<usize>
    where
        I: IntoIterator<Item = Symbol>,
        S: BitSink,
    {
        self.encoder.encode(symbols, sink)
    }

    pub fn encode_to_bits<I>(&self, symbols: I) -> Result<PackedBits>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut writer = BitWriter::new();
        self.encoder.encode(symbols, &mut writer)?;
        Ok(writer.finish())
    }

    pub fn decode<S: BitSource>(&self, source: &mut S) -> Result<Vec<Symbol>> {
        decode(&self.tree, source)
    }
}

/// A text message and the frequency table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub freqs: FrequencyTable,
    pub bits: PackedBits,
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits.to_bit_string())
    }
}

/// Encodes the UTF-16 code units of `text` with a table counted from the text itself.
pub fn encode_text(text: &str) -> Result<EncodedText> {
    let freqs = FrequencyTable::from_text(text);
    let codec = HuffmanCodec::new(&freqs)?;
    let bits = codec.encode_to_bits(text.encode_utf16().map(Symbol::from))?;
    debug!(
        "encoded {} bytes of text into {} bits",
        text.len(),
        bits.num_bits
    );
    Ok(EncodedText { freqs, bits })
}

/// Decodes text produced by [`encode_text`], `data` may carry padding after the end-of-stream
/// codeword.
pub fn decode_text(freqs: &FrequencyTable, data: &[u8]) -> Result<String> {
    let codec = HuffmanCodec::new(freqs)?;
    let symbols = codec.decode(&mut BitReader::new(data))?;
    let units = symbols
        .into_iter()
        .map(|symbol| u16::try_from(symbol).map_err(|_| HuffError::InvalidUtf16))
        .collect::<Result<Vec<u16>>>()?;
    String::from_utf16(&units).map_err(|_| HuffError::InvalidUtf16)
}
