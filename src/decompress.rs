use bitstream::BitSource;
use codetree::NodeId;
use codetree::Tree;
use common::HuffError;
use common::Result;
use common::Symbol;
use log::debug;

/// Result of feeding one bit into the [`Decoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// the bit moved to an internal node, more bits are needed
    Pending,
    /// a leaf was reached, the decoder is back at the root
    Symbol(Symbol),
    /// the end-of-stream leaf was reached, no more bits are accepted
    End,
}

/// Decoding state machine, walks the tree one bit per edge.
#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    tree: &'t Tree,
    current: NodeId,
    bits_consumed: usize,
    finished: bool,
}

impl<'t> Decoder<'t> {
    pub fn new(tree: &'t Tree) -> Self {
        // a tree of only the end-of-stream leaf has an empty codeword, the stream is over before
        // the first bit
        let finished = tree.get_root_node().is_leaf();
        Decoder {
            tree,
            current: tree.root(),
            bits_consumed: 0,
            finished,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn bits_consumed(&self) -> usize {
        self.bits_consumed
    }

    /// true if the decoder is in the middle of a codeword
    pub fn is_mid_codeword(&self) -> bool {
        !self.finished && self.current != self.tree.root()
    }

    /// Follows the edge for `bit`. Fails with `MalformedStream` if there is no such edge, which
    /// is the case for every bit after the end-of-stream symbol.
    pub fn feed(&mut self, bit: bool) -> Result<DecodeStep> {
        let malformed = HuffError::MalformedStream {
            bit_pos: self.bits_consumed,
        };
        if self.finished {
            return Err(malformed);
        }
        let next = self.tree.child(self.current, bit).ok_or(malformed)?;
        self.bits_consumed += 1;

        match self.tree.get_node(next).symbol() {
            Some(symbol) if symbol == self.tree.end_of_stream() => {
                self.current = next;
                self.finished = true;
                Ok(DecodeStep::End)
            }
            Some(symbol) => {
                self.current = self.tree.root();
                Ok(DecodeStep::Symbol(symbol))
            }
            None => {
                self.current = next;
                Ok(DecodeStep::Pending)
            }
        }
    }
}

/// Decodes symbols until the end-of-stream symbol.
///
/// Bits after the end-of-stream codeword are not read, so padding at the end of the source is
/// fine. If the source runs dry before that, `TruncatedStream` carries the symbols decoded so far.
pub fn decode<S: BitSource>(tree: &Tree, source: &mut S) -> Result<Vec<Symbol>> {
    let mut decoder = Decoder::new(tree);
    let mut symbols = vec![];
    while !decoder.is_finished() {
        let bit = match source.next_bit() {
            Some(bit) => bit,
            None => {
                debug!(
                    "bit source exhausted after {} bits and {} symbols, mid codeword: {}",
                    decoder.bits_consumed(),
                    symbols.len(),
                    decoder.is_mid_codeword()
                );
                return Err(HuffError::TruncatedStream { partial: symbols });
            }
        };
        if let DecodeStep::Symbol(symbol) = decoder.feed(bit)? {
            symbols.push(symbol);
        }
    }
    debug!(
        "decoded {} symbols from {} bits",
        symbols.len(),
        decoder.bits_consumed()
    );
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::Encoder;
    use bitstream::BitReader;
    use bitstream::BitStrReader;
    use bitstream::BitWriter;
    use codetree::build_tree;
    use common::FrequencyTable;
    use common::SymbolSpace;

    fn scenario_tree() -> Tree {
        let mut freqs = FrequencyTable::new(SymbolSpace::UTF16);
        for (ch, count) in &[('A', 5), ('B', 2), ('C', 1), ('D', 1)] {
            freqs.insert(*ch as Symbol, *count).unwrap();
        }
        build_tree(&freqs).unwrap()
    }

    fn symbols(text: &str) -> Vec<Symbol> {
        text.chars().map(|ch| ch as Symbol).collect()
    }

    fn decode_str(tree: &Tree, bits: &str) -> Result<Vec<Symbol>> {
        decode(tree, &mut BitStrReader::new(bits).unwrap())
    }

    #[test]
    fn test_decode_bits() {
        let tree = scenario_tree();
        // A:1 B:00 C:0111 D:010 EndOfStream:0110
        assert_eq!(
            decode_str(&tree, "1001011110100110"),
            Ok(symbols("ABACAD"))
        );
        assert_eq!(decode_str(&tree, "0110"), Ok(vec![]));
    }

    #[test]
    fn test_roundtrip_packed() {
        let tree = scenario_tree();
        let encoder = Encoder::new(&tree);
        let input = symbols("ADDBACABAACAAB");
        let mut writer = BitWriter::new();
        encoder.encode(input.iter().copied(), &mut writer).unwrap();
        let packed = writer.finish();

        assert_eq!(decode(&tree, &mut packed.reader()), Ok(input.clone()));
        // with the zero padding of the last byte visible
        assert_eq!(decode(&tree, &mut BitReader::new(&packed.data)), Ok(input));
    }

    #[test]
    fn test_stops_reading_after_end_of_stream() {
        let tree = scenario_tree();
        let mut reader = BitStrReader::new("10110111").unwrap();
        assert_eq!(decode(&tree, &mut reader), Ok(symbols("A")));
        assert_eq!(reader.bits_consumed(), 5);
    }

    #[test]
    fn test_truncated_after_complete_symbols() {
        let tree = scenario_tree();
        // end-of-stream codeword is cut after 3 of 4 bits
        assert_eq!(
            decode_str(&tree, "100101111010011"),
            Err(HuffError::TruncatedStream {
                partial: symbols("ABACAD")
            })
        );
    }

    #[test]
    fn test_truncated_mid_symbol() {
        let tree = scenario_tree();
        assert_eq!(
            decode_str(&tree, "10"),
            Err(HuffError::TruncatedStream {
                partial: symbols("A")
            })
        );
        assert_eq!(
            decode_str(&tree, ""),
            Err(HuffError::TruncatedStream { partial: vec![] })
        );
    }

    #[test]
    fn test_feed_past_end_of_stream() {
        let tree = scenario_tree();
        let mut decoder = Decoder::new(&tree);
        assert_eq!(decoder.feed(true), Ok(DecodeStep::Symbol('A' as Symbol)));
        assert_eq!(decoder.feed(false), Ok(DecodeStep::Pending));
        assert!(decoder.is_mid_codeword());
        assert_eq!(decoder.feed(true), Ok(DecodeStep::Pending));
        assert_eq!(decoder.feed(true), Ok(DecodeStep::Pending));
        assert_eq!(decoder.feed(false), Ok(DecodeStep::End));
        assert!(decoder.is_finished());
        assert_eq!(
            decoder.feed(false),
            Err(HuffError::MalformedStream { bit_pos: 5 })
        );
        assert_eq!(decoder.bits_consumed(), 5);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = build_tree(&FrequencyTable::new(SymbolSpace::UTF16)).unwrap();
        let mut decoder = Decoder::new(&tree);
        assert!(decoder.is_finished());
        assert_eq!(
            decoder.feed(true),
            Err(HuffError::MalformedStream { bit_pos: 0 })
        );
        assert_eq!(decode_str(&tree, ""), Ok(vec![]));
        assert_eq!(decode_str(&tree, "0101"), Ok(vec![]));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let mut freqs = FrequencyTable::new(SymbolSpace::UTF16);
        freqs.insert('A' as Symbol, 5).unwrap();
        let tree = build_tree(&freqs).unwrap();
        let encoder = Encoder::new(&tree);
        let mut bits = String::new();
        encoder.encode(symbols("AAAA"), &mut bits).unwrap();
        assert_eq!(bits, "11110");
        assert_eq!(decode_str(&tree, &bits), Ok(symbols("AAAA")));
    }
}
