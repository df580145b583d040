use crate::Symbol;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// remove_min on an empty priority queue, the tree builder lost track of its nodes
    #[error("remove_min called on an empty priority queue")]
    EmptyQueue,
    #[error("symbol {0} is not part of the frequency table")]
    UnknownSymbol(Symbol),
    #[error("malformed bit stream at bit {bit_pos}: no tree edge to follow")]
    MalformedStream { bit_pos: usize },
    /// the bit source ran dry before the end-of-stream codeword, `partial` holds what was decoded so far
    #[error("bit stream ended before the end-of-stream symbol after {} symbols", partial.len())]
    TruncatedStream { partial: Vec<Symbol> },
    #[error("symbol {symbol} is outside of the symbol space 0..={max_symbol}")]
    SymbolOutOfRange { symbol: Symbol, max_symbol: Symbol },
    #[error("frequency count overflow")]
    FrequencyOverflow,
    #[error("invalid bit character {ch:?} at position {pos}")]
    InvalidBitChar { pos: usize, ch: char },
    #[error("decoded symbols are not valid utf-16")]
    InvalidUtf16,
}
