/*!
Shared types of the huffstream workspace.

A [`Symbol`] is an integer code point. Every session works inside a [`SymbolSpace`], which fixes
the largest valid code point and places the reserved end-of-stream sentinel right after it, so
the sentinel can never collide with a real symbol.
*/

pub mod error;
mod table;

use std::fmt;

pub use error::{HuffError, Result};
pub use table::FrequencyTable;

pub type Symbol = u32;

/// Largest code point of the default space, a single UTF-16 code unit
pub const MAX_CODE_POINT: Symbol = u16::MAX as Symbol;
/// Sentinel of the default space
pub const END_OF_STREAM: Symbol = MAX_CODE_POINT + 1;

pub const MAX_BYTE_SYMBOL: Symbol = u8::MAX as Symbol;
pub const BYTE_END_OF_STREAM: Symbol = MAX_BYTE_SYMBOL + 1;

/// The range of valid symbols `0..=max_symbol` plus the end-of-stream sentinel `max_symbol + 1`.
///
/// The space is fixed for the lifetime of a session, it is carried by value by the
/// [`FrequencyTable`] and the tree built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSpace {
    max_symbol: Symbol,
}

impl SymbolSpace {
    /// UTF-16 code units, the sentinel is `0x10000`
    pub const UTF16: SymbolSpace = SymbolSpace {
        max_symbol: MAX_CODE_POINT,
    };
    /// Single bytes, the sentinel is `0x100`
    pub const BYTES: SymbolSpace = SymbolSpace {
        max_symbol: MAX_BYTE_SYMBOL,
    };

    /// `u32::MAX` is rejected, since there would be no room left for the sentinel.
    pub fn new(max_symbol: Symbol) -> Result<Self> {
        if max_symbol == Symbol::MAX {
            return Err(HuffError::SymbolOutOfRange {
                symbol: max_symbol,
                max_symbol: Symbol::MAX - 1,
            });
        }
        Ok(SymbolSpace { max_symbol })
    }

    #[inline]
    pub fn max_symbol(&self) -> Symbol {
        self.max_symbol
    }

    #[inline]
    pub fn end_of_stream(&self) -> Symbol {
        self.max_symbol + 1
    }

    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        symbol <= self.max_symbol
    }

    pub fn check(&self, symbol: Symbol) -> Result<Symbol> {
        if self.contains(symbol) {
            Ok(symbol)
        } else {
            Err(HuffError::SymbolOutOfRange {
                symbol,
                max_symbol: self.max_symbol,
            })
        }
    }

    /// Formats a symbol for code listings: printable characters as themselves, the sentinel as
    /// `EndOfStream` and everything else as a hex code point.
    pub fn display_symbol(&self, symbol: Symbol) -> SymbolDisplay {
        SymbolDisplay {
            symbol,
            end_of_stream: self.end_of_stream(),
        }
    }
}

impl Default for SymbolSpace {
    fn default() -> Self {
        SymbolSpace::UTF16
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SymbolDisplay {
    symbol: Symbol,
    end_of_stream: Symbol,
}

impl fmt::Display for SymbolDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol == self.end_of_stream {
            return f.write_str("EndOfStream");
        }
        match std::char::from_u32(self.symbol) {
            Some(ch) if !ch.is_control() && !ch.is_whitespace() => write!(f, "{}", ch),
            _ => write!(f, "{:#06x}", self.symbol),
        }
    }
}

/// creates a table with the counts of each byte
#[inline]
pub fn count_simple(input: &[u8]) -> [u64; 256] {
    let mut counts = [0_u64; 256];

    for byte in input {
        counts[*byte as usize] += 1
    }
    counts
}

#[test]
fn test_count_simple() {
    let counts = count_simple(b"abracadabra");
    assert_eq!(counts[b'a' as usize], 5);
    assert_eq!(counts[b'b' as usize], 2);
    assert_eq!(counts[b'r' as usize], 2);
    assert_eq!(counts[b'c' as usize], 1);
    assert_eq!(counts[b'z' as usize], 0);
    assert_eq!(counts.iter().sum::<u64>(), 11);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_outside_of_space() {
        for space in &[SymbolSpace::UTF16, SymbolSpace::BYTES, SymbolSpace::new(4).unwrap()] {
            assert!(!space.contains(space.end_of_stream()));
            assert!(space.contains(space.max_symbol()));
            assert_eq!(space.end_of_stream(), space.max_symbol() + 1);
        }
        assert_eq!(SymbolSpace::default().end_of_stream(), END_OF_STREAM);
        assert_eq!(SymbolSpace::BYTES.end_of_stream(), BYTE_END_OF_STREAM);
    }

    #[test]
    fn space_without_room_for_sentinel() {
        assert!(SymbolSpace::new(Symbol::MAX).is_err());
        assert!(SymbolSpace::new(Symbol::MAX - 1).is_ok());
    }

    #[test]
    fn check_symbol() {
        assert_eq!(SymbolSpace::BYTES.check(255), Ok(255));
        assert_eq!(
            SymbolSpace::BYTES.check(256),
            Err(HuffError::SymbolOutOfRange {
                symbol: 256,
                max_symbol: 255
            })
        );
    }

    #[test]
    fn display_symbols() {
        let space = SymbolSpace::UTF16;
        assert_eq!(space.display_symbol('G' as Symbol).to_string(), "G");
        assert_eq!(space.display_symbol(END_OF_STREAM).to_string(), "EndOfStream");
        assert_eq!(space.display_symbol('\n' as Symbol).to_string(), "0x000a");
        assert_eq!(space.display_symbol(' ' as Symbol).to_string(), "0x0020");
    }
}
