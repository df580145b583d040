/*!

Bitstream handles the writing and reading of single bits. Bits are read in the same order they
were written, the first bit written is the most significant bit of the first byte.

The encoder only knows [`BitSink`] and the decoder only knows [`BitSource`], so the packing
(bytes, `'0'`/`'1'` text, plain `bool` vectors) is up to the caller.

Some bit hacks are appplied here, it can be helpful to understand these
Bit Operations:

number of bits  >> 3 == number of bytes
number of bits  & 7 == bit position inside of the current byte

*/

use common::HuffError;
use common::Result;
use log::trace;

pub type BitContainer = u64;
pub const BIT_CONTAINER_BYTES: usize = core::mem::size_of::<BitContainer>();
pub const NUM_BITS_IN_BIT_CONTAINER: u32 = BIT_CONTAINER_BYTES as u32 * 8;

/// max number of bits accepted by a single `add_bits` call
pub const MAX_ADD_BITS: u32 = 32;

/// Receives bits in emission order.
pub trait BitSink {
    fn put_bit(&mut self, bit: bool);

    fn put_bits(&mut self, bits: &[bool]) {
        for bit in bits {
            self.put_bit(*bit);
        }
    }
}

/// Pull based source of bits. `None` signals the end of the input and is never a bit value.
///
/// A source is a single-use cursor, consumed bits can not be read again.
pub trait BitSource {
    fn next_bit(&mut self) -> Option<bool>;
}

impl<S: BitSink + ?Sized> BitSink for &mut S {
    #[inline]
    fn put_bit(&mut self, bit: bool) {
        (**self).put_bit(bit)
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    #[inline]
    fn next_bit(&mut self) -> Option<bool> {
        (**self).next_bit()
    }
}

/// Packs bits MSB first into bytes. The last byte is padded with zeros.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bit_container: BitContainer,
    /// number of bits in `bit_container` not yet flushed to `data`
    bit_pos: u32,
    data: Vec<u8>,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter::default()
    }

    pub fn with_capacity(num_bytes: usize) -> Self {
        BitWriter {
            data: Vec::with_capacity(num_bytes),
            ..Default::default()
        }
    }

    /// adds the lowest `nb_bits` of value, most significant first
    #[inline]
    pub fn add_bits(&mut self, value: u32, nb_bits: u32) {
        debug_assert!(nb_bits <= MAX_ADD_BITS);
        if self.bit_pos + nb_bits > NUM_BITS_IN_BIT_CONTAINER {
            self.flush_bits();
        }
        let mask = (1_u64 << nb_bits) - 1;
        self.bit_container = (self.bit_container << nb_bits) | (value as u64 & mask);
        self.bit_pos += nb_bits;
    }

    /// moves all complete bytes from the container to the output
    #[inline]
    pub fn flush_bits(&mut self) {
        while self.bit_pos >= 8 {
            self.bit_pos -= 8;
            self.data.push((self.bit_container >> self.bit_pos) as u8);
        }
        // keep only the residue of the current byte
        self.bit_container &= (1 << self.bit_pos) - 1;
    }

    /// total number of bits written
    pub fn num_bits(&self) -> usize {
        (self.data.len() << 3) + self.bit_pos as usize
    }

    pub fn is_empty(&self) -> bool {
        self.num_bits() == 0
    }

    pub fn finish(mut self) -> PackedBits {
        let num_bits = self.num_bits();
        self.flush_bits();
        if self.bit_pos > 0 {
            let padding = 8 - self.bit_pos;
            self.data.push((self.bit_container << padding) as u8);
        }
        trace!("finished bit stream with {} bits in {} bytes", num_bits, self.data.len());
        PackedBits {
            data: self.data,
            num_bits,
        }
    }
}

impl BitSink for BitWriter {
    #[inline]
    fn put_bit(&mut self, bit: bool) {
        self.add_bits(bit as u32, 1);
    }
}

/// Output of the [`BitWriter`], the bytes and the exact number of bits they hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBits {
    pub data: Vec<u8>,
    pub num_bits: usize,
}

impl PackedBits {
    /// reader limited to the bits actually written, the padding is not visible
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::with_bit_len(&self.data, self.num_bits)
    }

    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(self.num_bits);
        let mut reader = self.reader();
        while let Some(bit) = reader.next_bit() {
            out.put_bit(bit);
        }
        out
    }
}

/// Cursor over packed bytes, MSB first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    input: &'a [u8],
    bits_consumed: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// reads all bits of the input, including any padding in the last byte
    pub fn new(input: &'a [u8]) -> Self {
        BitReader::with_bit_len(input, input.len() << 3)
    }

    /// reads only the first `bit_len` bits, capped at the length of the input
    pub fn with_bit_len(input: &'a [u8], bit_len: usize) -> Self {
        BitReader {
            input,
            bits_consumed: 0,
            bit_len: bit_len.min(input.len() << 3),
        }
    }

    pub fn bits_consumed(&self) -> usize {
        self.bits_consumed
    }

    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bits_consumed
    }
}

impl<'a> BitSource for BitReader<'a> {
    #[inline]
    fn next_bit(&mut self) -> Option<bool> {
        if self.bits_consumed >= self.bit_len {
            return None;
        }
        let byte = self.input[self.bits_consumed >> 3];
        let bit = (byte >> (7 - (self.bits_consumed & 7))) & 1;
        self.bits_consumed += 1;
        Some(bit == 1)
    }
}

/// Bits as `'0'`/`'1'` text, handy to look at encoded data.
impl BitSink for String {
    #[inline]
    fn put_bit(&mut self, bit: bool) {
        self.push(if bit { '1' } else { '0' });
    }
}

impl BitSink for Vec<bool> {
    #[inline]
    fn put_bit(&mut self, bit: bool) {
        self.push(bit);
    }
}

/// Source over `'0'`/`'1'` text.
#[derive(Debug, Clone)]
pub struct BitStrReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> BitStrReader<'a> {
    /// fails on the first character which is not `'0'` or `'1'`
    pub fn new(input: &'a str) -> Result<Self> {
        if let Some((pos, ch)) = input.chars().enumerate().find(|(_, ch)| *ch != '0' && *ch != '1') {
            return Err(HuffError::InvalidBitChar { pos, ch });
        }
        Ok(BitStrReader {
            input: input.as_bytes(),
            pos: 0,
        })
    }

    pub fn bits_consumed(&self) -> usize {
        self.pos
    }
}

impl<'a> BitSource for BitStrReader<'a> {
    #[inline]
    fn next_bit(&mut self) -> Option<bool> {
        let bit = *self.input.get(self.pos)? == b'1';
        self.pos += 1;
        Some(bit)
    }
}

/// Source over a slice of bools.
#[derive(Debug, Clone)]
pub struct BitSliceReader<'a> {
    input: &'a [bool],
    pos: usize,
}

impl<'a> BitSliceReader<'a> {
    pub fn new(input: &'a [bool]) -> Self {
        BitSliceReader { input, pos: 0 }
    }

    pub fn bits_consumed(&self) -> usize {
        self.pos
    }
}

impl<'a> BitSource for BitSliceReader<'a> {
    #[inline]
    fn next_bit(&mut self) -> Option<bool> {
        let bit = *self.input.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }
}
