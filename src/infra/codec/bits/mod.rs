//! Low-level components dedicated to bit manipulation for AIS payloads.
//! AIS packs fields most-significant bit first with no byte alignment, so the
//! sequence is stored as packed bytes and read bit by bit.
use std::fmt;

/// Flat, ordered sequence of bits built from six-bit payload characters.
///
/// Bits are only ever appended six at a time, so the length is always a
/// multiple of 6. Once a message is complete the sequence is handed out
/// read-only through [`BitReader`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    /// Packed storage, most significant bit of each byte first.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitSequence {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty sequence sized for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low six bits of `sextet`, most significant first.
    pub(crate) fn push_sextet(&mut self, sextet: u8) {
        for shift in (0..6).rev() {
            self.push_bit((sextet >> shift) & 1 == 1);
        }
    }

    fn push_bit(&mut self, bit: bool) {
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            // `bytes` is never empty here: a byte was pushed on the first bit.
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> bit_offset;
            }
        }
        self.len += 1;
    }

    /// Bit at `index`, `None` past the end.
    #[inline]
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Read-only field extractor over this sequence.
    #[inline]
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(self)
    }
}

impl fmt::Display for BitSequence {
    /// Renders the sequence as a string of `0`/`1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len {
            let bit = self.bit(index) == Some(true);
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

//==================================================================================BITREADER

/// Random-access field reader over a [`BitSequence`].
///
/// Reads never fail. A field running past the end of the sequence yields the
/// value of the bits that are present (an empty field reads as 0), which keeps
/// truncated payloads from noisy feeds decodable.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    bits: &'a BitSequence,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `bits`.
    pub fn new(bits: &'a BitSequence) -> Self {
        Self { bits }
    }

    /// Total number of bits available.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Checks whether there is nothing to read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits of `[start, start + length)` actually present.
    #[inline]
    pub fn available(&self, start: usize, length: usize) -> usize {
        start
            .saturating_add(length)
            .min(self.bits.len())
            .saturating_sub(start)
    }

    /// Interpret `[start, start + length)` as an unsigned big-endian integer.
    ///
    /// Fields wider than 64 bits keep only their 64 least significant bits.
    pub fn unsigned(&self, start: usize, length: usize) -> u64 {
        let width = self.available(start, length);
        let mut value: u64 = 0;
        for index in start..start + width {
            let bit = self.bits.bit(index) == Some(true);
            value = (value << 1) | u64::from(bit);
        }
        value
    }

    /// Interpret `[start, start + length)` as a two's-complement integer.
    ///
    /// The sign bit is the most significant bit actually present, so a
    /// truncated field is interpreted on its remaining width.
    pub fn signed(&self, start: usize, length: usize) -> i64 {
        let width = self.available(start, length).min(64);
        if width == 0 {
            return 0;
        }
        let raw = self.unsigned(start, length);
        if (raw >> (width - 1)) & 1 == 1 {
            (i128::from(raw) - (1i128 << width)) as i64
        } else {
            raw as i64
        }
    }

    /// Single bit at `index`, `false` past the end.
    #[inline]
    pub fn flag(&self, index: usize) -> bool {
        self.bits.bit(index) == Some(true)
    }
}
