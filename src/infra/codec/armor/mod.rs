//! AIVDM payload armoring: each printable character carries six bits.
//!
//! Characters `0`..`W` map to 0..39 and `` ` ``..`w` map to 40..63; the eight
//! characters in between are not part of the alphabet. De-armoring never
//! fails: characters outside the alphabet simply produce meaningless bits.
use super::bits::BitSequence;

/// Six-bit value carried by one armored payload character.
#[inline]
pub const fn sextet(c: u8) -> u8 {
    let mut value = c.wrapping_sub(48);
    if value > 40 {
        value = value.wrapping_sub(8);
    }
    value & 0x3F
}

/// Armored character for a six-bit value (inverse of [`sextet`]).
#[inline]
pub const fn armor_char(sextet: u8) -> char {
    let value = sextet & 0x3F;
    if value < 40 {
        (value + 48) as char
    } else {
        (value + 56) as char
    }
}

/// Decode one fragment payload into a fresh bit sequence.
pub fn dearmor(payload: &str) -> BitSequence {
    let mut bits = BitSequence::with_capacity(payload.len() * 6);
    extend_dearmored(&mut bits, payload);
    bits
}

/// Append the bits of `payload` to `bits`, left to right.
pub fn extend_dearmored(bits: &mut BitSequence, payload: &str) {
    for c in payload.bytes() {
        bits.push_sextet(sextet(c));
    }
}
