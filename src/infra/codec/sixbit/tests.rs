//! Six-bit text decoding tests.
use super::*;
use crate::infra::codec::bits::BitSequence;

/// Pack ASCII text using the six-bit alphabet.
fn packed(text: &str) -> BitSequence {
    let mut bits = BitSequence::new();
    for c in text.bytes() {
        let value = SIXBIT_ALPHABET
            .iter()
            .position(|a| *a == c)
            .expect("character outside the six-bit alphabet");
        bits.push_sextet(value as u8);
    }
    bits
}

#[test]
fn test_decode_plain_text() {
    let bits = packed("EVER DIADEM");
    assert_eq!(decode_text(&bits.reader(), 0, 66), "EVER DIADEM");
}

#[test]
/// Trailing padding and spaces are removed.
fn test_padding_and_spaces_stripped() {
    let bits = packed("  3FOF8@@@@");
    assert_eq!(decode_text(&bits.reader(), 0, 66), "3FOF8");
}

#[test]
/// Embedded padding characters are dropped too.
fn test_embedded_padding_removed() {
    let bits = packed("NEW@YORK");
    assert_eq!(decode_text(&bits.reader(), 0, 48), "NEWYORK");
}

#[test]
/// An all-padding field is empty, not a run of `@`.
fn test_all_padding_is_empty() {
    let bits = packed("@@@@@@@@@@@@@@@@@@@@");
    assert_eq!(decode_text(&bits.reader(), 0, 120), "");
}

#[test]
/// Fields running past the sequence keep their whole groups only.
fn test_truncated_field() {
    let bits = packed("AB");
    let reader = bits.reader();
    assert_eq!(decode_text(&reader, 0, 120), "AB");
    // 9 bits left: one whole group, bits 3..9 = "001000" -> 'H'.
    assert_eq!(decode_text(&reader, 3, 120), "H");
    // 5 bits left: no whole group.
    assert_eq!(decode_text(&reader, 7, 120), "");
    assert_eq!(decode_text(&reader, 12, 120), "");
}

#[test]
/// Offset fields are decoded from their own bit position.
fn test_unaligned_offset() {
    let mut bits = BitSequence::new();
    bits.push_sextet(0b000000);
    bits.push_sextet(0b100000); // bits 6..12
    let reader = bits.reader();
    // Bits 2..8 = "000010" -> 'B'
    assert_eq!(decode_text(&reader, 2, 6), "B");
}
