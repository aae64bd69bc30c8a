//! AIS six-bit text decoding (vessel names, call signs, destinations).
use super::bits::BitReader;

/// The 64-character AIS text alphabet, indexed by six-bit value.
pub const SIXBIT_ALPHABET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Padding character, dropped wherever it appears.
pub const PADDING: char = '@';

/// Decode the text packed in `[start, start + length)`.
///
/// Only whole six-bit groups present in the sequence are decoded. Every `@`
/// is removed and surrounding whitespace trimmed, so an all-padding field
/// decodes to an empty string.
pub fn decode_text(reader: &BitReader<'_>, start: usize, length: usize) -> String {
    let available = reader.available(start, length);
    let mut text = String::with_capacity(available / 6);

    for group in 0..available / 6 {
        let value = reader.unsigned(start + group * 6, 6) as usize;
        let c = SIXBIT_ALPHABET[value & 0x3F] as char;
        if c != PADDING {
            text.push(c);
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
