//! AIVDM/AIVDO sentence envelope.
//!
//! ```text
//! !AIVDM,2,1,4,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*19
//! │      │ │ │ │ │                                                            │ └ checksum
//! │      │ │ │ │ └ armored payload                                            └ fill bits
//! │      │ │ │ └ radio channel
//! │      │ │ └ sequence id (empty for single-fragment messages)
//! │      │ └ fragment number (1-based)
//! │      └ fragment count
//! └ tag: VDM = received, VDO = own ship
//! ```
use crate::error::SentenceError;

/// Sentence marker searched anywhere in the line.
pub const SENTENCE_MARKER: &str = "!AIVD";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One parsed input line. Immutable once parsed.
pub struct RawSentence {
    /// `!AIVDO`: report from the receiver's own vessel.
    pub own_ship: bool,
    pub fragment_count: u8,
    /// 1-based index of this fragment.
    pub fragment_number: u8,
    /// Multi-fragment sequence id, `None` when the field is empty.
    pub sequence_id: Option<u8>,
    /// Radio channel (`A`, `B`, sometimes `1`/`2`), `None` when empty.
    pub channel: Option<char>,
    /// ASCII-armored six-bit payload.
    pub payload: String,
    /// Fill bits announced by the sender. Informational only.
    pub fill_bits: Option<u8>,
    /// Checksum announced after `*`, if any.
    pub checksum: Option<u8>,
    /// The original line, unmodified.
    pub line: String,
}

impl RawSentence {
    /// Split a line into its sentence fields.
    ///
    /// The sentence may start anywhere in the line (tag blocks and receiver
    /// prefixes are skipped). The checksum is parsed but not verified; see
    /// [`RawSentence::validate_checksum`].
    pub fn parse(line: &str) -> Result<Self, SentenceError> {
        let start = line.find(SENTENCE_MARKER).ok_or(SentenceError::MissingMarker)?;
        let sentence = line[start..].trim_end();

        let (body, checksum) = match sentence.split_once('*') {
            Some((body, tail)) => (body, parse_checksum(tail)),
            None => (sentence, None),
        };

        let mut fields = body.split(',');
        let tag = next_field(&mut fields, "tag")?;
        let fragment_count = parse_u8(next_field(&mut fields, "fragment_count")?, "fragment_count")?;
        let fragment_number =
            parse_u8(next_field(&mut fields, "fragment_number")?, "fragment_number")?;
        let sequence_id = match next_field(&mut fields, "sequence_id")? {
            "" => None,
            value => Some(parse_u8(value, "sequence_id")?),
        };
        let channel = next_field(&mut fields, "channel")?.chars().next();
        let payload = next_field(&mut fields, "payload")?;
        let fill_bits = fields.next().and_then(|value| value.trim().parse().ok());

        if fragment_count == 0 || fragment_number == 0 || fragment_number > fragment_count {
            return Err(SentenceError::InvalidFragment {
                index: fragment_number,
                count: fragment_count,
            });
        }

        Ok(Self {
            own_ship: tag.ends_with('O'),
            fragment_count,
            fragment_number,
            sequence_id,
            channel,
            payload: payload.to_string(),
            fill_bits,
            checksum,
            line: line.to_string(),
        })
    }

    /// Whether this sentence carries a whole message on its own.
    #[inline]
    pub fn is_single_fragment(&self) -> bool {
        self.fragment_count == 1
    }

    /// Checksum computed over the sentence body.
    pub fn computed_checksum(&self) -> u8 {
        let body = self
            .line
            .find(SENTENCE_MARKER)
            .map(|start| &self.line[start + 1..])
            .unwrap_or_default();
        let body = body.split('*').next().unwrap_or_default().trim_end();
        checksum(body)
    }

    /// Verify the announced checksum against the sentence body.
    pub fn validate_checksum(&self) -> Result<(), SentenceError> {
        let expected = self.checksum.ok_or(SentenceError::MissingChecksum)?;
        let computed = self.computed_checksum();
        if expected != computed {
            return Err(SentenceError::ChecksumMismatch { expected, computed });
        }
        Ok(())
    }
}

/// NMEA checksum: XOR of every byte between `!` and `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, byte| acc ^ byte)
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, SentenceError> {
    fields.next().ok_or(SentenceError::MissingField { field })
}

fn parse_u8(value: &str, field: &'static str) -> Result<u8, SentenceError> {
    value
        .trim()
        .parse()
        .map_err(|_| SentenceError::InvalidField { field })
}

fn parse_checksum(tail: &str) -> Option<u8> {
    let digits = tail.get(..2)?;
    u8::from_str_radix(digits, 16).ok()
}
