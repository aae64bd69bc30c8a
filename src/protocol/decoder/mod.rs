//! AIS decoding engine: one line in, one outcome out.
//!
//! ```text
//! line ─► RawSentence::parse ─► (checksum) ─► FragmentAssembler ─► decode_payload ─► AisMessage
//! ```
//!
//! Every rejection is a [`DecodeResult`] variant; nothing on this path panics
//! on malformed input. One decoder holds the reassembly state of one feed and
//! must be owned by one task at a time.
use embassy_time::{Duration, Instant};

use crate::error::{DecodeError, SentenceError};
use crate::protocol::messages::AisMessage;
use crate::protocol::sentence::RawSentence;
use crate::protocol::transport::assembler::{
    CompletedMessage, FragmentAssembler, ProcessResult, DEFAULT_MAX_PENDING_MESSAGES,
};

//==================================================================================CONFIG
/// Decoder configuration, fixed for the lifetime of an [`AisDecoder`].
///
/// ```rust
/// use embassy_time::Duration;
/// use korri_ais::protocol::decoder::DecoderConfig;
///
/// let config = DecoderConfig::new()
///     .include_raw(false)
///     .validate_checksum(true)
///     .max_fragment_age(Some(Duration::from_secs(30)));
/// assert!(!config.raw_included());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    include_raw: bool,
    include_nationality: bool,
    validate_checksum: bool,
    max_pending_messages: usize,
    max_fragment_age: Option<Duration>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            include_raw: true,
            include_nationality: true,
            validate_checksum: false,
            max_pending_messages: DEFAULT_MAX_PENDING_MESSAGES,
            max_fragment_age: None,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the original line(s) in [`AisMessage::raw`].
    pub fn include_raw(mut self, include: bool) -> Self {
        self.include_raw = include;
        self
    }

    /// Fill [`AisMessage::nationality`] from the MID table.
    pub fn include_nationality(mut self, include: bool) -> Self {
        self.include_nationality = include;
        self
    }

    /// Reject sentences whose checksum is missing or wrong.
    pub fn validate_checksum(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Number of multi-fragment messages reassembled in parallel.
    pub fn max_pending_messages(mut self, max: usize) -> Self {
        self.max_pending_messages = max;
        self
    }

    /// Evict incomplete messages older than this, when decoding with a clock.
    pub fn max_fragment_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_fragment_age = max_age;
        self
    }

    pub fn raw_included(&self) -> bool {
        self.include_raw
    }

    pub fn nationality_included(&self) -> bool {
        self.include_nationality
    }

    pub fn checksum_validated(&self) -> bool {
        self.validate_checksum
    }

    pub fn pending_limit(&self) -> usize {
        self.max_pending_messages
    }

    pub fn fragment_age_limit(&self) -> Option<Duration> {
        self.max_fragment_age
    }
}

//==================================================================================RESULT
/// Outcome of decoding one line.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeResult {
    /// No `!AIVD` marker in the line.
    NotAis,
    /// Malformed envelope or failed checksum.
    Rejected(SentenceError),
    /// Fragment stored, the message needs more fragments.
    Pending,
    /// Fragment dropped by the assembler (unknown sequence, duplicate).
    Ignored,
    /// Complete message of a type this decoder does not model.
    Unsupported { message_type: u8 },
    Decoded(AisMessage),
}

impl DecodeResult {
    pub fn message(&self) -> Option<&AisMessage> {
        match self {
            DecodeResult::Decoded(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<AisMessage> {
        match self {
            DecodeResult::Decoded(message) => Some(message),
            _ => None,
        }
    }

    #[inline]
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeResult::Decoded(_))
    }

    /// `Ok(None)` for "no data yet" outcomes, `Err` for rejections.
    pub fn into_result(self) -> Result<Option<AisMessage>, DecodeError> {
        match self {
            DecodeResult::Decoded(message) => Ok(Some(message)),
            DecodeResult::Pending | DecodeResult::Ignored => Ok(None),
            DecodeResult::NotAis => Err(SentenceError::MissingMarker.into()),
            DecodeResult::Rejected(error) => Err(error.into()),
            DecodeResult::Unsupported { message_type } => {
                Err(DecodeError::UnsupportedMessageType { message_type })
            }
        }
    }
}

//==================================================================================DECODER
/// Stateful AIS decoder for one feed.
#[derive(Debug, Clone)]
pub struct AisDecoder {
    config: DecoderConfig,
    assembler: FragmentAssembler,
}

impl Default for AisDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl AisDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            assembler: FragmentAssembler::with_limits(
                config.max_pending_messages,
                config.max_fragment_age,
            ),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Number of multi-fragment messages awaiting fragments.
    pub fn pending(&self) -> usize {
        self.assembler.pending()
    }

    /// Decode one line. Only the capacity bound applies to pending messages.
    pub fn decode(&mut self, line: &str) -> DecodeResult {
        self.decode_line(line, None)
    }

    /// Decode one line received at `now`, evicting pending messages older
    /// than the configured age first.
    pub fn decode_at(&mut self, line: &str, now: Instant) -> DecodeResult {
        self.decode_line(line, Some(now))
    }

    /// Evict pending messages older than the configured age.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        self.assembler.purge_expired(now)
    }

    fn decode_line(&mut self, line: &str, now: Option<Instant>) -> DecodeResult {
        let sentence = match RawSentence::parse(line) {
            Ok(sentence) => sentence,
            Err(SentenceError::MissingMarker) => return DecodeResult::NotAis,
            Err(error) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("AIS: sentence rejected: {}", error);
                return DecodeResult::Rejected(error);
            }
        };

        if self.config.validate_checksum {
            if let Err(error) = sentence.validate_checksum() {
                #[cfg(feature = "defmt")]
                defmt::debug!("AIS: sentence rejected: {}", error);
                return DecodeResult::Rejected(error);
            }
        }

        match self.assembler.process(&sentence, now) {
            ProcessResult::Ignored => DecodeResult::Ignored,
            ProcessResult::FragmentConsumed => DecodeResult::Pending,
            ProcessResult::MessageComplete(completed) => self.finish(&sentence, completed),
        }
    }

    /// Decode a complete message and attach the sentence metadata.
    fn finish(&self, last: &RawSentence, completed: CompletedMessage) -> DecodeResult {
        let mut message = match AisMessage::from_bits(&completed.bits) {
            Ok(message) => message,
            Err(DecodeError::UnsupportedMessageType { message_type }) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("AIS: unsupported message type {}", message_type);
                return DecodeResult::Unsupported { message_type };
            }
            Err(DecodeError::Sentence(error)) => return DecodeResult::Rejected(error),
        };

        message.sequence_id = completed.sequence_id;
        message.channel = completed.channel;
        message.fragment_count = completed.fragment_count;
        message.fragment_number = last.fragment_number;
        message.own_ship = last.own_ship;
        if self.config.include_raw {
            message.raw = Some(completed.raw);
        }
        if !self.config.include_nationality {
            message.nationality = None;
        }

        DecodeResult::Decoded(message)
    }
}
