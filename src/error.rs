//! Error definitions shared across library modules.
//! Each type models a specific rejection scenario (sentence envelope, message
//! dispatch). None of them is raised on noisy payload bits: field extraction
//! degrades to best-effort values instead.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while splitting a line into an AIVDM/AIVDO sentence.
pub enum SentenceError {
    /// The line does not contain the `!AIVD` marker.
    #[error("Not an AIS sentence: missing !AIVD marker")]
    MissingMarker,
    /// The sentence stops before a mandatory field.
    #[error("Missing sentence field: {field}")]
    MissingField { field: &'static str },
    /// A numeric field could not be parsed.
    #[error("Invalid sentence field: {field}")]
    InvalidField { field: &'static str },
    /// Fragment index/count pair is not usable (zero count, index beyond count).
    #[error("Invalid fragment {index} of {count}")]
    InvalidFragment { index: u8, count: u8 },
    /// Checksum validation was requested but the sentence carries none.
    #[error("Missing checksum")]
    MissingChecksum,
    /// Checksum does not match the sentence body.
    #[error("Checksum mismatch -> expected: {expected:#04X}, computed: {computed:#04X}")]
    ChecksumMismatch { expected: u8, computed: u8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while turning a sentence or a bit sequence into a message.
pub enum DecodeError {
    /// Message type code outside the supported set.
    #[error("Unsupported AIS message type {message_type}")]
    UnsupportedMessageType { message_type: u8 },
    /// The sentence envelope was rejected.
    #[error(transparent)]
    Sentence(#[from] SentenceError),
}
