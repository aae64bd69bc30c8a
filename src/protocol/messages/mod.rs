//! AIS message model and dispatcher.
//!
//! [`decode_payload`] reads the message type code of a complete bit sequence
//! and routes it to the body of that layout. [`AisMessage`] wraps the body with
//! the header and the sentence metadata; its `Display` implementation is the
//! serialized text form (`key=value` pairs).
use std::fmt;

use crate::core::{AisValue, MessageDescriptor};
use crate::error::DecodeError;
use crate::infra::codec::bits::BitSequence;
use crate::infra::codec::engine::read_unsigned;
use crate::infra::codec::traits::{FieldAccess, FromBits};
use crate::protocol::mmsi::{Mid, Mmsi};

pub mod bodies;
pub mod layouts;

pub use bodies::*;
use layouts::{header, PART_NUMBER};

/// Message type codes the dispatcher decodes.
pub const SUPPORTED_TYPES: [u8; 11] = [1, 2, 3, 4, 5, 9, 18, 19, 21, 24, 27];

/// Envelope fields, in output order.
const HEADER_IDS: [&str; 10] = [
    "type",
    "repeat",
    "mmsi",
    "mid",
    "nationality",
    "sequence_id",
    "channel",
    "fragment_count",
    "fragment_number",
    "own_ship",
];

//==================================================================================MESSAGE_BODY
/// Decoded body, one variant per supported layout.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// Types 1, 2, 3.
    Position(PositionReport),
    /// Type 4.
    BaseStation(BaseStationReport),
    /// Type 5.
    StaticVoyage(StaticVoyageData),
    /// Type 9.
    SarAircraft(SarAircraftReport),
    /// Type 18.
    ClassBPosition(ClassBPositionReport),
    /// Type 19.
    ClassBExtended(ClassBExtendedReport),
    /// Type 21.
    AidToNavigation(AidToNavigationReport),
    /// Type 24, part A.
    StaticDataA(StaticDataReportA),
    /// Type 24, part B.
    StaticDataB(StaticDataReportB),
    /// Type 27.
    LongRange(LongRangeReport),
}

impl MessageBody {
    /// Layout the body was extracted from.
    pub fn descriptor(&self) -> &'static MessageDescriptor {
        match self {
            MessageBody::Position(_) => PositionReport::DESCRIPTOR,
            MessageBody::BaseStation(_) => BaseStationReport::DESCRIPTOR,
            MessageBody::StaticVoyage(_) => StaticVoyageData::DESCRIPTOR,
            MessageBody::SarAircraft(_) => SarAircraftReport::DESCRIPTOR,
            MessageBody::ClassBPosition(_) => ClassBPositionReport::DESCRIPTOR,
            MessageBody::ClassBExtended(_) => ClassBExtendedReport::DESCRIPTOR,
            MessageBody::AidToNavigation(_) => AidToNavigationReport::DESCRIPTOR,
            MessageBody::StaticDataA(_) => StaticDataReportA::DESCRIPTOR,
            MessageBody::StaticDataB(_) => StaticDataReportB::DESCRIPTOR,
            MessageBody::LongRange(_) => LongRangeReport::DESCRIPTOR,
        }
    }

    fn as_field_access(&self) -> &dyn FieldAccess {
        match self {
            MessageBody::Position(body) => body,
            MessageBody::BaseStation(body) => body,
            MessageBody::StaticVoyage(body) => body,
            MessageBody::SarAircraft(body) => body,
            MessageBody::ClassBPosition(body) => body,
            MessageBody::ClassBExtended(body) => body,
            MessageBody::AidToNavigation(body) => body,
            MessageBody::StaticDataA(body) => body,
            MessageBody::StaticDataB(body) => body,
            MessageBody::LongRange(body) => body,
        }
    }
}

impl FieldAccess for MessageBody {
    fn field_ids(&self) -> &'static [&'static str] {
        self.as_field_access().field_ids()
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        self.as_field_access().field(id)
    }
}

//==================================================================================DISPATCHER
/// Message type code at offset 0.
pub fn message_type(bits: &BitSequence) -> u8 {
    read_unsigned(&bits.reader(), &header::MESSAGE_TYPE) as u8
}

/// Route a complete bit sequence to the body of its message type.
///
/// Unsupported types are rejected before any further bit is read. Short
/// payloads are not rejected: missing fields read as zero or empty text.
pub fn decode_payload(bits: &BitSequence) -> Result<MessageBody, DecodeError> {
    let reader = bits.reader();
    let body = match message_type(bits) {
        1..=3 => MessageBody::Position(PositionReport::from_bits(&reader)),
        4 => MessageBody::BaseStation(BaseStationReport::from_bits(&reader)),
        5 => MessageBody::StaticVoyage(StaticVoyageData::from_bits(&reader)),
        9 => MessageBody::SarAircraft(SarAircraftReport::from_bits(&reader)),
        18 => MessageBody::ClassBPosition(ClassBPositionReport::from_bits(&reader)),
        19 => MessageBody::ClassBExtended(ClassBExtendedReport::from_bits(&reader)),
        21 => MessageBody::AidToNavigation(AidToNavigationReport::from_bits(&reader)),
        24 if read_unsigned(&reader, &PART_NUMBER) == 0 => {
            MessageBody::StaticDataA(StaticDataReportA::from_bits(&reader))
        }
        24 => MessageBody::StaticDataB(StaticDataReportB::from_bits(&reader)),
        27 => MessageBody::LongRange(LongRangeReport::from_bits(&reader)),
        message_type => return Err(DecodeError::UnsupportedMessageType { message_type }),
    };
    Ok(body)
}

//==================================================================================AIS_MESSAGE
/// A decoded AIS message: header, sentence metadata and typed body.
///
/// Owned by the caller; the decoder keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AisMessage {
    pub message_type: u8,
    pub repeat: u8,
    pub mmsi: Mmsi,
    pub mid: Option<Mid>,
    /// Nationality from the MID, empty when unknown; `None` when disabled in
    /// the decoder configuration.
    pub nationality: Option<&'static str>,
    pub sequence_id: Option<u8>,
    pub channel: Option<char>,
    pub fragment_count: u8,
    /// Number of the fragment that completed the message.
    pub fragment_number: u8,
    /// Decoded from an `!AIVDO` sentence.
    pub own_ship: bool,
    /// Original lines, in fragment order; `None` when disabled in the
    /// decoder configuration.
    pub raw: Option<Vec<String>>,
    pub body: MessageBody,
}

impl AisMessage {
    /// Decode the header and body of a complete bit sequence.
    ///
    /// Sentence metadata is left empty (single fragment, no raw lines) for
    /// the caller to fill in.
    pub fn from_bits(bits: &BitSequence) -> Result<Self, DecodeError> {
        let body = decode_payload(bits)?;
        let reader = bits.reader();
        let mmsi = Mmsi(read_unsigned(&reader, &header::MMSI));
        Ok(Self {
            message_type: message_type(bits),
            repeat: read_unsigned(&reader, &header::REPEAT) as u8,
            mmsi,
            mid: mmsi.mid(),
            nationality: Some(mmsi.nationality()),
            sequence_id: None,
            channel: None,
            fragment_count: 1,
            fragment_number: 1,
            own_ship: false,
            raw: None,
            body,
        })
    }

    /// Look a field up by id, envelope fields included.
    pub fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "type" => Some(AisValue::Unsigned(u32::from(self.message_type))),
            "repeat" => Some(AisValue::Unsigned(u32::from(self.repeat))),
            "mmsi" => Some(AisValue::Mmsi(self.mmsi)),
            "mid" => self.mid.map(|mid| AisValue::Text(mid.to_string())),
            "nationality" => self.nationality.map(AisValue::Label),
            "sequence_id" => self.sequence_id.map(|id| AisValue::Unsigned(u32::from(id))),
            "channel" => self.channel.map(|channel| AisValue::Text(channel.to_string())),
            "fragment_count" => Some(AisValue::Unsigned(u32::from(self.fragment_count))),
            "fragment_number" => Some(AisValue::Unsigned(u32::from(self.fragment_number))),
            "own_ship" => Some(AisValue::Flag(self.own_ship)),
            "raw" => self.raw.clone().map(AisValue::Lines),
            id => self.body.field(id),
        }
    }

    /// Every present field: envelope, body, then the raw lines.
    pub fn fields(&self) -> Vec<(&'static str, AisValue)> {
        let mut fields: Vec<(&'static str, AisValue)> = HEADER_IDS
            .iter()
            .filter_map(|id| self.field(id).map(|value| (*id, value)))
            .collect();
        fields.extend(self.body.fields());
        if let Some(raw) = &self.raw {
            fields.push(("raw", AisValue::Lines(raw.clone())));
        }
        fields
    }
}

impl fmt::Display for AisMessage {
    /// `key=value` pairs separated by spaces, text values quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (id, value)) in self.fields().iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", id, value)?;
        }
        Ok(())
    }
}
