//! Typed message bodies, one struct per supported layout.
//!
//! Bodies only carry the type-specific fields; the header (type, repeat,
//! MMSI) and the sentence metadata live in [`AisMessage`](super::AisMessage).
use crate::core::{AisValue, FieldDescriptor};
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::engine::read_unsigned;

pub mod position;
pub mod station;
pub mod voyage;

pub use position::{ClassBPositionReport, LongRangeReport, PositionReport, SarAircraftReport};
pub use station::{AidToNavigationReport, BaseStationReport, UtcTimestamp};
pub use voyage::{ClassBExtendedReport, Eta, StaticDataReportA, StaticDataReportB, StaticVoyageData};

/// Field ids exposed by [`Dimensions::field`].
pub(crate) const DIMENSION_IDS: [&str; 4] = ["to_bow", "to_stern", "to_port", "to_starboard"];

/// Distances in meters from the position reference point to the hull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

impl Dimensions {
    /// Read the four dimension fields of a layout.
    pub(crate) fn read(reader: &BitReader<'_>, fields: [&FieldDescriptor; 4]) -> Self {
        let [bow, stern, port, starboard] = fields;
        Self {
            to_bow: read_unsigned(reader, bow) as u16,
            to_stern: read_unsigned(reader, stern) as u16,
            to_port: read_unsigned(reader, port) as u8,
            to_starboard: read_unsigned(reader, starboard) as u8,
        }
    }

    /// Overall length and beam in meters.
    pub fn size(&self) -> (u16, u16) {
        (
            self.to_bow + self.to_stern,
            u16::from(self.to_port) + u16::from(self.to_starboard),
        )
    }

    pub(crate) fn field(&self, id: &str) -> Option<AisValue> {
        let value = match id {
            "to_bow" => u32::from(self.to_bow),
            "to_stern" => u32::from(self.to_stern),
            "to_port" => u32::from(self.to_port),
            "to_starboard" => u32::from(self.to_starboard),
            _ => return None,
        };
        Some(AisValue::Unsigned(value))
    }
}

#[inline]
pub(crate) fn unsigned(value: impl Into<u32>) -> Option<AisValue> {
    Some(AisValue::Unsigned(value.into()))
}

#[inline]
pub(crate) fn float(value: f64) -> Option<AisValue> {
    Some(AisValue::Float(value))
}

#[inline]
pub(crate) fn flag(value: bool) -> Option<AisValue> {
    Some(AisValue::Flag(value))
}

#[inline]
pub(crate) fn text(value: &str) -> Option<AisValue> {
    Some(AisValue::Text(value.to_string()))
}

#[inline]
pub(crate) fn label(value: &'static str) -> Option<AisValue> {
    Some(AisValue::Label(value))
}
