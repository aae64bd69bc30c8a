//! Fixed stations: base station report (type 4) and aid-to-navigation
//! report (type 21).
use std::fmt;

use super::{flag, float, label, text, unsigned, Dimensions, DIMENSION_IDS};
use crate::core::{AisValue, MessageDescriptor};
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::engine::{read_coordinate, read_flag, read_text, read_unsigned};
use crate::infra::codec::traits::{FieldAccess, FromBits};
use crate::protocol::lookups::{aid_type, epfd, AidType, EpfdFixType};
use crate::protocol::messages::layouts::{aid_to_navigation, base_station};

//==================================================================================BASE_STATION
/// UTC date and time broadcast by a base station. Zero fields mean "not
/// available" and are kept as sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcTimestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Type 4: base station report.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStationReport {
    pub timestamp: UtcTimestamp,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    pub epfd: EpfdFixType,
    pub raim: bool,
    pub radio: u32,
}

impl FromBits for BaseStationReport {
    const DESCRIPTOR: &'static MessageDescriptor = &base_station::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use base_station::*;
        Self {
            timestamp: UtcTimestamp {
                year: read_unsigned(reader, &YEAR) as u16,
                month: read_unsigned(reader, &MONTH) as u8,
                day: read_unsigned(reader, &DAY) as u8,
                hour: read_unsigned(reader, &HOUR) as u8,
                minute: read_unsigned(reader, &MINUTE) as u8,
                second: read_unsigned(reader, &SECOND) as u8,
            },
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            epfd: epfd(read_unsigned(reader, &EPFD)),
            raim: read_flag(reader, &RAIM),
            radio: read_unsigned(reader, &RADIO),
        }
    }
}

impl FieldAccess for BaseStationReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "year", "month", "day", "hour", "minute", "second", "timestamp", "accuracy", "lon",
            "lat", "epfd", "epfd_text", "raim", "radio",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        let timestamp = &self.timestamp;
        match id {
            "year" => unsigned(timestamp.year),
            "month" => unsigned(timestamp.month),
            "day" => unsigned(timestamp.day),
            "hour" => unsigned(timestamp.hour),
            "minute" => unsigned(timestamp.minute),
            "second" => unsigned(timestamp.second),
            "timestamp" => text(&timestamp.to_string()),
            "accuracy" => flag(self.accuracy),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "epfd" => unsigned(u8::from(self.epfd)),
            "epfd_text" => label(self.epfd.label()),
            "raim" => flag(self.raim),
            "radio" => unsigned(self.radio),
            _ => None,
        }
    }
}

//==================================================================================AID_TO_NAVIGATION
/// Type 21: aid-to-navigation report (buoys, beacons, virtual marks).
#[derive(Debug, Clone, PartialEq)]
pub struct AidToNavigationReport {
    pub aid_type: AidType,
    pub name: String,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    pub dimensions: Dimensions,
    pub epfd: EpfdFixType,
    pub second: u8,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
    /// Name continuation, empty when the payload stops at 272 bits.
    pub name_ext: String,
}

impl AidToNavigationReport {
    /// Name with its extension appended.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.name_ext)
    }
}

impl FromBits for AidToNavigationReport {
    const DESCRIPTOR: &'static MessageDescriptor = &aid_to_navigation::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use aid_to_navigation::*;
        Self {
            aid_type: aid_type(read_unsigned(reader, &AID_TYPE)),
            name: read_text(reader, &NAME),
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            dimensions: Dimensions::read(reader, [&TO_BOW, &TO_STERN, &TO_PORT, &TO_STARBOARD]),
            epfd: epfd(read_unsigned(reader, &EPFD)),
            second: read_unsigned(reader, &SECOND) as u8,
            off_position: read_flag(reader, &OFF_POSITION),
            regional: read_unsigned(reader, &REGIONAL) as u8,
            raim: read_flag(reader, &RAIM),
            virtual_aid: read_flag(reader, &VIRTUAL_AID),
            assigned: read_flag(reader, &ASSIGNED),
            name_ext: read_text(reader, &NAME_EXT),
        }
    }
}

impl FieldAccess for AidToNavigationReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "aid_type", "aid_type_text", "name", "accuracy", "lon", "lat", "to_bow", "to_stern",
            "to_port", "to_starboard", "epfd", "epfd_text", "second", "off_position", "regional",
            "raim", "virtual_aid", "assigned", "name_ext",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "aid_type" => unsigned(u8::from(self.aid_type)),
            "aid_type_text" => label(self.aid_type.label()),
            "name" => text(&self.name),
            "accuracy" => flag(self.accuracy),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "epfd" => unsigned(u8::from(self.epfd)),
            "epfd_text" => label(self.epfd.label()),
            "second" => unsigned(self.second),
            "off_position" => flag(self.off_position),
            "regional" => unsigned(self.regional),
            "raim" => flag(self.raim),
            "virtual_aid" => flag(self.virtual_aid),
            "assigned" => flag(self.assigned),
            "name_ext" => text(&self.name_ext),
            id if DIMENSION_IDS.contains(&id) => self.dimensions.field(id),
            _ => None,
        }
    }
}
