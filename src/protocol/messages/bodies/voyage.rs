//! Static and voyage data: type 5, extended Class B report (19) and the two
//! parts of the type 24 static data report.
use std::fmt;

use super::{flag, float, label, text, unsigned, Dimensions, DIMENSION_IDS};
use crate::core::{AisValue, MessageDescriptor};
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::engine::{
    read_coordinate, read_flag, read_scaled, read_text, read_unsigned,
};
use crate::infra::codec::traits::{FieldAccess, FromBits};
use crate::protocol::lookups::{epfd, ship_type, EpfdFixType, ShipType};
use crate::protocol::messages::layouts::{
    class_b_extended, header, static_data_a, static_data_b, static_voyage, PART_NUMBER,
};
use crate::protocol::mmsi::{Mmsi, MmsiClass};

//==================================================================================STATIC_VOYAGE
/// Estimated time of arrival, UTC. The year is not transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Eta {
    /// 1..=12, 0 = not available.
    pub month: u8,
    /// 1..=31, 0 = not available.
    pub day: u8,
    /// 0..=23, 24 = not available.
    pub hour: u8,
    /// 0..=59, 60 = not available.
    pub minute: u8,
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}T{:02}:{:02}Z",
            self.month, self.day, self.hour, self.minute
        )
    }
}

/// Type 5: static and voyage related data (two fragments on the air).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticVoyageData {
    pub ais_version: u8,
    pub imo: u32,
    pub callsign: String,
    pub shipname: String,
    pub shiptype: ShipType,
    pub dimensions: Dimensions,
    pub epfd: EpfdFixType,
    pub eta: Eta,
    /// Meters.
    pub draught: f64,
    pub destination: String,
    /// Data terminal ready (`false` = available).
    pub dte: bool,
}

impl FromBits for StaticVoyageData {
    const DESCRIPTOR: &'static MessageDescriptor = &static_voyage::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use static_voyage::*;
        Self {
            ais_version: read_unsigned(reader, &AIS_VERSION) as u8,
            imo: read_unsigned(reader, &IMO),
            callsign: read_text(reader, &CALLSIGN),
            shipname: read_text(reader, &SHIPNAME),
            shiptype: ship_type(read_unsigned(reader, &SHIPTYPE)),
            dimensions: Dimensions::read(reader, [&TO_BOW, &TO_STERN, &TO_PORT, &TO_STARBOARD]),
            epfd: epfd(read_unsigned(reader, &EPFD)),
            eta: Eta {
                month: read_unsigned(reader, &MONTH) as u8,
                day: read_unsigned(reader, &DAY) as u8,
                hour: read_unsigned(reader, &HOUR) as u8,
                minute: read_unsigned(reader, &MINUTE) as u8,
            },
            draught: read_scaled(reader, &DRAUGHT),
            destination: read_text(reader, &DESTINATION),
            dte: read_flag(reader, &DTE),
        }
    }
}

impl FieldAccess for StaticVoyageData {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "ais_version", "imo", "callsign", "shipname", "shiptype", "shiptype_text", "to_bow",
            "to_stern", "to_port", "to_starboard", "epfd", "epfd_text", "month", "day", "hour",
            "minute", "eta", "draught", "destination", "dte",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "ais_version" => unsigned(self.ais_version),
            "imo" => unsigned(self.imo),
            "callsign" => text(&self.callsign),
            "shipname" => text(&self.shipname),
            "shiptype" => unsigned(u8::from(self.shiptype)),
            "shiptype_text" => label(self.shiptype.label()),
            "epfd" => unsigned(u8::from(self.epfd)),
            "epfd_text" => label(self.epfd.label()),
            "month" => unsigned(self.eta.month),
            "day" => unsigned(self.eta.day),
            "hour" => unsigned(self.eta.hour),
            "minute" => unsigned(self.eta.minute),
            "eta" => text(&self.eta.to_string()),
            "draught" => float(self.draught),
            "destination" => text(&self.destination),
            "dte" => flag(self.dte),
            id if DIMENSION_IDS.contains(&id) => self.dimensions.field(id),
            _ => None,
        }
    }
}

//==================================================================================CLASS_B_EXTENDED
/// Type 19: extended Class B position report, position plus static data.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBExtendedReport {
    pub speed: f64,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    pub course: f64,
    pub heading: u16,
    pub second: u8,
    pub regional: u8,
    pub shipname: String,
    pub shiptype: ShipType,
    pub dimensions: Dimensions,
    pub epfd: EpfdFixType,
    pub raim: bool,
    pub dte: bool,
    pub assigned: bool,
}

impl FromBits for ClassBExtendedReport {
    const DESCRIPTOR: &'static MessageDescriptor = &class_b_extended::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use class_b_extended::*;
        Self {
            speed: read_scaled(reader, &SPEED),
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            course: read_scaled(reader, &COURSE),
            heading: read_unsigned(reader, &HEADING) as u16,
            second: read_unsigned(reader, &SECOND) as u8,
            regional: read_unsigned(reader, &REGIONAL) as u8,
            shipname: read_text(reader, &SHIPNAME),
            shiptype: ship_type(read_unsigned(reader, &SHIPTYPE)),
            dimensions: Dimensions::read(reader, [&TO_BOW, &TO_STERN, &TO_PORT, &TO_STARBOARD]),
            epfd: epfd(read_unsigned(reader, &EPFD)),
            raim: read_flag(reader, &RAIM),
            dte: read_flag(reader, &DTE),
            assigned: read_flag(reader, &ASSIGNED),
        }
    }
}

impl FieldAccess for ClassBExtendedReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "speed", "accuracy", "lon", "lat", "course", "heading", "second", "regional",
            "shipname", "shiptype", "shiptype_text", "to_bow", "to_stern", "to_port",
            "to_starboard", "epfd", "epfd_text", "raim", "dte", "assigned",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "speed" => float(self.speed),
            "accuracy" => flag(self.accuracy),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "course" => float(self.course),
            "heading" => unsigned(self.heading),
            "second" => unsigned(self.second),
            "regional" => unsigned(self.regional),
            "shipname" => text(&self.shipname),
            "shiptype" => unsigned(u8::from(self.shiptype)),
            "shiptype_text" => label(self.shiptype.label()),
            "epfd" => unsigned(u8::from(self.epfd)),
            "epfd_text" => label(self.epfd.label()),
            "raim" => flag(self.raim),
            "dte" => flag(self.dte),
            "assigned" => flag(self.assigned),
            id if DIMENSION_IDS.contains(&id) => self.dimensions.field(id),
            _ => None,
        }
    }
}

//==================================================================================STATIC_DATA_REPORT
/// Type 24 part A: vessel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDataReportA {
    pub shipname: String,
}

impl FromBits for StaticDataReportA {
    const DESCRIPTOR: &'static MessageDescriptor = &static_data_a::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        Self {
            shipname: read_text(reader, &static_data_a::SHIPNAME),
        }
    }
}

impl FieldAccess for StaticDataReportA {
    fn field_ids(&self) -> &'static [&'static str] {
        &["partno", "shipname"]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "partno" => unsigned(0u8),
            "shipname" => text(&self.shipname),
            _ => None,
        }
    }
}

/// Type 24 part B: ship type, equipment vendor, call sign and either the
/// dimensions or, for auxiliary craft, the parent ship MMSI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDataReportB {
    /// Raw part number, any nonzero value.
    pub partno: u8,
    pub shiptype: ShipType,
    /// Three-character manufacturer mnemonic.
    pub vendorid: String,
    pub model: u8,
    pub serial: u32,
    pub callsign: String,
    /// Absent when the sender is an auxiliary craft.
    pub dimensions: Option<Dimensions>,
    /// Present only when the sender is an auxiliary craft.
    pub mothership_mmsi: Option<Mmsi>,
}

impl FromBits for StaticDataReportB {
    const DESCRIPTOR: &'static MessageDescriptor = &static_data_b::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use static_data_b::*;
        let sender = Mmsi(read_unsigned(reader, &header::MMSI));
        let (dimensions, mothership_mmsi) = if sender.class() == MmsiClass::AuxiliaryCraft {
            (None, Some(Mmsi(read_unsigned(reader, &MOTHERSHIP_MMSI))))
        } else {
            let fields = [&TO_BOW, &TO_STERN, &TO_PORT, &TO_STARBOARD];
            (Some(Dimensions::read(reader, fields)), None)
        };
        Self {
            partno: read_unsigned(reader, &PART_NUMBER) as u8,
            shiptype: ship_type(read_unsigned(reader, &SHIPTYPE)),
            vendorid: read_text(reader, &VENDOR_ID),
            model: read_unsigned(reader, &MODEL) as u8,
            serial: read_unsigned(reader, &SERIAL),
            callsign: read_text(reader, &CALLSIGN),
            dimensions,
            mothership_mmsi,
        }
    }
}

impl FieldAccess for StaticDataReportB {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "partno", "shiptype", "shiptype_text", "vendorid", "model", "serial", "callsign",
            "to_bow", "to_stern", "to_port", "to_starboard", "mothership_mmsi",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "partno" => unsigned(self.partno),
            "shiptype" => unsigned(u8::from(self.shiptype)),
            "shiptype_text" => label(self.shiptype.label()),
            "vendorid" => text(&self.vendorid),
            "model" => unsigned(self.model),
            "serial" => unsigned(self.serial),
            "callsign" => text(&self.callsign),
            "mothership_mmsi" => self.mothership_mmsi.map(AisValue::Mmsi),
            id if DIMENSION_IDS.contains(&id) => self.dimensions.and_then(|d| d.field(id)),
            _ => None,
        }
    }
}
