//! Position reports: Class A (types 1-3), SAR aircraft (9), Class B (18) and
//! long-range broadcast (27).
use super::{float, flag, label, unsigned};
use crate::core::{AisValue, MessageDescriptor};
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::engine::{
    read_coordinate, read_flag, read_scaled, read_signed, read_unsigned,
};
use crate::infra::codec::traits::{FieldAccess, FromBits};
use crate::protocol::lookups::{maneuver, navigation_status_text, turn_rate, ManeuverIndicator, TurnRate};
use crate::protocol::messages::layouts::{class_b_position, long_range, position_report, sar_aircraft};

//==================================================================================CLASS_A
/// Types 1, 2 and 3: scheduled, assigned and interrogated Class A reports.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    /// Raw navigation status (0..=15).
    pub status: u8,
    pub turn: TurnRate,
    /// Speed over ground, knots.
    pub speed: f64,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    /// Course over ground, degrees.
    pub course: f64,
    /// True heading, 511 when not available.
    pub heading: u16,
    /// UTC second of the fix.
    pub second: u8,
    pub maneuver: ManeuverIndicator,
    pub raim: bool,
    pub radio: u32,
}

impl PositionReport {
    pub fn status_text(&self) -> Option<&'static str> {
        navigation_status_text(u32::from(self.status))
    }
}

impl FromBits for PositionReport {
    const DESCRIPTOR: &'static MessageDescriptor = &position_report::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use position_report::*;
        Self {
            status: read_unsigned(reader, &STATUS) as u8,
            turn: turn_rate(read_signed(reader, &TURN)),
            speed: read_scaled(reader, &SPEED),
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            course: read_scaled(reader, &COURSE),
            heading: read_unsigned(reader, &HEADING) as u16,
            second: read_unsigned(reader, &SECOND) as u8,
            maneuver: maneuver(read_unsigned(reader, &MANEUVER)),
            raim: read_flag(reader, &RAIM),
            radio: read_unsigned(reader, &RADIO),
        }
    }
}

impl FieldAccess for PositionReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "status", "status_text", "turn", "speed", "accuracy", "lon", "lat", "course",
            "heading", "second", "maneuver", "maneuver_text", "raim", "radio",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "status" => unsigned(self.status),
            "status_text" => self.status_text().and_then(label),
            "turn" => Some(AisValue::TurnRate(self.turn)),
            "speed" => float(self.speed),
            "accuracy" => flag(self.accuracy),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "course" => float(self.course),
            "heading" => unsigned(self.heading),
            "second" => unsigned(self.second),
            "maneuver" => unsigned(u8::from(self.maneuver)),
            "maneuver_text" => label(self.maneuver.label()),
            "raim" => flag(self.raim),
            "radio" => unsigned(self.radio),
            _ => None,
        }
    }
}

//==================================================================================SAR_AIRCRAFT
/// Type 9: standard SAR aircraft position report.
#[derive(Debug, Clone, PartialEq)]
pub struct SarAircraftReport {
    /// Altitude, meters (4095 = not available).
    pub alt: u16,
    /// Speed over ground, knots (no sub-unit scaling).
    pub speed: u16,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    pub course: f64,
    pub second: u8,
    pub regional: u8,
    pub dte: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio: u32,
}

impl FromBits for SarAircraftReport {
    const DESCRIPTOR: &'static MessageDescriptor = &sar_aircraft::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use sar_aircraft::*;
        Self {
            alt: read_unsigned(reader, &ALT) as u16,
            speed: read_unsigned(reader, &SPEED) as u16,
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            course: read_scaled(reader, &COURSE),
            second: read_unsigned(reader, &SECOND) as u8,
            regional: read_unsigned(reader, &REGIONAL) as u8,
            dte: read_flag(reader, &DTE),
            assigned: read_flag(reader, &ASSIGNED),
            raim: read_flag(reader, &RAIM),
            radio: read_unsigned(reader, &RADIO),
        }
    }
}

impl FieldAccess for SarAircraftReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "alt", "speed", "accuracy", "lon", "lat", "course", "second", "regional", "dte",
            "assigned", "raim", "radio",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "alt" => unsigned(self.alt),
            "speed" => unsigned(self.speed),
            "accuracy" => flag(self.accuracy),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "course" => float(self.course),
            "second" => unsigned(self.second),
            "regional" => unsigned(self.regional),
            "dte" => flag(self.dte),
            "assigned" => flag(self.assigned),
            "raim" => flag(self.raim),
            "radio" => unsigned(self.radio),
            _ => None,
        }
    }
}

//==================================================================================CLASS_B
/// Type 18: standard Class B CS position report.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBPositionReport {
    pub speed: f64,
    pub accuracy: bool,
    pub lon: f64,
    pub lat: f64,
    pub course: f64,
    pub heading: u16,
    pub second: u8,
    pub regional: u8,
    /// Carrier-sense unit (`true`) or SOTDMA unit.
    pub cs: bool,
    pub display: bool,
    pub dsc: bool,
    pub band: bool,
    pub msg22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio: u32,
}

impl FromBits for ClassBPositionReport {
    const DESCRIPTOR: &'static MessageDescriptor = &class_b_position::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use class_b_position::*;
        Self {
            speed: read_scaled(reader, &SPEED),
            accuracy: read_flag(reader, &ACCURACY),
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            course: read_scaled(reader, &COURSE),
            heading: read_unsigned(reader, &HEADING) as u16,
            second: read_unsigned(reader, &SECOND) as u8,
            regional: read_unsigned(reader, &REGIONAL) as u8,
            cs: read_flag(reader, &CS),
            display: read_flag(reader, &DISPLAY),
            dsc: read_flag(reader, &DSC),
            band: read_flag(reader, &BAND),
            msg22: read_flag(reader, &MSG22),
            assigned: read_flag(reader, &ASSIGNED),
            raim: read_flag(reader, &RAIM),
            radio: read_unsigned(reader, &RADIO),
        }
    }
}

impl FieldAccess for ClassBPositionReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "speed", "accuracy", "lon", "lat", "course", "heading", "second", "regional", "cs",
            "display", "dsc", "band", "msg22", "assigned", "raim", "radio",
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
            "cs" => flag(self.cs),
            "display" => flag(self.display),
            "dsc" => flag(self.dsc),
            "band" => flag(self.band),
            "msg22" => flag(self.msg22),
            "assigned" => flag(self.assigned),
            "raim" => flag(self.raim),
            "radio" => unsigned(self.radio),
            _ => None,
        }
    }
}

//==================================================================================LONG_RANGE
/// Type 27: long-range broadcast, low resolution position.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRangeReport {
    pub accuracy: bool,
    pub raim: bool,
    pub status: u8,
    pub lon: f64,
    pub lat: f64,
    /// Knots, whole units.
    pub speed: u8,
    /// Degrees, whole units.
    pub course: u16,
    /// `false` when the position is from the current GNSS fix.
    pub gnss: bool,
}

impl LongRangeReport {
    pub fn status_text(&self) -> Option<&'static str> {
        navigation_status_text(u32::from(self.status))
    }
}

impl FromBits for LongRangeReport {
    const DESCRIPTOR: &'static MessageDescriptor = &long_range::DESCRIPTOR;

    fn from_bits(reader: &BitReader<'_>) -> Self {
        use long_range::*;
        Self {
            accuracy: read_flag(reader, &ACCURACY),
            raim: read_flag(reader, &RAIM),
            status: read_unsigned(reader, &STATUS) as u8,
            lon: read_coordinate(reader, &LON),
            lat: read_coordinate(reader, &LAT),
            speed: read_unsigned(reader, &SPEED) as u8,
            course: read_unsigned(reader, &COURSE) as u16,
            gnss: read_flag(reader, &GNSS),
        }
    }
}

impl FieldAccess for LongRangeReport {
    fn field_ids(&self) -> &'static [&'static str] {
        &[
            "accuracy", "raim", "status", "status_text", "lon", "lat", "speed", "course", "gnss",
        ]
    }

    fn field(&self, id: &str) -> Option<AisValue> {
        match id {
            "accuracy" => flag(self.accuracy),
            "raim" => flag(self.raim),
            "status" => unsigned(self.status),
            "status_text" => self.status_text().and_then(label),
            "lon" => float(self.lon),
            "lat" => float(self.lat),
            "speed" => unsigned(self.speed),
            "course" => unsigned(self.course),
            "gnss" => flag(self.gnss),
            _ => None,
        }
    }
}
