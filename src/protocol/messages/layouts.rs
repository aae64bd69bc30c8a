//! Field layout tables, one module per supported message layout.
//!
//! Offsets and lengths are in bits from the start of the reassembled payload.
//! Every module exposes its fields as constants (used by the message bodies)
//! and a `DESCRIPTOR` listing them in payload order (used for raw dumps and
//! bound checks).
use crate::core::{FieldDescriptor as F, MessageDescriptor};

/// Divisor of the 1/10000 minute coordinates.
pub const HIGH_RES_DIVISOR: f64 = 600_000.0;
/// Divisor of the 1/10 minute coordinates of long-range broadcasts.
pub const LOW_RES_DIVISOR: f64 = 600.0;

/// Fields shared by every message type.
pub mod header {
    use super::F;

    pub const MESSAGE_TYPE: F = F::unsigned("type", 0, 6);
    pub const REPEAT: F = F::unsigned("repeat", 6, 2);
    pub const MMSI: F = F::unsigned("mmsi", 8, 30);
}

/// Ship dimensions to the reference point, shared by types 5, 19, 21 and 24B.
macro_rules! dimensions {
    ($offset:expr) => {
        pub const TO_BOW: F = F::unsigned("to_bow", $offset, 9);
        pub const TO_STERN: F = F::unsigned("to_stern", $offset + 9, 9);
        pub const TO_PORT: F = F::unsigned("to_port", $offset + 18, 6);
        pub const TO_STARBOARD: F = F::unsigned("to_starboard", $offset + 24, 6);
    };
}

/// Types 1, 2, 3: Class A position report.
pub mod position_report {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    pub const STATUS: F = F::unsigned("status", 38, 4);
    pub const TURN: F = F::signed("turn", 42, 8);
    pub const SPEED: F = F::unsigned("speed", 50, 10).scaled(10.0);
    pub const ACCURACY: F = F::flag("accuracy", 60);
    pub const LON: F = F::coordinate("lon", 61, 28, HIGH_RES_DIVISOR);
    pub const LAT: F = F::coordinate("lat", 89, 27, HIGH_RES_DIVISOR);
    pub const COURSE: F = F::unsigned("course", 116, 12).scaled(10.0);
    pub const HEADING: F = F::unsigned("heading", 128, 9);
    pub const SECOND: F = F::unsigned("second", 137, 6);
    pub const MANEUVER: F = F::unsigned("maneuver", 143, 2);
    pub const SPARE: F = F::spare("spare", 145, 3);
    pub const RAIM: F = F::flag("raim", 148);
    pub const RADIO: F = F::unsigned("radio", 149, 19);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 1,
        part: None,
        name: "Position Report Class A",
        min_bits: 168,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, STATUS, TURN, SPEED, ACCURACY, LON, LAT, COURSE, HEADING,
            SECOND, MANEUVER, SPARE, RAIM, RADIO,
        ],
    };
}

/// Type 4: base station report.
pub mod base_station {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    pub const YEAR: F = F::unsigned("year", 38, 14);
    pub const MONTH: F = F::unsigned("month", 52, 4);
    pub const DAY: F = F::unsigned("day", 56, 5);
    pub const HOUR: F = F::unsigned("hour", 61, 5);
    pub const MINUTE: F = F::unsigned("minute", 66, 6);
    pub const SECOND: F = F::unsigned("second", 72, 6);
    pub const ACCURACY: F = F::flag("accuracy", 78);
    pub const LON: F = F::coordinate("lon", 79, 28, HIGH_RES_DIVISOR);
    pub const LAT: F = F::coordinate("lat", 107, 27, HIGH_RES_DIVISOR);
    pub const EPFD: F = F::unsigned("epfd", 134, 4);
    pub const SPARE: F = F::spare("spare", 138, 10);
    pub const RAIM: F = F::flag("raim", 148);
    pub const RADIO: F = F::unsigned("radio", 149, 19);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 4,
        part: None,
        name: "Base Station Report",
        min_bits: 168,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, YEAR, MONTH, DAY, HOUR, MINUTE, SECOND, ACCURACY, LON, LAT,
            EPFD, SPARE, RAIM, RADIO,
        ],
    };
}

/// Type 5: static and voyage related data.
pub mod static_voyage {
    use super::header::*;
    use super::{MessageDescriptor, F};

    pub const AIS_VERSION: F = F::unsigned("ais_version", 38, 2);
    pub const IMO: F = F::unsigned("imo", 40, 30);
    pub const CALLSIGN: F = F::text("callsign", 70, 42);
    pub const SHIPNAME: F = F::text("shipname", 112, 120);
    pub const SHIPTYPE: F = F::unsigned("shiptype", 232, 8);
    dimensions!(240);
    pub const EPFD: F = F::unsigned("epfd", 270, 4);
    pub const MONTH: F = F::unsigned("month", 274, 4);
    pub const DAY: F = F::unsigned("day", 278, 5);
    pub const HOUR: F = F::unsigned("hour", 283, 5);
    pub const MINUTE: F = F::unsigned("minute", 288, 6);
    pub const DRAUGHT: F = F::unsigned("draught", 294, 8).scaled(10.0);
    pub const DESTINATION: F = F::text("destination", 302, 120);
    pub const DTE: F = F::flag("dte", 422);
    pub const SPARE: F = F::spare("spare", 423, 1);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 5,
        part: None,
        name: "Static and Voyage Related Data",
        min_bits: 424,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, AIS_VERSION, IMO, CALLSIGN, SHIPNAME, SHIPTYPE, TO_BOW,
            TO_STERN, TO_PORT, TO_STARBOARD, EPFD, MONTH, DAY, HOUR, MINUTE, DRAUGHT, DESTINATION,
            DTE, SPARE,
        ],
    };
}

/// Type 9: standard SAR aircraft position report.
pub mod sar_aircraft {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    pub const ALT: F = F::unsigned("alt", 38, 12);
    /// Knots, unscaled.
    pub const SPEED: F = F::unsigned("speed", 50, 10);
    pub const ACCURACY: F = F::flag("accuracy", 60);
    pub const LON: F = F::coordinate("lon", 61, 28, HIGH_RES_DIVISOR);
    pub const LAT: F = F::coordinate("lat", 89, 27, HIGH_RES_DIVISOR);
    pub const COURSE: F = F::unsigned("course", 116, 12).scaled(10.0);
    pub const SECOND: F = F::unsigned("second", 128, 6);
    pub const REGIONAL: F = F::unsigned("regional", 134, 8);
    pub const DTE: F = F::flag("dte", 142);
    pub const SPARE: F = F::spare("spare", 143, 3);
    pub const ASSIGNED: F = F::flag("assigned", 146);
    pub const RAIM: F = F::flag("raim", 147);
    pub const RADIO: F = F::unsigned("radio", 148, 20);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 9,
        part: None,
        name: "Standard SAR Aircraft Position Report",
        min_bits: 168,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, ALT, SPEED, ACCURACY, LON, LAT, COURSE, SECOND, REGIONAL,
            DTE, SPARE, ASSIGNED, RAIM, RADIO,
        ],
    };
}

/// Position block shared by the Class B reports (types 18 and 19).
macro_rules! class_b_position {
    () => {
        pub const RESERVED: F = F::spare("reserved", 38, 8);
        pub const SPEED: F = F::unsigned("speed", 46, 10).scaled(10.0);
        pub const ACCURACY: F = F::flag("accuracy", 56);
        pub const LON: F = F::coordinate("lon", 57, 28, HIGH_RES_DIVISOR);
        pub const LAT: F = F::coordinate("lat", 85, 27, HIGH_RES_DIVISOR);
        pub const COURSE: F = F::unsigned("course", 112, 12).scaled(10.0);
        pub const HEADING: F = F::unsigned("heading", 124, 9);
        pub const SECOND: F = F::unsigned("second", 133, 6);
    };
}

/// Type 18: standard Class B position report.
pub mod class_b_position {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    class_b_position!();
    pub const REGIONAL: F = F::unsigned("regional", 139, 2);
    pub const CS: F = F::flag("cs", 141);
    pub const DISPLAY: F = F::flag("display", 142);
    pub const DSC: F = F::flag("dsc", 143);
    pub const BAND: F = F::flag("band", 144);
    pub const MSG22: F = F::flag("msg22", 145);
    pub const ASSIGNED: F = F::flag("assigned", 146);
    pub const RAIM: F = F::flag("raim", 147);
    pub const RADIO: F = F::unsigned("radio", 148, 20);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 18,
        part: None,
        name: "Standard Class B CS Position Report",
        min_bits: 168,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, RESERVED, SPEED, ACCURACY, LON, LAT, COURSE, HEADING,
            SECOND, REGIONAL, CS, DISPLAY, DSC, BAND, MSG22, ASSIGNED, RAIM, RADIO,
        ],
    };
}

/// Type 19: extended Class B position report.
pub mod class_b_extended {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    class_b_position!();
    pub const REGIONAL: F = F::unsigned("regional", 139, 4);
    pub const SHIPNAME: F = F::text("shipname", 143, 120);
    pub const SHIPTYPE: F = F::unsigned("shiptype", 263, 8);
    dimensions!(271);
    pub const EPFD: F = F::unsigned("epfd", 301, 4);
    pub const RAIM: F = F::flag("raim", 305);
    pub const DTE: F = F::flag("dte", 306);
    pub const ASSIGNED: F = F::flag("assigned", 307);
    pub const SPARE: F = F::spare("spare", 308, 4);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 19,
        part: None,
        name: "Extended Class B CS Position Report",
        min_bits: 312,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, RESERVED, SPEED, ACCURACY, LON, LAT, COURSE, HEADING,
            SECOND, REGIONAL, SHIPNAME, SHIPTYPE, TO_BOW, TO_STERN, TO_PORT, TO_STARBOARD, EPFD,
            RAIM, DTE, ASSIGNED, SPARE,
        ],
    };
}

/// Type 21: aid-to-navigation report.
pub mod aid_to_navigation {
    use super::header::*;
    use super::{MessageDescriptor, F, HIGH_RES_DIVISOR};

    pub const AID_TYPE: F = F::unsigned("aid_type", 38, 5);
    pub const NAME: F = F::text("name", 43, 120);
    pub const ACCURACY: F = F::flag("accuracy", 163);
    pub const LON: F = F::coordinate("lon", 164, 28, HIGH_RES_DIVISOR);
    pub const LAT: F = F::coordinate("lat", 192, 27, HIGH_RES_DIVISOR);
    dimensions!(219);
    pub const EPFD: F = F::unsigned("epfd", 249, 4);
    pub const SECOND: F = F::unsigned("second", 253, 6);
    pub const OFF_POSITION: F = F::flag("off_position", 259);
    pub const REGIONAL: F = F::unsigned("regional", 260, 8);
    pub const RAIM: F = F::flag("raim", 268);
    pub const VIRTUAL_AID: F = F::flag("virtual_aid", 269);
    pub const ASSIGNED: F = F::flag("assigned", 270);
    pub const SPARE: F = F::spare("spare", 271, 1);
    /// Up to 14 more characters for names longer than 20.
    pub const NAME_EXT: F = F::trailing_text("name_ext", 272, 88);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 21,
        part: None,
        name: "Aid-to-Navigation Report",
        min_bits: 272,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, AID_TYPE, NAME, ACCURACY, LON, LAT, TO_BOW, TO_STERN,
            TO_PORT, TO_STARBOARD, EPFD, SECOND, OFF_POSITION, REGIONAL, RAIM, VIRTUAL_AID,
            ASSIGNED, SPARE, NAME_EXT,
        ],
    };
}

/// Part number of type 24 static data reports.
pub const PART_NUMBER: F = F::unsigned("partno", 38, 2);

/// Type 24 part A: vessel name.
pub mod static_data_a {
    use super::header::*;
    use super::{MessageDescriptor, F, PART_NUMBER};

    pub const SHIPNAME: F = F::text("shipname", 40, 120);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 24,
        part: Some(0),
        name: "Static Data Report Part A",
        min_bits: 160,
        fields: &[MESSAGE_TYPE, REPEAT, MMSI, PART_NUMBER, SHIPNAME],
    };
}

/// Type 24 part B: type, vendor, call sign and dimensions.
pub mod static_data_b {
    use super::header::*;
    use super::{MessageDescriptor, F, PART_NUMBER};

    pub const SHIPTYPE: F = F::unsigned("shiptype", 40, 8);
    pub const VENDOR_ID: F = F::text("vendorid", 48, 18);
    pub const MODEL: F = F::unsigned("model", 66, 4);
    pub const SERIAL: F = F::unsigned("serial", 70, 20);
    pub const CALLSIGN: F = F::text("callsign", 90, 42);
    dimensions!(132);
    /// Overlays the dimensions when the sender is an auxiliary craft.
    pub const MOTHERSHIP_MMSI: F = F::unsigned("mothership_mmsi", 132, 30);
    pub const SPARE: F = F::spare("spare", 162, 6);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 24,
        part: Some(1),
        name: "Static Data Report Part B",
        min_bits: 168,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, PART_NUMBER, SHIPTYPE, VENDOR_ID, MODEL, SERIAL, CALLSIGN,
            TO_BOW, TO_STERN, TO_PORT, TO_STARBOARD, MOTHERSHIP_MMSI, SPARE,
        ],
    };
}

/// Type 27: long range AIS broadcast.
pub mod long_range {
    use super::header::*;
    use super::{MessageDescriptor, F, LOW_RES_DIVISOR};

    pub const ACCURACY: F = F::flag("accuracy", 38);
    pub const RAIM: F = F::flag("raim", 39);
    pub const STATUS: F = F::unsigned("status", 40, 4);
    pub const LON: F = F::coordinate("lon", 44, 18, LOW_RES_DIVISOR);
    pub const LAT: F = F::coordinate("lat", 62, 17, LOW_RES_DIVISOR);
    /// Knots, unscaled.
    pub const SPEED: F = F::unsigned("speed", 79, 6);
    /// Degrees, unscaled.
    pub const COURSE: F = F::unsigned("course", 85, 9);
    pub const GNSS: F = F::flag("gnss", 94);
    pub const SPARE: F = F::spare("spare", 95, 1);

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        message_type: 27,
        part: None,
        name: "Long Range AIS Broadcast",
        min_bits: 96,
        fields: &[
            MESSAGE_TYPE, REPEAT, MMSI, ACCURACY, RAIM, STATUS, LON, LAT, SPEED, COURSE, GNSS,
            SPARE,
        ],
    };
}

/// Every layout, in message type order.
pub static ALL: [&MessageDescriptor; 10] = [
    &position_report::DESCRIPTOR,
    &base_station::DESCRIPTOR,
    &static_voyage::DESCRIPTOR,
    &sar_aircraft::DESCRIPTOR,
    &class_b_position::DESCRIPTOR,
    &class_b_extended::DESCRIPTOR,
    &aid_to_navigation::DESCRIPTOR,
    &static_data_a::DESCRIPTOR,
    &static_data_b::DESCRIPTOR,
    &long_range::DESCRIPTOR,
];
