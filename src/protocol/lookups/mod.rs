//! Static reference tables and the derived-field resolvers built on them.
//!
//! The label arrays, their enumerations and the MID table are generated by
//! `build.rs` from `build_core/var/ais_lookups.json`. The resolvers below apply
//! the clamping rules of the decoder: out-of-range raw values fall back to the
//! "not available" entry instead of being rejected.
use std::fmt;

include!(concat!(env!("OUT_DIR"), "/generated_lookups.rs"));

/// Scale factor of the rate-of-turn indicator.
const TURN_RATE_FACTOR: f64 = 4.733;

/// Navigation status label, `None` for raw values outside 0..=15.
pub fn navigation_status_text(raw: u32) -> Option<&'static str> {
    u8::try_from(raw)
        .ok()
        .and_then(|raw| NavigationStatus::try_from(raw).ok())
        .map(|status| status.label())
}

/// Maneuver indicator; anything but 1 or 2 reads as "not available".
pub fn maneuver(raw: u32) -> ManeuverIndicator {
    coerce(raw)
}

/// Position fixing device; values above 8 read as "undefined".
pub fn epfd(raw: u32) -> EpfdFixType {
    coerce(raw)
}

/// Ship and cargo type; values above 99 read as "not available".
pub fn ship_type(raw: u32) -> ShipType {
    coerce(raw)
}

/// Aid-to-navigation type (the 5-bit field covers the whole table).
pub fn aid_type(raw: u32) -> AidType {
    coerce(raw)
}

pub fn maneuver_text(raw: u32) -> &'static str {
    maneuver(raw).label()
}

pub fn epfd_text(raw: u32) -> &'static str {
    epfd(raw).label()
}

pub fn ship_type_text(raw: u32) -> &'static str {
    ship_type(raw).label()
}

pub fn aid_type_text(raw: u32) -> &'static str {
    aid_type(raw).label()
}

/// Convert a raw value into a table enumeration, falling back to entry 0.
fn coerce<T: TryFrom<u8> + Default>(raw: u32) -> T {
    u8::try_from(raw)
        .ok()
        .and_then(|raw| T::try_from(raw).ok())
        .unwrap_or_default()
}

//==================================================================================TURN_RATE
/// Rate of turn as reported by types 1, 2 and 3.
///
/// The raw field is a signed 8-bit indicator with three sentinel values, so
/// the decoded value is either a rate in degrees per minute or one of the
/// sentinels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnRate {
    /// `4.733 * sqrt(raw)` degrees per minute.
    ///
    /// Negative raw values go through the same formula and therefore yield
    /// NaN. Port turns are not sign-corrected.
    Rate(f64),
    /// Turning right faster than 5°/30 s, no turn indicator (raw 127).
    FastRight,
    /// Turning left faster than 5°/30 s, no turn indicator (raw -127).
    FastLeft,
    /// No turn information (raw ±128).
    NotAvailable,
}

impl TurnRate {
    /// Numeric rate, `None` for the sentinels.
    pub fn rate(&self) -> Option<f64> {
        match self {
            TurnRate::Rate(rate) => Some(*rate),
            _ => None,
        }
    }
}

/// Decode the raw rate-of-turn indicator.
pub fn turn_rate(raw: i32) -> TurnRate {
    match raw {
        0 => TurnRate::Rate(0.0),
        127 => TurnRate::FastRight,
        -127 => TurnRate::FastLeft,
        128 | -128 => TurnRate::NotAvailable,
        raw => TurnRate::Rate(TURN_RATE_FACTOR * f64::from(raw).sqrt()),
    }
}

impl fmt::Display for TurnRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRate::Rate(rate) => write!(f, "{}", rate),
            TurnRate::FastRight => f.write_str("fastright"),
            TurnRate::FastLeft => f.write_str("fastleft"),
            TurnRate::NotAvailable => f.write_str("not available"),
        }
    }
}
