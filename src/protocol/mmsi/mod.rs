//! Maritime Mobile Service Identity handling: MMSI classes, Maritime
//! Identification Digits (MID) and nationality resolution.
//!
//! The MMSI is rendered as a zero-padded 9-digit string; its leading digits
//! tell the kind of station and where the 3-digit MID sits.
use std::fmt;

use crate::protocol::lookups::MID_NATIONALITIES;

/// Maritime Mobile Service Identity, as carried by every AIS message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmsi(pub u32);

/// Kind of station, derived from the MMSI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MmsiClass {
    /// `MIDxxxxxx`: ship station.
    Ship,
    /// `00MIDxxxx`: coastal station.
    CoastalStation,
    /// `0MIDxxxxx`: group of ship stations.
    GroupCall,
    /// `111MIDxxx`: SAR aircraft.
    SarAircraft,
    /// `98MIDxxxx`: craft associated with a parent ship.
    AuxiliaryCraft,
    /// `99MIDxxxx`: aid to navigation.
    AidToNavigation,
    /// `970xxyyyy`: AIS search and rescue transmitter.
    AisSart,
    /// `972xxyyyy`: man overboard device.
    ManOverboard,
    /// `974xxyyyy`: EPIRB fitted with AIS.
    Epirb,
}

impl MmsiClass {
    /// Position of the MID within the 9-digit string, `None` when the class
    /// carries no MID.
    pub const fn mid_offset(&self) -> Option<usize> {
        match self {
            MmsiClass::Ship => Some(0),
            MmsiClass::GroupCall => Some(1),
            MmsiClass::CoastalStation | MmsiClass::AuxiliaryCraft | MmsiClass::AidToNavigation => {
                Some(2)
            }
            MmsiClass::SarAircraft | MmsiClass::AisSart => Some(3),
            MmsiClass::ManOverboard | MmsiClass::Epirb => None,
        }
    }
}

/// Maritime Identification Digits: 3-digit country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mid(pub u16);

impl Mid {
    /// Nationality registered for this MID, `None` if unallocated.
    pub fn nationality(&self) -> Option<&'static str> {
        MID_NATIONALITIES
            .binary_search_by_key(&self.0, |(mid, _)| *mid)
            .ok()
            .map(|index| MID_NATIONALITIES[index].1)
    }
}

impl fmt::Display for Mid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl Mmsi {
    /// Raw MMSI value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Station class from the MMSI prefix.
    ///
    /// Prefixes are checked longest rule first: `00` before `0`, and the
    /// `97x` device prefixes before the ship default.
    pub fn class(&self) -> MmsiClass {
        let digits = self.to_string();
        if digits.starts_with("00") {
            MmsiClass::CoastalStation
        } else if digits.starts_with('0') {
            MmsiClass::GroupCall
        } else if digits.starts_with("111") {
            MmsiClass::SarAircraft
        } else if digits.starts_with("98") {
            MmsiClass::AuxiliaryCraft
        } else if digits.starts_with("99") {
            MmsiClass::AidToNavigation
        } else if digits.starts_with("970") {
            MmsiClass::AisSart
        } else if digits.starts_with("972") {
            MmsiClass::ManOverboard
        } else if digits.starts_with("974") {
            MmsiClass::Epirb
        } else {
            MmsiClass::Ship
        }
    }

    /// Maritime Identification Digits for this MMSI, if its class has any.
    pub fn mid(&self) -> Option<Mid> {
        let offset = self.class().mid_offset()?;
        let digits = self.to_string();
        digits.get(offset..offset + 3)?.parse().ok().map(Mid)
    }

    /// Nationality label, empty when the MMSI has no MID or the MID is
    /// unallocated.
    pub fn nationality(&self) -> &'static str {
        self.mid()
            .and_then(|mid| mid.nationality())
            .unwrap_or_default()
    }
}

impl From<u32> for Mmsi {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Mmsi {
    /// Zero-padded 9-digit form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}
