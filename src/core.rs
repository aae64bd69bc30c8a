//! Defines the "data contract" between the field layout tables
//! (`protocol::messages::layouts`, the scribe) and the extraction engine
//! (`infra::codec::engine`, the interpreter).
//!
//! Layout tables are plain `static` descriptors. The engine consumes them to
//! pull values out of a reassembled bit sequence, and the message bodies expose
//! their decoded values back as [`AisValue`]s keyed by the descriptor id.
use std::fmt;

use crate::protocol::lookups::TurnRate;
use crate::protocol::mmsi::Mmsi;

/// Semantic type of a field within an AIS message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    /// Unsigned big-endian integer.
    Unsigned,
    /// Two's-complement signed integer.
    Signed,
    /// Single-bit boolean flag.
    Flag,
    /// Signed longitude/latitude, divided then rounded to four decimals.
    Coordinate,
    /// Fixed-width packed six-bit text.
    Text,
    /// Six-bit text running from the offset to the end of the payload
    /// (bounded by `length`). Only present in messages long enough to carry it.
    TrailingText,
    /// Reserved or spare bits, never read.
    Spare,
}

/// Descriptor for a single field: where it sits and how to scale it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Field identifier, also the key used by `FieldAccess`.
    pub id: &'static str,
    /// Absolute bit offset of the first (most significant) bit.
    pub offset: usize,
    /// Field bit length.
    pub length: usize,
    /// Semantic type.
    pub kind: FieldKind,
    /// Raw value is divided by this factor (1.0 for unscaled fields).
    pub divisor: f64,
}

impl FieldDescriptor {
    pub const fn unsigned(id: &'static str, offset: usize, length: usize) -> Self {
        Self::new(id, offset, length, FieldKind::Unsigned, 1.0)
    }

    pub const fn signed(id: &'static str, offset: usize, length: usize) -> Self {
        Self::new(id, offset, length, FieldKind::Signed, 1.0)
    }

    pub const fn flag(id: &'static str, offset: usize) -> Self {
        Self::new(id, offset, 1, FieldKind::Flag, 1.0)
    }

    pub const fn coordinate(id: &'static str, offset: usize, length: usize, divisor: f64) -> Self {
        Self::new(id, offset, length, FieldKind::Coordinate, divisor)
    }

    pub const fn text(id: &'static str, offset: usize, length: usize) -> Self {
        Self::new(id, offset, length, FieldKind::Text, 1.0)
    }

    pub const fn trailing_text(id: &'static str, offset: usize, max_length: usize) -> Self {
        Self::new(id, offset, max_length, FieldKind::TrailingText, 1.0)
    }

    pub const fn spare(id: &'static str, offset: usize, length: usize) -> Self {
        Self::new(id, offset, length, FieldKind::Spare, 1.0)
    }

    /// Same field, raw value divided by `divisor`.
    pub const fn scaled(self, divisor: f64) -> Self {
        Self { divisor, ..self }
    }

    const fn new(
        id: &'static str,
        offset: usize,
        length: usize,
        kind: FieldKind,
        divisor: f64,
    ) -> Self {
        Self {
            id,
            offset,
            length,
            kind,
            divisor,
        }
    }

    /// First bit after the field.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Descriptor for an entire message layout.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// 1. Message type code (1..=27).
    pub message_type: u8,
    /// 2. Part number for multi-part layouts (type 24: 0 = A, 1 = B).
    pub part: Option<u8>,
    /// 3. Message name (diagnostics).
    pub name: &'static str,
    /// 4. Bit length of the smallest valid payload.
    pub min_bits: usize,
    /// 5. Ordered list of field descriptors, header included.
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Look a field up by id.
    pub fn field(&self, id: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// Dynamically typed field value, as exposed by `FieldAccess`.
#[derive(Debug, Clone, PartialEq)]
pub enum AisValue {
    Unsigned(u32),
    Signed(i32),
    Float(f64),
    Flag(bool),
    Text(String),
    Label(&'static str),
    Mmsi(Mmsi),
    TurnRate(TurnRate),
    /// Original sentence lines.
    Lines(Vec<String>),
}

impl fmt::Display for AisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AisValue::Unsigned(v) => write!(f, "{}", v),
            AisValue::Signed(v) => write!(f, "{}", v),
            AisValue::Float(v) => write!(f, "{}", v),
            AisValue::Flag(v) => write!(f, "{}", u8::from(*v)),
            AisValue::Text(v) => write!(f, "{:?}", v),
            AisValue::Label(v) => write!(f, "{:?}", v),
            AisValue::Mmsi(v) => write!(f, "{}", v),
            AisValue::TurnRate(v) => write!(f, "{}", v),
            AisValue::Lines(v) => write!(f, "{:?}", v),
        }
    }
}
