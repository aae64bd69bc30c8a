//! Descriptor-driven field extraction engine.
//! Message bodies call the typed readers with their static layout descriptors,
//! while [`read_field`] and [`read_fields`] give a dynamic `AisValue` view of
//! any layout (used for diagnostics and by the layout tests).
use super::bits::BitReader;
use super::sixbit::decode_text;
use crate::core::{AisValue, FieldDescriptor, FieldKind, MessageDescriptor};

/// Decimal places kept on latitude/longitude.
const COORDINATE_PRECISION: f64 = 10_000.0;

/// Unsigned value of the field. AIS fields are at most 30 bits wide.
#[inline]
pub fn read_unsigned(reader: &BitReader<'_>, field: &FieldDescriptor) -> u32 {
    reader.unsigned(field.offset, field.length) as u32
}

/// Two's-complement value of the field.
#[inline]
pub fn read_signed(reader: &BitReader<'_>, field: &FieldDescriptor) -> i32 {
    reader.signed(field.offset, field.length) as i32
}

#[inline]
pub fn read_flag(reader: &BitReader<'_>, field: &FieldDescriptor) -> bool {
    reader.flag(field.offset)
}

/// Unsigned value divided by the field divisor.
#[inline]
pub fn read_scaled(reader: &BitReader<'_>, field: &FieldDescriptor) -> f64 {
    f64::from(read_unsigned(reader, field)) / field.divisor
}

/// Signed longitude/latitude in degrees, rounded to four decimals.
pub fn read_coordinate(reader: &BitReader<'_>, field: &FieldDescriptor) -> f64 {
    let degrees = f64::from(read_signed(reader, field)) / field.divisor;
    (degrees * COORDINATE_PRECISION).round() / COORDINATE_PRECISION
}

/// Six-bit text of the field (whole groups only, padding stripped).
#[inline]
pub fn read_text(reader: &BitReader<'_>, field: &FieldDescriptor) -> String {
    decode_text(reader, field.offset, field.length)
}

/// Read one field as a dynamic value; spare bits yield `None`.
pub fn read_field(reader: &BitReader<'_>, field: &FieldDescriptor) -> Option<AisValue> {
    let scaled = field.divisor != 1.0;
    let value = match field.kind {
        FieldKind::Unsigned if scaled => AisValue::Float(read_scaled(reader, field)),
        FieldKind::Unsigned => AisValue::Unsigned(read_unsigned(reader, field)),
        FieldKind::Signed if scaled => {
            AisValue::Float(f64::from(read_signed(reader, field)) / field.divisor)
        }
        FieldKind::Signed => AisValue::Signed(read_signed(reader, field)),
        FieldKind::Flag => AisValue::Flag(read_flag(reader, field)),
        FieldKind::Coordinate => AisValue::Float(read_coordinate(reader, field)),
        FieldKind::Text | FieldKind::TrailingText => AisValue::Text(read_text(reader, field)),
        FieldKind::Spare => return None,
    };
    Some(value)
}

/// Raw view of every non-spare field of a layout, in layout order.
pub fn read_fields(
    reader: &BitReader<'_>,
    descriptor: &MessageDescriptor,
) -> Vec<(&'static str, AisValue)> {
    descriptor
        .fields
        .iter()
        .filter_map(|field| read_field(reader, field).map(|value| (field.id, value)))
        .collect()
}
