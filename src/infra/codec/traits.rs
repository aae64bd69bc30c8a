//! Public traits exposed by the codec engine. They decouple the decoded
//! message bodies from the extraction logic and provide a uniform,
//! name-keyed view of their fields to upper layers.
use super::bits::BitReader;
use crate::core::{AisValue, MessageDescriptor};

//==================================================================================FROM_BITS
/// Implemented by every message body with a static layout.
pub trait FromBits: Sized {
    /// Layout the body is extracted from.
    const DESCRIPTOR: &'static MessageDescriptor;

    /// Extract the body from a complete bit sequence.
    ///
    /// Never fails: fields beyond the end of a short payload read as zero
    /// (or empty text), matching the permissive reader.
    fn from_bits(reader: &BitReader<'_>) -> Self;
}

//==================================================================================FIELD_ACCESS
/// Access to decoded fields by their `'static str` identifier without knowing
/// the concrete body type.
///
/// Identifiers are the snake_case names used in the layout descriptors
/// (`"speed"`, `"shipname"`), plus derived fields such as `"status_text"` or
/// `"turn"` that do not map one-to-one to a bit range.
///
/// ```rust, ignore
/// let body = PositionReport::from_bits(&bits.reader());
/// assert_eq!(body.field("speed"), Some(AisValue::Float(0.0)));
/// for (id, value) in body.fields() {
///     println!("{id}={value}");
/// }
/// ```
pub trait FieldAccess {
    /// Identifiers of every field the body exposes, in output order.
    fn field_ids(&self) -> &'static [&'static str];

    /// Value of a field, `None` for unknown ids or absent optional values.
    fn field(&self, id: &str) -> Option<AisValue>;

    /// Every present field as `(id, value)` pairs, in output order.
    fn fields(&self) -> Vec<(&'static str, AisValue)> {
        self.field_ids()
            .iter()
            .filter_map(|id| self.field(id).map(|value| (*id, value)))
            .collect()
    }
}
