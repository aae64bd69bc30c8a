//! Generate lookup enumerations and label tables from the AIS reference data.
use super::conf::MID_RANGE;
use super::domain::*;
use super::errors::*;
use super::name_helpers::*;

use std::collections::HashMap;
use std::fmt::Write;

/// Emit the Rust code for every text table followed by the MID table.
pub(crate) fn run_lookup_gen(doc: &LookupDocument) -> Result<String, BuildError> {
    let mut buffer_lookup_code = String::new();

    for table in &doc.text_tables {
        let labels = checked_labels(table)?;
        buffer_lookup_code.push_str(&generate_lookup_code(table, &labels)?);
    }
    buffer_lookup_code.push_str(&generate_mid_table(&doc.mid_table)?);

    Ok(buffer_lookup_code)
}

/// Ensure the table labels every raw value in `0..size` exactly once.
fn checked_labels(table: &TextTable) -> Result<Vec<String>, BuildError> {
    let mut labels: Vec<Option<String>> = vec![None; table.size as usize];

    for (value, name) in table.expanded() {
        let slot = labels
            .get_mut(value as usize)
            .ok_or_else(|| BuildError::ValueOutOfRange {
                table: table.name.clone(),
                value,
                size: table.size,
            })?;
        if slot.is_some() {
            return Err(BuildError::IncompleteTable {
                table: table.name.clone(),
                value,
            });
        }
        *slot = Some(name);
    }

    labels
        .into_iter()
        .enumerate()
        .map(|(value, label)| {
            label.ok_or_else(|| BuildError::IncompleteTable {
                table: table.name.clone(),
                value: value as u32,
            })
        })
        .collect()
}

/// Smallest unsigned integer type able to hold every raw value.
fn generate_repr_attribute(size: u32) -> &'static str {
    if size <= u8::MAX as u32 + 1 {
        "u8"
    } else {
        "u16"
    }
}

//==================================================================================LOOKUP_ENUM_GENERATION
/// Generate the label array, the enumeration and its conversions for one table.
fn generate_lookup_code(table: &TextTable, labels: &[String]) -> Result<String, BuildError> {
    let mut buffer = String::new();
    let enum_name = table_type_name(&table.name);
    let enum_repr = generate_repr_attribute(table.size);
    let labels_name = format!("{}_LABELS", table.name);

    // Labels shared by several raw values get the value appended to their variant.
    let mut hash_count = HashMap::new();
    for label in labels {
        *hash_count.entry(to_pascal_case(label)).or_insert(0) += 1;
    }
    let variant_names: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(value, label)| {
            let name = to_pascal_case(label);
            if hash_count.get(&name) > Some(&1) {
                format!("{}{}", name, value)
            } else {
                name
            }
        })
        .collect();

    //======================Label array
    writeln!(buffer, "/// Labels for [`{}`], indexed by raw value.", enum_name)?;
    writeln!(
        buffer,
        "pub static {}: [&str; {}] = [",
        labels_name,
        labels.len()
    )?;
    for label in labels {
        writeln!(buffer, "\t{:?},", label)?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;

    //======================Enum generation
    writeln!(buffer, "#[repr({})]", enum_repr)?;
    writeln!(buffer, "#[derive(Debug, PartialEq, Eq, Copy, Clone)]")?;
    writeln!(buffer, "#[cfg_attr(feature = \"defmt\", derive(defmt::Format))]")?;
    writeln!(buffer, "pub enum {} {{", enum_name)?;
    for (value, name) in variant_names.iter().enumerate() {
        writeln!(buffer, "\t{} = {},", name, value)?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    writeln!(buffer, "#[derive(Debug, PartialEq)]")?;
    writeln!(buffer, "pub struct Invalid{}(pub {});", enum_name, enum_repr)?;
    writeln!(buffer)?;
    writeln!(buffer, "impl From<{}> for {} {{", enum_name, enum_repr)?;
    writeln!(buffer, "\tfn from(value: {}) -> Self {{", enum_name)?;
    writeln!(buffer, "\t\tvalue as {}", enum_repr)?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    writeln!(buffer, "impl TryFrom<{}> for {} {{", enum_repr, enum_name)?;
    writeln!(buffer, "\ttype Error = Invalid{};", enum_name)?;
    writeln!(
        buffer,
        "\tfn try_from(value: {}) -> Result<Self, Self::Error> {{",
        enum_repr
    )?;
    writeln!(buffer, "\t\tmatch value {{")?;
    for (value, name) in variant_names.iter().enumerate() {
        writeln!(buffer, "\t\t\t{} => Ok({}::{}),", value, enum_name, name)?;
    }
    writeln!(buffer, "\t\t\tother => Err(Invalid{}(other)),", enum_name)?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    //======================Helpers
    writeln!(buffer, "impl Default for {} {{", enum_name)?;
    writeln!(buffer, "\tfn default() -> Self {{")?;
    writeln!(buffer, "\t\tSelf::{}", variant_names[0])?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    writeln!(buffer, "impl {} {{", enum_name)?;
    writeln!(buffer, "\t/// Human readable label.")?;
    writeln!(buffer, "\tpub fn label(&self) -> &'static str {{")?;
    writeln!(buffer, "\t\t{}[*self as usize]", labels_name)?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    Ok(buffer)
}

//==================================================================================MID_TABLE_GENERATION
/// Generate the MID → nationality table, sorted by MID for binary search.
fn generate_mid_table(entries: &[MidEntry]) -> Result<String, BuildError> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.mid);

    for pair in sorted.windows(2) {
        if pair[0].mid == pair[1].mid {
            return Err(BuildError::DuplicateMid { mid: pair[0].mid });
        }
    }
    if let Some(entry) = sorted.iter().find(|entry| !MID_RANGE.contains(&entry.mid)) {
        return Err(BuildError::InvalidMid { mid: entry.mid });
    }

    let mut buffer = String::new();
    writeln!(
        buffer,
        "/// Maritime Identification Digits with their nationality, sorted by MID."
    )?;
    writeln!(
        buffer,
        "pub static MID_NATIONALITIES: [(u16, &str); {}] = [",
        sorted.len()
    )?;
    for entry in &sorted {
        writeln!(buffer, "\t({}, {:?}),", entry.mid, entry.nationality)?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;

    Ok(buffer)
}
