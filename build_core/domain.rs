//! Structures used to deserialize `ais_lookups.json`.
use serde::Deserialize;

//==================================================================================LOOKUP_DOC
#[derive(Debug, Deserialize)]
/// Root of the reference data document.
pub(crate) struct LookupDocument {
    #[serde(rename = "TextTables")]
    pub(crate) text_tables: Vec<TextTable>,
    #[serde(rename = "MidTable")]
    pub(crate) mid_table: Vec<MidEntry>,
}

//==========================================TEXT_TABLE
#[derive(Debug, Deserialize, Clone)]
/// Raw value → label table (navigation status, ship type, ...).
pub(crate) struct TextTable {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    /// Number of raw values covered; every value in `0..Size` needs a label.
    #[serde(rename = "Size")]
    pub(crate) size: u32,
    #[serde(rename = "Values")]
    pub(crate) values: Vec<TextEntry>,
}

#[derive(Debug, Deserialize, Clone)]
/// One label, applied to `Value` or to the inclusive range `Value..=ValueTo`.
pub(crate) struct TextEntry {
    #[serde(rename = "Value")]
    pub(crate) value: u32,
    #[serde(rename = "ValueTo")]
    pub(crate) value_to: Option<u32>,
    #[serde(rename = "Name")]
    pub(crate) name: String,
}

impl TextTable {
    /// Flatten ranges into one `(value, label)` pair per raw value.
    pub(crate) fn expanded(&self) -> Vec<(u32, String)> {
        let mut out = Vec::new();
        for entry in &self.values {
            let last = entry.value_to.unwrap_or(entry.value);
            for value in entry.value..=last {
                out.push((value, entry.name.clone()));
            }
        }
        out.sort_by_key(|(value, _)| *value);
        out
    }
}

//==========================================MID_TABLE
#[derive(Debug, Deserialize, Clone)]
/// Maritime Identification Digits entry.
pub(crate) struct MidEntry {
    #[serde(rename = "Mid")]
    pub(crate) mid: u16,
    #[serde(rename = "Nationality")]
    pub(crate) nationality: String,
}
