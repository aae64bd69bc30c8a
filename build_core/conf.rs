//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Reference data shipped with the crate (text tables + MID table).
pub(crate) const LOOKUPS_DOC_PATH: &str = "build_core/var/ais_lookups.json";
/// Environment variable pointing at a replacement reference data file.
pub(crate) const LOOKUPS_PATH_ENV: &str = "KORRI_AIS_LOOKUPS_PATH";
/// Generated lookup file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_LOOKUP_FILE_NAME: &str = "generated_lookups.rs";
/// Maritime Identification Digits are allocated in the 2xx..7xx range.
pub(crate) const MID_RANGE: core::ops::RangeInclusive<u16> = 200..=799;
