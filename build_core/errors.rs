//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, code generation, etc.).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the reference data document.
    #[error("[MESSAGE]:Invalid JSON format [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// A text table leaves a raw value without label, or labels a value twice.
    #[error("[MESSAGE]:Incomplete text table [TABLE]:{table}, [VALUE]:{value}")]
    IncompleteTable { table: String, value: u32 },

    /// A text table entry lies outside the declared table size.
    #[error("[MESSAGE]:Value out of table range [TABLE]:{table}, [VALUE]:{value}, [SIZE]:{size}")]
    ValueOutOfRange {
        table: String,
        value: u32,
        size: u32,
    },

    /// MID outside the ITU allocation range.
    #[error("[MESSAGE]:Invalid MID [MID]:{mid}")]
    InvalidMid { mid: u16 },

    /// Same MID listed twice in the nationality table.
    #[error("[MESSAGE]:Duplicate MID [MID]:{mid}")]
    DuplicateMid { mid: u16 },
}
