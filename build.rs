//! Cargo build script: generates the AIS lookup tables.

mod build_core;
use crate::build_core::{
    conf::*, domain::LookupDocument, errors::BuildError, gen_lookups::run_lookup_gen,
};

use std::fs;
use std::path::PathBuf;

// Status, maneuver, EPFD, ship type and aid type labels plus the MID table live
// in `build_core/var/ais_lookups.json`. This script validates that document and
// turns it into static arrays and enumerations so the decoder never parses
// reference data at runtime.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    // Tell Cargo to rerun this script whenever one of these files changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", LOOKUPS_DOC_PATH);
    println!("cargo:rerun-if-env-changed={}", LOOKUPS_PATH_ENV);

    // 1. Locate the reference data.
    // Priority order:
    //   1. KORRI_AIS_LOOKUPS_PATH environment variable (absolute or relative path)
    //   2. Default document shipped with the crate
    let default_doc_path = PathBuf::from(LOOKUPS_DOC_PATH);
    let user_doc_path = std::env::var(LOOKUPS_PATH_ENV).ok().map(PathBuf::from);

    let doc_path = match user_doc_path {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom AIS lookups from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom lookups path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default AIS lookups");
            default_doc_path
        }
        None => default_doc_path,
    };

    // 2. Parse and generate.
    let doc_string = fs::read_to_string(&doc_path).map_err(|e| BuildError::ReadFile {
        path: doc_path.clone(),
        source: e,
    })?;
    let doc: LookupDocument = serde_json::from_str(&doc_string)?;
    let buffer_lookup_code = run_lookup_gen(&doc)?;

    // 3. Write the generated code into `OUT_DIR`.
    // The `include!` in `src/protocol/lookups/mod.rs` pulls it in at compile time.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let lookup_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_LOOKUP_FILE_NAME);

    fs::write(&lookup_file_path, &buffer_lookup_code).map_err(|e| BuildError::WriteFile {
        path: lookup_file_path,
        source: e,
    })?;

    Ok(())
}
