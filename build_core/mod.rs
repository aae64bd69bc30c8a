//! Workspace for the build script: data structures and code generators.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_lookups;
pub mod name_helpers;
