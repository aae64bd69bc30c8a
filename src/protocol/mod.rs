//! High-level components of the AIS protocol: lookup tables, MMSI handling,
//! sentence envelope, fragment reassembly, message layouts and the decoder
//! engine.
pub mod decoder;
pub mod lookups;
pub mod messages;
pub mod mmsi;
pub mod sentence;
pub mod stream;
pub mod transport;
