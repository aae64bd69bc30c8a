//! `korri-ais` library: decodes AIS vessel-tracking messages carried in
//! AIVDM/AIVDO NMEA sentences. The crate exposes the infrastructure modules
//! (six-bit de-armoring, bit extraction, text decoding), the protocol logic
//! (sentence parsing, fragment reassembly, per-type message layouts, lookup
//! tables) and the [`AisDecoder`](protocol::decoder::AisDecoder) engine tying
//! them together.
//==================================================================================
/// Data contract shared by the layout tables and the extraction engine.
pub mod core;
/// Sentence, reassembly and message decoding errors.
pub mod error;
/// Bit-level primitives: payload de-armoring, bit reader, six-bit text.
pub mod infra;
/// AIS protocol implementation: sentences, reassembly, messages, lookups,
/// decoder engine.
pub mod protocol;
//==================================================================================
