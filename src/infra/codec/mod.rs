//! Bit-level codec for AIS payloads.
//!
//! * [`armor`] turns the ASCII-armored payload characters into bits;
//! * [`bits`] stores the bits and extracts unsigned/signed fields;
//! * [`sixbit`] decodes packed text fields;
//! * [`engine`] reads fields described by static layout descriptors;
//! * [`traits`] bridges decoded message bodies and the engine.
pub mod armor;
pub mod bits;
pub mod engine;
pub mod sixbit;
pub mod traits;
