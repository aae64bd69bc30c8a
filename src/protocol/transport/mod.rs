//! AIS transport layer: reassembly of multi-fragment messages and the
//! line source abstraction feeding the decoder.

pub mod assembler;
pub mod traits;
