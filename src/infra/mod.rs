//! Infrastructure layer: everything that works on raw payload characters and
//! bits without knowing which AIS message they belong to.
pub mod codec;
