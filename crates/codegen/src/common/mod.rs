//! Common operand types shared by the encoder and the detection engine.

/// Register operand newtypes and ABI-named constants.
pub mod reg;

pub use reg::{FReg, VReg, XReg};
