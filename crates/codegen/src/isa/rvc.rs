//! RISC-V Compressed (C, Zcb, Zcd, Zcf) Encodings.
//!
//! Compressed instructions are 16-bit parcels divided into three quadrants
//! by their lowest two bits. This module defines the quadrants and the
//! function codes for the compressed instructions the emitter produces.

/// Quadrant 0 (bits 1:0 = 00): loads and stores.
pub const QUADRANT_0: u16 = 0b00;
/// Quadrant 1 (bits 1:0 = 01): immediates, ALU, control flow.
pub const QUADRANT_1: u16 = 0b01;
/// Quadrant 2 (bits 1:0 = 10): register ops and stack-relative accesses.
pub const QUADRANT_2: u16 = 0b10;

/// Instructions in Quadrant 0 (funct3, bits 15:13).
pub mod q0 {
    /// Compressed Floating-point Load Double (C.FLD) - Zcd.
    pub const C_FLD: u16 = 0b001;
    /// Compressed Floating-point Load Word (C.FLW) - Zcf, RV32 only.
    pub const C_FLW: u16 = 0b011;
}

/// Instructions in Quadrant 1 (funct codes).
pub mod q1 {
    /// Zcb ALU group prefix (bits 15:10) shared by C.NOT, C.ZEXT.*, C.SEXT.*.
    pub const ZCB_ALU: u16 = 0b100111;
    /// C.NOT selector (bits 6:2) within the Zcb ALU group.
    pub const C_NOT: u16 = 0b11101;
}

/// Instructions in Quadrant 2 (funct4, bits 15:12).
pub mod q2 {
    /// Compressed Add (C.ADD; rd and rs2 both nonzero).
    pub const C_ADD: u16 = 0b1001;
}
