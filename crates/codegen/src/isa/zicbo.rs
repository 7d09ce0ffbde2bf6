//! RISC-V Cache-Block Operation Encodings (Zicboz).
//!
//! The CBO instructions are I-type under MISC-MEM with `rd = x0`; the
//! 12-bit immediate selects the operation.

/// funct3 for all cache-block operations.
pub const FUNCT3_CBO: u32 = 0b010;

/// Immediate selector for CBO.ZERO (zero a full cache block).
pub const CBO_ZERO: i32 = 0b0000_0000_0100;
