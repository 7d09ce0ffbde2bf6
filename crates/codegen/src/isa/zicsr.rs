//! RISC-V Control and Status Register Encodings.
//!
//! Defines the SYSTEM major opcode, the CSR access function codes, and the
//! addresses of the unprivileged CSRs this crate reads.

/// SYSTEM major opcode (CSR access, ECALL/EBREAK).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Function codes (funct3) for CSR access.
pub mod funct3 {
    /// Atomic read and set bits (CSRRS); with rs1=x0 this is a pure read.
    pub const CSRRS: u32 = 0b010;
}

/// Vector length in bits CSR address (read-only).
pub const VL: u32 = 0xC20;

/// Vector data type CSR address (read-only).
pub const VTYPE: u32 = 0xC21;

/// Vector register length in bytes CSR address (read-only).
pub const VLENB: u32 = 0xC22;
