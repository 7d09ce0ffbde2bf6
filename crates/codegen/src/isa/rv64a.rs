//! RISC-V Atomic Extension (A, Zacas) Encodings.
//!
//! Atomic memory operations occupy the AMO major opcode; the `funct5`
//! field (bits 31-27) selects the operation and bits 26/25 carry the
//! acquire/release ordering annotations.

/// Atomic memory operation major opcode.
pub const OP_AMO: u32 = 0b0101111;

/// Memory ordering annotation carried in bits 26 (aq) and 25 (rl).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmoOrdering {
    /// No ordering constraint.
    Relaxed = 0b00,
    /// Release semantics.
    Release = 0b01,
    /// Acquire semantics.
    Acquire = 0b10,
    /// Sequentially consistent (aq and rl both set).
    AcquireRelease = 0b11,
}

/// Function codes (funct3) selecting the access width.
pub mod funct3 {
    /// 32-bit atomic access.
    pub const WORD: u32 = 0b010;
    /// 64-bit atomic access.
    pub const DOUBLE: u32 = 0b011;
}

/// Function codes (funct5, bits 31-27) selecting the atomic operation.
pub mod funct5 {
    /// Atomic Add.
    pub const AMOADD: u32 = 0b00000;
    /// Atomic Compare-and-Swap (Zacas).
    pub const AMOCAS: u32 = 0b00101;
}
