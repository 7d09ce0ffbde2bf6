//! RISC-V Bit-Manipulation Encodings (Zba, Zbb, Zbs, Zbc, Zbkb, Zbkc, Zbkx)
//! plus the conditional-zero instructions (Zicond).
//!
//! These extensions reuse the OP and OP-32 major opcodes; each instruction
//! is a (funct7, funct3) pair.

/// Function codes (funct7) for the bit-manipulation groups.
pub mod funct7 {
    /// Shift-and-add group (SH1ADD, SH2ADD, SH3ADD) - Zba.
    pub const SHADD: u32 = 0b0010000;
    /// Pack group (PACK, PACKH, PACKW) - Zbkb; ZEXT.H is PACKW with rs2=x0.
    pub const PACK: u32 = 0b0000100;
    /// Single-bit extract group (BEXT) - Zbs.
    pub const BEXT: u32 = 0b0100100;
    /// Carry-less multiply group (CLMUL, CLMULR, CLMULH) - Zbc/Zbkc.
    pub const CLMUL: u32 = 0b0000101;
    /// Crossbar permutation group (XPERM4, XPERM8) - Zbkx.
    pub const XPERM: u32 = 0b0010100;
}

/// Function codes (funct3) for the bit-manipulation instructions.
pub mod funct3 {
    /// SH1ADD.
    pub const SH1ADD: u32 = 0b010;
    /// PACK / PACKW.
    pub const PACK: u32 = 0b100;
    /// BEXT.
    pub const BEXT: u32 = 0b101;
    /// CLMUL (low half of the carry-less product).
    pub const CLMUL: u32 = 0b001;
    /// CLMULR (reversed carry-less product) - Zbc only.
    pub const CLMULR: u32 = 0b010;
    /// XPERM4 (nibble crossbar permutation).
    pub const XPERM4: u32 = 0b010;
}

/// Function codes for the integer conditional-zero instructions (Zicond).
pub mod zicond {
    /// funct7 group for CZERO.EQZ / CZERO.NEZ.
    pub const CZERO: u32 = 0b0000111;
    /// CZERO.EQZ.
    pub const EQZ: u32 = 0b101;
}
