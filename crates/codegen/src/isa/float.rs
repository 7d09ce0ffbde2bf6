//! RISC-V Floating-Point Encodings (F, D, Zfh, Zfhmin, Zfa).
//!
//! All scalar floating-point computation shares the OP-FP major opcode.
//! The `funct7` field selects the operation and precision; the `funct3`
//! field carries the rounding mode for arithmetic operations.

/// Floating-point computation major opcode.
pub const OP_FP: u32 = 0b1010011;

/// Dynamic rounding mode (use the mode in the `frm` register).
pub const RM_DYN: u32 = 0b111;

/// Function codes (funct7) selecting operation and precision.
pub mod funct7 {
    /// Single-precision add.
    pub const FADD_S: u32 = 0b0000000;
    /// Double-precision add.
    pub const FADD_D: u32 = 0b0000001;
    /// Half-precision add (Zfh).
    pub const FADD_H: u32 = 0b0000010;
    /// Move half-precision bits to integer register (Zfhmin).
    pub const FMV_X_H: u32 = 0b1110010;
    /// Load-immediate group shared with FMV.W.X; FLI is selected by rs2 (Zfa).
    pub const FMV_FLI_S: u32 = 0b1111000;
}

/// rs2 selector values within shared funct7 groups.
pub mod rs2 {
    /// FMV.W.X within the `FMV_FLI_S` group.
    pub const FMV_W_X: u32 = 0b00000;
    /// FLI.S within the `FMV_FLI_S` group (Zfa).
    pub const FLI: u32 = 0b00001;
}
