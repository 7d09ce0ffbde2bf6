//! RISC-V Scalar Cryptography Encodings (Zknd, Zkne, Zknh, Zksed, Zksh).
//!
//! The AES and SM4 instructions are R-type under the OP major opcode with
//! `funct3 = 0`; the hash functions are unary I-type instructions under
//! OP-IMM with a fixed 12-bit selector immediate.

/// Function codes (funct7) for the R-type cryptography instructions.
pub mod funct7 {
    /// AES final-round decryption (AES64DS) - Zknd.
    pub const AES64DS: u32 = 0b0011101;
    /// AES final-round encryption (AES64ES) - Zkne.
    pub const AES64ES: u32 = 0b0011001;
    /// SM4 encrypt/decrypt round with bs=0 (SM4ED) - Zksed.
    pub const SM4ED_BS0: u32 = 0b0011000;
}

/// 12-bit selector immediates for the unary I-type hash instructions.
pub mod imm12 {
    /// SHA-256 sigma0 transformation (SHA256SIG0) - Zknh.
    pub const SHA256SIG0: i32 = 0b0001_0000_0010;
    /// SM3 P0 transformation (SM3P0) - Zksh.
    pub const SM3P0: i32 = 0b0001_0000_1000;
}

/// funct3 for the unary I-type hash instructions.
pub const FUNCT3_UNARY: u32 = 0b001;
