//! Scalar cryptography emitters (Zknd, Zkne, Zknh, Zksed, Zksh).

use super::Assembler;
use crate::common::XReg;
use crate::isa::formats::{i_type, r_type};
use crate::isa::scalar_crypto::{FUNCT3_UNARY, funct7, imm12};
use crate::isa::rv64i;

impl Assembler {
    /// AES64DS: AES final-round decryption (Zknd).
    pub fn aes64ds(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            0,
            rs1.index(),
            rs2.index(),
            funct7::AES64DS,
        ));
    }

    /// AES64ES: AES final-round encryption (Zkne).
    pub fn aes64es(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            0,
            rs1.index(),
            rs2.index(),
            funct7::AES64ES,
        ));
    }

    /// SHA256SIG0: SHA-256 sigma0 transformation (Zknh).
    pub fn sha256sig0(&mut self, rd: XReg, rs1: XReg) {
        self.unary(rd, rs1, imm12::SHA256SIG0);
    }

    /// SM4ED: SM4 encrypt round on byte `bs` (Zksed).
    ///
    /// # Panics
    ///
    /// Panics if `bs` is not a valid 2-bit byte selector.
    pub fn sm4ed(&mut self, rd: XReg, rs1: XReg, rs2: XReg, bs: u32) {
        assert!(bs < 4, "SM4 byte selector out of range");
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            0,
            rs1.index(),
            rs2.index(),
            funct7::SM4ED_BS0 | bs << 5,
        ));
    }

    /// SM3P0: SM3 P0 transformation (Zksh).
    pub fn sm3p0(&mut self, rd: XReg, rs1: XReg) {
        self.unary(rd, rs1, imm12::SM3P0);
    }

    fn unary(&mut self, rd: XReg, rs1: XReg, selector: i32) {
        self.emit32(i_type(
            rv64i::OP_IMM,
            rd.index(),
            FUNCT3_UNARY,
            rs1.index(),
            selector,
        ));
    }
}
