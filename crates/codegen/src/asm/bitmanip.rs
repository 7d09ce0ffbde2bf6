//! Bit-manipulation and conditional-zero emitters (Zb*, Zicond).

use super::Assembler;
use crate::common::XReg;
use crate::isa::bitmanip::{funct3, funct7, zicond};
use crate::isa::formats::r_type;
use crate::isa::rv64i;

impl Assembler {
    /// SH1ADD: `rd = (rs1 << 1) + rs2` (Zba).
    pub fn sh1add(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::SH1ADD,
            rs1.index(),
            rs2.index(),
            funct7::SHADD,
        ));
    }

    /// ZEXT.H: zero-extend the low halfword of `rs1` (Zbb; PACKW with x0).
    pub fn zext_h(&mut self, rd: XReg, rs1: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG_32,
            rd.index(),
            funct3::PACK,
            rs1.index(),
            XReg::ZERO.index(),
            funct7::PACK,
        ));
    }

    /// PACK: concatenate the low halves of `rs1` and `rs2` (Zbkb).
    pub fn pack(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::PACK,
            rs1.index(),
            rs2.index(),
            funct7::PACK,
        ));
    }

    /// BEXT: extract the bit of `rs1` selected by `rs2` (Zbs).
    pub fn bext(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::BEXT,
            rs1.index(),
            rs2.index(),
            funct7::BEXT,
        ));
    }

    /// CLMUL: low half of the carry-less product (Zbc, Zbkc).
    pub fn clmul(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::CLMUL,
            rs1.index(),
            rs2.index(),
            funct7::CLMUL,
        ));
    }

    /// CLMULR: bit-reversed carry-less product (Zbc only).
    pub fn clmulr(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::CLMULR,
            rs1.index(),
            rs2.index(),
            funct7::CLMUL,
        ));
    }

    /// XPERM4: nibble crossbar permutation (Zbkx).
    pub fn xperm4(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            funct3::XPERM4,
            rs1.index(),
            rs2.index(),
            funct7::XPERM,
        ));
    }

    /// CZERO.EQZ: `rd = (rs2 == 0) ? 0 : rs1` (Zicond).
    pub fn czero_eqz(&mut self, rd: XReg, rs1: XReg, rs2: XReg) {
        self.emit32(r_type(
            rv64i::OP_REG,
            rd.index(),
            zicond::EQZ,
            rs1.index(),
            rs2.index(),
            zicond::CZERO,
        ));
    }
}
