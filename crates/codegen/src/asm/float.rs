//! Scalar floating-point emitters (F, D, Zfh, Zfhmin, Zfa).
//!
//! Arithmetic instructions are emitted with the dynamic rounding mode.

use super::Assembler;
use crate::common::{FReg, XReg};
use crate::isa::float;
use crate::isa::formats::r_type;

impl Assembler {
    /// FADD.S: single-precision `rd = rs1 + rs2`.
    pub fn fadd_s(&mut self, rd: FReg, rs1: FReg, rs2: FReg) {
        self.emit32(r_type(
            float::OP_FP,
            rd.index(),
            float::RM_DYN,
            rs1.index(),
            rs2.index(),
            float::funct7::FADD_S,
        ));
    }

    /// FADD.D: double-precision `rd = rs1 + rs2`.
    pub fn fadd_d(&mut self, rd: FReg, rs1: FReg, rs2: FReg) {
        self.emit32(r_type(
            float::OP_FP,
            rd.index(),
            float::RM_DYN,
            rs1.index(),
            rs2.index(),
            float::funct7::FADD_D,
        ));
    }

    /// FADD.H: half-precision `rd = rs1 + rs2` (Zfh).
    pub fn fadd_h(&mut self, rd: FReg, rs1: FReg, rs2: FReg) {
        self.emit32(r_type(
            float::OP_FP,
            rd.index(),
            float::RM_DYN,
            rs1.index(),
            rs2.index(),
            float::funct7::FADD_H,
        ));
    }

    /// FMV.X.H: move the half-precision bits of `rs1` into `rd` (Zfhmin).
    pub fn fmv_x_h(&mut self, rd: XReg, rs1: FReg) {
        self.emit32(r_type(
            float::OP_FP,
            rd.index(),
            0,
            rs1.index(),
            0,
            float::funct7::FMV_X_H,
        ));
    }

    /// FLI.S: load the constant selected by `index` into `rd` (Zfa).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid 5-bit constant selector.
    pub fn fli_s(&mut self, rd: FReg, index: u32) {
        assert!(index < 32, "FLI constant selector out of range");
        self.emit32(r_type(
            float::OP_FP,
            rd.index(),
            0,
            index,
            float::rs2::FLI,
            float::funct7::FMV_FLI_S,
        ));
    }
}
