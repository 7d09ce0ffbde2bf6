//! Atomic memory operation emitters (A, Zacas).

use super::Assembler;
use crate::common::XReg;
use crate::isa::formats::r_type;
use crate::isa::rv64a::{self, AmoOrdering};

impl Assembler {
    /// AMOADD.D: atomically add `src` to the doubleword at `base`,
    /// writing the old value to `rd`.
    pub fn amoadd_d(&mut self, ord: AmoOrdering, rd: XReg, src: XReg, base: XReg) {
        self.emit32(r_type(
            rv64a::OP_AMO,
            rd.index(),
            rv64a::funct3::DOUBLE,
            base.index(),
            src.index(),
            rv64a::funct5::AMOADD << 2 | ord as u32,
        ));
    }

    /// AMOCAS.D: atomically compare-and-swap the doubleword at `base`
    /// against `rd`, installing `src` on a match (Zacas).
    pub fn amocas_d(&mut self, ord: AmoOrdering, rd: XReg, src: XReg, base: XReg) {
        self.emit32(r_type(
            rv64a::OP_AMO,
            rd.index(),
            rv64a::funct3::DOUBLE,
            base.index(),
            src.index(),
            rv64a::funct5::AMOCAS << 2 | ord as u32,
        ));
    }
}
