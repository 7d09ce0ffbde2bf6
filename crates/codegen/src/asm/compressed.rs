//! Compressed instruction emitters (C, Zcb, Zcd, Zcf).
//!
//! The 16-bit load formats address registers through 3-bit fields, so the
//! operands are restricted to x8-x15 / f8-f15; out-of-range operands are a
//! programming error and panic at emission time.

use super::Assembler;
use crate::common::{FReg, XReg};
use crate::isa::formats::cr_type;
use crate::isa::rvc::{QUADRANT_0, QUADRANT_1, QUADRANT_2, q0, q1, q2};

impl Assembler {
    /// C.ADD: `rd = rd + rs2`.
    ///
    /// # Panics
    ///
    /// Panics if either operand is x0, which encodes a different
    /// instruction in this format.
    pub fn c_add(&mut self, rd: XReg, rs2: XReg) {
        assert!(
            rd != XReg::ZERO && rs2 != XReg::ZERO,
            "C.ADD operands must be nonzero registers"
        );
        self.emit16(cr_type(q2::C_ADD, rd.index(), rs2.index(), QUADRANT_2));
    }

    /// C.NOT: `rd = !rd` (Zcb).
    ///
    /// # Panics
    ///
    /// Panics if `rd` is outside the compressible range x8-x15.
    pub fn c_not(&mut self, rd: XReg) {
        self.emit16(q1::ZCB_ALU << 10 | (rd.compressed() as u16) << 7 | q1::C_NOT << 2 | QUADRANT_1);
    }

    /// C.FLD: load a double-precision value from `base + uimm` (Zcd).
    ///
    /// # Panics
    ///
    /// Panics if the registers are outside the compressible range or the
    /// offset is not a doubleword-aligned value below 256.
    pub fn c_fld(&mut self, fd: FReg, uimm: u32, base: XReg) {
        assert!(uimm < 256 && uimm % 8 == 0, "C.FLD offset invalid");
        self.emit16(
            q0::C_FLD << 13
                | (((uimm >> 3) & 0x7) as u16) << 10
                | (base.compressed() as u16) << 7
                | (((uimm >> 6) & 0x3) as u16) << 5
                | (fd.compressed() as u16) << 2
                | QUADRANT_0,
        );
    }

    /// C.FLW: load a single-precision value from `base + uimm` (Zcf).
    ///
    /// This is an RV32-only encoding; on RV64 the same bit pattern decodes
    /// as C.LD.
    ///
    /// # Panics
    ///
    /// Panics if the registers are outside the compressible range or the
    /// offset is not a word-aligned value below 128.
    pub fn c_flw(&mut self, fd: FReg, uimm: u32, base: XReg) {
        assert!(uimm < 128 && uimm % 4 == 0, "C.FLW offset invalid");
        self.emit16(
            q0::C_FLW << 13
                | (((uimm >> 3) & 0x7) as u16) << 10
                | (base.compressed() as u16) << 7
                | (((uimm >> 2) & 0x1) as u16) << 6
                | (((uimm >> 6) & 0x1) as u16) << 5
                | (fd.compressed() as u16) << 2
                | QUADRANT_0,
        );
    }
}
