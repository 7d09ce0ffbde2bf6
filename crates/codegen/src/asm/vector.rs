//! Vector instruction emitters (V, Zvbb, Zvbc, Zvkb, Zvf*, Zvk*).
//!
//! All vector arithmetic here is emitted unmasked. Operations from the
//! cryptography suites are element-group instructions and ignore masking
//! by construction.

use super::Assembler;
use crate::common::{VReg, XReg};
use crate::isa::vector::{OP_V, OP_VE, Sew, VM_UNMASKED, funct3, funct6, vs1};

impl Assembler {
    /// VSETIVLI: configure `avl` elements of the given width with LMUL=1.
    ///
    /// # Panics
    ///
    /// Panics if `avl` does not fit the 5-bit immediate form.
    pub fn vsetivli(&mut self, rd: XReg, avl: u32, sew: Sew) {
        assert!(avl < 32, "vsetivli immediate AVL out of range");
        self.emit32(
            0b11 << 30
                | (sew.vtype() & 0x3FF) << 20
                | avl << 15
                | funct3::OPCFG << 12
                | rd.index() << 7
                | OP_V,
        );
    }

    /// VAND.VV: `vd = vs2 & vs1`.
    pub fn vand_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_V, funct6::VAND, vs2.index(), vs1.index(), funct3::OPIVV, vd);
    }

    /// VANDN.VV: `vd = vs2 & !vs1` (Zvkb).
    pub fn vandn_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_V, funct6::VANDN, vs2.index(), vs1.index(), funct3::OPIVV, vd);
    }

    /// VCTZ.V: per-element count of trailing zeros (Zvbb).
    pub fn vctz_v(&mut self, vd: VReg, vs2: VReg) {
        self.vec_rr(OP_V, funct6::VXUNARY, vs2.index(), vs1::VCTZ, funct3::OPMVV, vd);
    }

    /// VFADD.VV: per-element floating-point add.
    pub fn vfadd_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_V, funct6::VFADD, vs2.index(), vs1.index(), funct3::OPFVV, vd);
    }

    /// VFWCVT.F.F.V: widening float-to-float conversion (Zvfhmin at e16).
    pub fn vfwcvt_f_f_v(&mut self, vd: VReg, vs2: VReg) {
        self.vec_rr(
            OP_V,
            funct6::VFUNARY0,
            vs2.index(),
            vs1::VFWCVT_F_F,
            funct3::OPFVV,
            vd,
        );
    }

    /// VCLMUL.VV: per-element carry-less multiply (Zvbc).
    pub fn vclmul_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_V, funct6::VCLMUL, vs2.index(), vs1.index(), funct3::OPMVV, vd);
    }

    /// VGHSH.VV: GHASH add-multiply step (Zvkg).
    pub fn vghsh_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_VE, funct6::VGHSH, vs2.index(), vs1.index(), funct3::OPMVV, vd);
    }

    /// VAESEF.VV: AES encrypt final round (Zvkned).
    pub fn vaesef_vv(&mut self, vd: VReg, vs2: VReg) {
        self.vec_rr(OP_VE, funct6::VAES, vs2.index(), vs1::VAESEF, funct3::OPMVV, vd);
    }

    /// VSHA2MS.VV: SHA-2 message schedule (Zvknha/Zvknhb per SEW).
    pub fn vsha2ms_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_VE, funct6::VSHA2MS, vs2.index(), vs1.index(), funct3::OPMVV, vd);
    }

    /// VSM4R.VV: SM4 rounds (Zvksed).
    pub fn vsm4r_vv(&mut self, vd: VReg, vs2: VReg) {
        self.vec_rr(OP_VE, funct6::VAES, vs2.index(), vs1::VSM4R, funct3::OPMVV, vd);
    }

    /// VSM3ME.VV: SM3 message expansion (Zvksh).
    pub fn vsm3me_vv(&mut self, vd: VReg, vs2: VReg, vs1: VReg) {
        self.vec_rr(OP_VE, funct6::VSM3ME, vs2.index(), vs1.index(), funct3::OPMVV, vd);
    }

    fn vec_rr(&mut self, opcode: u32, funct6: u32, vs2: u32, vs1_field: u32, funct3: u32, vd: VReg) {
        self.emit32(
            funct6 << 26
                | VM_UNMASKED << 25
                | vs2 << 20
                | vs1_field << 15
                | funct3 << 12
                | vd.index() << 7
                | opcode,
        );
    }
}
