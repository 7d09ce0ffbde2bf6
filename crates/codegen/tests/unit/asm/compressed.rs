//! Compressed Encoding Tests (C, Zcb, Zcd, Zcf).

use pretty_assertions::assert_eq;
use rvjit_core::Assembler;
use rvjit_core::common::{FReg, XReg};

use super::encode16;

#[test]
fn c_add_t0_t0() {
    assert_eq!(encode16(|a| a.c_add(XReg::T0, XReg::T0)), 0x9296);
}

#[test]
#[should_panic(expected = "C.ADD operands must be nonzero")]
fn c_add_rejects_x0() {
    let mut asm = Assembler::new(64);
    asm.c_add(XReg::ZERO, XReg::T0);
}

#[test]
fn c_not_a1() {
    assert_eq!(encode16(|a| a.c_not(XReg::A1)), 0x9DF5);
}

#[test]
#[should_panic(expected = "not addressable by a compressed format")]
fn c_not_rejects_uncompressible_register() {
    let mut asm = Assembler::new(64);
    asm.c_not(XReg::T0);
}

#[test]
fn c_fld_fa0_from_a0() {
    assert_eq!(encode16(|a| a.c_fld(FReg::FA0, 0, XReg::A0)), 0x2108);
    // uimm[5:3] lands in bits 12:10, uimm[7:6] in bits 6:5.
    assert_eq!(encode16(|a| a.c_fld(FReg::FA0, 8, XReg::A0)), 0x2508);
    assert_eq!(encode16(|a| a.c_fld(FReg::FA0, 64, XReg::A0)), 0x2128);
}

#[test]
fn c_flw_fa0_from_a0() {
    assert_eq!(encode16(|a| a.c_flw(FReg::FA0, 0, XReg::A0)), 0x6108);
}

#[test]
#[should_panic(expected = "C.FLD offset invalid")]
fn c_fld_rejects_misaligned_offset() {
    let mut asm = Assembler::new(64);
    asm.c_fld(FReg::FA0, 4, XReg::A0);
}
