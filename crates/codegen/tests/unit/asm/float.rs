//! Scalar Floating-Point Encoding Tests (F, D, Zfh, Zfhmin, Zfa).
//!
//! Arithmetic instructions carry the dynamic rounding mode (funct3 = 111).

use pretty_assertions::assert_eq;
use rvjit_core::common::{FReg, XReg};

use super::encode32;

#[test]
fn fadd_s_ft0() {
    assert_eq!(encode32(|a| a.fadd_s(FReg::FT0, FReg::FT0, FReg::FT0)), 0x00007053);
}

#[test]
fn fadd_d_ft0() {
    assert_eq!(encode32(|a| a.fadd_d(FReg::FT0, FReg::FT0, FReg::FT0)), 0x02007053);
}

#[test]
fn fadd_h_ft0() {
    assert_eq!(encode32(|a| a.fadd_h(FReg::FT0, FReg::FT0, FReg::FT0)), 0x04007053);
}

#[test]
fn fmv_x_h_t0_ft0() {
    assert_eq!(encode32(|a| a.fmv_x_h(XReg::T0, FReg::FT0)), 0xE40002D3);
}

#[test]
fn fli_s_constant_zero() {
    assert_eq!(encode32(|a| a.fli_s(FReg::FT0, 0)), 0xF0100053);
}

#[test]
fn fli_s_constant_index_lands_in_rs1() {
    // Selector 1 (minimum normal) occupies the rs1 field.
    assert_eq!(encode32(|a| a.fli_s(FReg::FT0, 1)), 0xF0108053);
}
