//! Atomic Memory Operation Encoding Tests (A, Zacas).

use pretty_assertions::assert_eq;
use rvjit_core::common::XReg;
use rvjit_core::isa::rv64a::AmoOrdering;

use super::encode32;

#[test]
fn amoadd_d_aqrl() {
    assert_eq!(
        encode32(|a| a.amoadd_d(AmoOrdering::AcquireRelease, XReg::T0, XReg::T0, XReg::T3)),
        0x065E32AF
    );
}

#[test]
fn amoadd_d_relaxed_clears_ordering_bits() {
    assert_eq!(
        encode32(|a| a.amoadd_d(AmoOrdering::Relaxed, XReg::T0, XReg::T0, XReg::T3)),
        0x005E32AF
    );
}

#[test]
fn amocas_d_aqrl() {
    assert_eq!(
        encode32(|a| a.amocas_d(AmoOrdering::AcquireRelease, XReg::T0, XReg::T0, XReg::T3)),
        0x2E5E32AF
    );
}
