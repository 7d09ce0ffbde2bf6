//! Probe Instruction Selector.
//!
//! Maps every catalog extension to a short instruction sequence that
//! executes successfully if, and only if, the hardware implements that
//! extension. The fault-trap probe runs these sequences under a SIGILL
//! handler; an extension whose sequence traps is recorded absent.
//!
//! # Scratch state
//!
//! Probe sequences touch only caller-saved registers and one pre-arranged
//! dummy cache line, so the generated program is a well-behaved C-ABI
//! function:
//!
//! * `t0` - representative-instruction scratch.
//! * `t1` - presence flag (the fault handler clears it on a trap).
//! * `t2` - results-buffer base.
//! * `t3` - dummy cache-line address for AMO/CBO operands.
//! * `a0` - dummy cache-line address for compressed loads (their base
//!   field only reaches x8-x15).
//! * `a1` - compressed ALU scratch.
//! * `f0`, `f10`, `v1` - float and vector scratch.
//!
//! Vector-class probes for instructions that require an active vector
//! configuration first issue `vsetivli` with the element width the
//! representative instruction needs.

use crate::asm::Assembler;
use crate::common::{FReg, VReg, XReg};
use crate::isa::rv64a::AmoOrdering;
use crate::isa::vector::Sew;

use super::ext::Extension;

/// How an extension's presence is established by the fault-trap probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeKind {
    /// A representative instruction is executed; a trap means absent.
    Executable,
    /// The extension reuses existing encodings (hints, ordering models,
    /// sub-profiles) and cannot be observed by execution; it is assumed
    /// present. A documented precision limitation of the trap strategy.
    AssumedPresent,
}

/// Classifies how `extension` is probed.
pub const fn probe_kind(extension: Extension) -> ProbeKind {
    match extension {
        Extension::I
        | Extension::M
        | Extension::A
        | Extension::F
        | Extension::D
        | Extension::C
        | Extension::V
        | Extension::Zba
        | Extension::Zbb
        | Extension::Zbs
        | Extension::Zicboz
        | Extension::Zbc
        | Extension::Zbkb
        | Extension::Zbkc
        | Extension::Zbkx
        | Extension::Zknd
        | Extension::Zkne
        | Extension::Zknh
        | Extension::Zksed
        | Extension::Zksh
        | Extension::Zvbb
        | Extension::Zvbc
        | Extension::Zvkb
        | Extension::Zvkg
        | Extension::Zvkned
        | Extension::Zvknha
        | Extension::Zvknhb
        | Extension::Zvksed
        | Extension::Zvksh
        | Extension::Zfh
        | Extension::Zfhmin
        | Extension::Zvfh
        | Extension::Zvfhmin
        | Extension::Zfa
        | Extension::Zacas
        | Extension::Zicond
        | Extension::Zca
        | Extension::Zcb
        | Extension::Zcd
        | Extension::Zcf => ProbeKind::Executable,
        Extension::Zkt
        | Extension::Zvkt
        | Extension::Zihintntl
        | Extension::Zihintpause
        | Extension::Ztso
        | Extension::Zve32x
        | Extension::Zve32f
        | Extension::Zve64x
        | Extension::Zve64f
        | Extension::Zve64d
        | Extension::Zimop
        | Extension::Zcmop
        | Extension::Zawrs => ProbeKind::AssumedPresent,
    }
}

/// Emits the probe sequence for `extension` into `asm`.
///
/// `AssumedPresent` extensions emit a `nop` so every catalog entry
/// occupies a probe slot and the presence flag survives untouched.
pub fn emit_probe(asm: &mut Assembler, extension: Extension) {
    match extension {
        Extension::I => asm.add(XReg::T0, XReg::T0, XReg::T0),
        Extension::M => asm.mul(XReg::T0, XReg::T0, XReg::T0),
        Extension::A => {
            asm.amoadd_d(AmoOrdering::AcquireRelease, XReg::T0, XReg::T0, XReg::T3);
        }
        Extension::F => asm.fadd_s(FReg::FT0, FReg::FT0, FReg::FT0),
        Extension::D => asm.fadd_d(FReg::FT0, FReg::FT0, FReg::FT0),
        Extension::C | Extension::Zca => asm.c_add(XReg::T0, XReg::T0),
        Extension::V => asm.vand_vv(VReg::V1, VReg::V1, VReg::V1),
        Extension::Zba => asm.sh1add(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zbb => asm.zext_h(XReg::T0, XReg::T0),
        Extension::Zbs => asm.bext(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zicboz => asm.cbo_zero(XReg::T3),
        Extension::Zbc => asm.clmulr(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zbkb => asm.pack(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zbkc => asm.clmul(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zbkx => asm.xperm4(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zknd => asm.aes64ds(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zkne => asm.aes64es(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zknh => asm.sha256sig0(XReg::T0, XReg::T0),
        Extension::Zksed => asm.sm4ed(XReg::T0, XReg::T0, XReg::T0, 0),
        Extension::Zksh => asm.sm3p0(XReg::T0, XReg::T0),
        Extension::Zvbb => asm.vctz_v(VReg::V1, VReg::V1),
        Extension::Zvkb => asm.vandn_vv(VReg::V1, VReg::V1, VReg::V1),
        Extension::Zvbc => {
            asm.vsetivli(XReg::ZERO, 1, Sew::E64);
            asm.vclmul_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zvkg => {
            asm.vsetivli(XReg::ZERO, 4, Sew::E32);
            asm.vghsh_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zvkned => {
            asm.vsetivli(XReg::ZERO, 4, Sew::E32);
            asm.vaesef_vv(VReg::V1, VReg::V1);
        }
        Extension::Zvknha => {
            asm.vsetivli(XReg::ZERO, 4, Sew::E32);
            asm.vsha2ms_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zvknhb => {
            asm.vsetivli(XReg::ZERO, 4, Sew::E64);
            asm.vsha2ms_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zvksed => {
            asm.vsetivli(XReg::ZERO, 4, Sew::E32);
            asm.vsm4r_vv(VReg::V1, VReg::V1);
        }
        Extension::Zvksh => {
            asm.vsetivli(XReg::ZERO, 8, Sew::E32);
            asm.vsm3me_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zfh => asm.fadd_h(FReg::FT0, FReg::FT0, FReg::FT0),
        Extension::Zfhmin => asm.fmv_x_h(XReg::T0, FReg::FT0),
        Extension::Zvfh => {
            asm.vsetivli(XReg::ZERO, 1, Sew::E16);
            asm.vfadd_vv(VReg::V1, VReg::V1, VReg::V1);
        }
        Extension::Zvfhmin => {
            asm.vsetivli(XReg::ZERO, 1, Sew::E16);
            asm.vfwcvt_f_f_v(VReg::V1, VReg::V1);
        }
        Extension::Zfa => asm.fli_s(FReg::FT0, 0),
        Extension::Zacas => {
            asm.amocas_d(AmoOrdering::AcquireRelease, XReg::T0, XReg::T0, XReg::T3);
        }
        Extension::Zicond => asm.czero_eqz(XReg::T0, XReg::T0, XReg::T0),
        Extension::Zcb => asm.c_not(XReg::A1),
        Extension::Zcd => asm.c_fld(FReg::FA0, 0, XReg::A0),
        Extension::Zcf => asm.c_flw(FReg::FA0, 0, XReg::A0),
        Extension::Zkt
        | Extension::Zvkt
        | Extension::Zihintntl
        | Extension::Zihintpause
        | Extension::Ztso
        | Extension::Zve32x
        | Extension::Zve32f
        | Extension::Zve64x
        | Extension::Zve64f
        | Extension::Zve64d
        | Extension::Zimop
        | Extension::Zcmop
        | Extension::Zawrs => asm.nop(),
    }
}
