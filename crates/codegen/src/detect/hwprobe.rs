//! Kernel Capability Syscall Probe.
//!
//! This module is the preferred capability-detection strategy. It provides:
//! 1. **Batched Query:** One `riscv_hwprobe` syscall with a fixed
//!    two-entry request vector, so the kernel is asked exactly once no
//!    matter how many extensions are later queried.
//! 2. **Interpretation:** A pure mapping from the returned bitmaps to
//!    per-extension booleans; the base-behavior bitmap is compared for
//!    exact equality against the integer+multiply+atomic baseline.
//! 3. **Fallback Signal:** A negative syscall return (old kernel) yields
//!    `None` and routes the caller to the fault-trap probe; it is never an
//!    error.

use super::ext::Extension;

/// Request key for the base-behavior bitmap.
pub const KEY_BASE_BEHAVIOR: i64 = 3;

/// Request key for the first extension-feature bitmap word.
pub const KEY_IMA_EXT_0: i64 = 4;

/// Base-behavior value reporting integer, multiply, and atomic support.
pub const BASE_BEHAVIOR_IMA: u64 = 1 << 0;

/// Single-/double-precision floating point (F and D together).
pub const EXT_FD: u64 = 1 << 0;
/// Compressed instructions.
pub const EXT_C: u64 = 1 << 1;
/// Vector operations.
pub const EXT_V: u64 = 1 << 2;
/// Address generation.
pub const EXT_ZBA: u64 = 1 << 3;
/// Basic bit manipulation.
pub const EXT_ZBB: u64 = 1 << 4;
/// Single-bit operations.
pub const EXT_ZBS: u64 = 1 << 5;
/// Cache-block zero.
pub const EXT_ZICBOZ: u64 = 1 << 6;
/// Carry-less multiplication.
pub const EXT_ZBC: u64 = 1 << 7;
/// Bit manipulation for cryptography.
pub const EXT_ZBKB: u64 = 1 << 8;
/// Carry-less multiplication for cryptography.
pub const EXT_ZBKC: u64 = 1 << 9;
/// Crossbar permutations.
pub const EXT_ZBKX: u64 = 1 << 10;
/// AES decryption.
pub const EXT_ZKND: u64 = 1 << 11;
/// AES encryption.
pub const EXT_ZKNE: u64 = 1 << 12;
/// SHA-2 hash functions.
pub const EXT_ZKNH: u64 = 1 << 13;
/// SM4 block cipher.
pub const EXT_ZKSED: u64 = 1 << 14;
/// SM3 hash function.
pub const EXT_ZKSH: u64 = 1 << 15;
/// Data-independent execution latency.
pub const EXT_ZKT: u64 = 1 << 16;
/// Vector basic bit manipulation.
pub const EXT_ZVBB: u64 = 1 << 17;
/// Vector carry-less multiplication.
pub const EXT_ZVBC: u64 = 1 << 18;
/// Vector bit manipulation for cryptography.
pub const EXT_ZVKB: u64 = 1 << 19;
/// Vector GHASH.
pub const EXT_ZVKG: u64 = 1 << 20;
/// Vector AES block cipher.
pub const EXT_ZVKNED: u64 = 1 << 21;
/// Vector SHA-256.
pub const EXT_ZVKNHA: u64 = 1 << 22;
/// Vector SHA-256 and SHA-512.
pub const EXT_ZVKNHB: u64 = 1 << 23;
/// Vector SM4 block cipher.
pub const EXT_ZVKSED: u64 = 1 << 24;
/// Vector SM3 hash function.
pub const EXT_ZVKSH: u64 = 1 << 25;
/// Vector data-independent execution latency.
pub const EXT_ZVKT: u64 = 1 << 26;
/// Half-precision floating point.
pub const EXT_ZFH: u64 = 1 << 27;
/// Minimal half-precision floating point.
pub const EXT_ZFHMIN: u64 = 1 << 28;
/// Non-temporal locality hints.
pub const EXT_ZIHINTNTL: u64 = 1 << 29;
/// Vector half-precision floating point.
pub const EXT_ZVFH: u64 = 1 << 30;
/// Minimal vector half-precision floating point.
pub const EXT_ZVFHMIN: u64 = 1 << 31;
/// Additional floating-point instructions.
pub const EXT_ZFA: u64 = 1 << 32;
/// Total store ordering memory model.
pub const EXT_ZTSO: u64 = 1 << 33;
/// Atomic compare-and-swap.
pub const EXT_ZACAS: u64 = 1 << 34;
/// Integer conditional operations.
pub const EXT_ZICOND: u64 = 1 << 35;
/// Pause hint.
pub const EXT_ZIHINTPAUSE: u64 = 1 << 36;
/// Vector embedded subset, 32-bit integer.
pub const EXT_ZVE32X: u64 = 1 << 37;
/// Vector embedded subset, 32-bit with single-precision float.
pub const EXT_ZVE32F: u64 = 1 << 38;
/// Vector embedded subset, 64-bit integer.
pub const EXT_ZVE64X: u64 = 1 << 39;
/// Vector embedded subset, 64-bit with single-precision float.
pub const EXT_ZVE64F: u64 = 1 << 40;
/// Vector embedded subset, 64-bit with double-precision float.
pub const EXT_ZVE64D: u64 = 1 << 41;
/// May-be-operations (integer).
pub const EXT_ZIMOP: u64 = 1 << 42;
/// Compressed base subset.
pub const EXT_ZCA: u64 = 1 << 43;
/// Additional simple compressed instructions.
pub const EXT_ZCB: u64 = 1 << 44;
/// Compressed double-precision loads and stores.
pub const EXT_ZCD: u64 = 1 << 45;
/// Compressed single-precision loads and stores.
pub const EXT_ZCF: u64 = 1 << 46;
/// May-be-operations (compressed).
pub const EXT_ZCMOP: u64 = 1 << 47;
/// Wait-on-reservation-set instructions.
pub const EXT_ZAWRS: u64 = 1 << 48;

/// The memoizable result of one batched kernel capability query.
///
/// Hardware capabilities cannot change while a process runs, so one
/// snapshot is fetched per process and every later query interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HwprobeSnapshot {
    /// Base-behavior bitmap (`KEY_BASE_BEHAVIOR`).
    pub base_behavior: u64,
    /// First extension-feature bitmap word (`KEY_IMA_EXT_0`).
    pub ext0: u64,
}

impl HwprobeSnapshot {
    /// Interprets the snapshot for one extension.
    ///
    /// I, M, and A are reported together: they are present only when the
    /// base-behavior bitmap equals the IMA baseline exactly; any deviating
    /// bit makes all three absent. Every other extension tests exactly one
    /// bit of the feature bitmap. F and D share a kernel bit.
    pub const fn has(&self, extension: Extension) -> bool {
        match extension {
            Extension::I | Extension::M | Extension::A => {
                self.base_behavior == BASE_BEHAVIOR_IMA
            }
            Extension::F | Extension::D => self.ext0 & EXT_FD != 0,
            Extension::C => self.ext0 & EXT_C != 0,
            Extension::V => self.ext0 & EXT_V != 0,
            Extension::Zba => self.ext0 & EXT_ZBA != 0,
            Extension::Zbb => self.ext0 & EXT_ZBB != 0,
            Extension::Zbs => self.ext0 & EXT_ZBS != 0,
            Extension::Zicboz => self.ext0 & EXT_ZICBOZ != 0,
            Extension::Zbc => self.ext0 & EXT_ZBC != 0,
            Extension::Zbkb => self.ext0 & EXT_ZBKB != 0,
            Extension::Zbkc => self.ext0 & EXT_ZBKC != 0,
            Extension::Zbkx => self.ext0 & EXT_ZBKX != 0,
            Extension::Zknd => self.ext0 & EXT_ZKND != 0,
            Extension::Zkne => self.ext0 & EXT_ZKNE != 0,
            Extension::Zknh => self.ext0 & EXT_ZKNH != 0,
            Extension::Zksed => self.ext0 & EXT_ZKSED != 0,
            Extension::Zksh => self.ext0 & EXT_ZKSH != 0,
            Extension::Zkt => self.ext0 & EXT_ZKT != 0,
            Extension::Zvbb => self.ext0 & EXT_ZVBB != 0,
            Extension::Zvbc => self.ext0 & EXT_ZVBC != 0,
            Extension::Zvkb => self.ext0 & EXT_ZVKB != 0,
            Extension::Zvkg => self.ext0 & EXT_ZVKG != 0,
            Extension::Zvkned => self.ext0 & EXT_ZVKNED != 0,
            Extension::Zvknha => self.ext0 & EXT_ZVKNHA != 0,
            Extension::Zvknhb => self.ext0 & EXT_ZVKNHB != 0,
            Extension::Zvksed => self.ext0 & EXT_ZVKSED != 0,
            Extension::Zvksh => self.ext0 & EXT_ZVKSH != 0,
            Extension::Zvkt => self.ext0 & EXT_ZVKT != 0,
            Extension::Zfh => self.ext0 & EXT_ZFH != 0,
            Extension::Zfhmin => self.ext0 & EXT_ZFHMIN != 0,
            Extension::Zihintntl => self.ext0 & EXT_ZIHINTNTL != 0,
            Extension::Zvfh => self.ext0 & EXT_ZVFH != 0,
            Extension::Zvfhmin => self.ext0 & EXT_ZVFHMIN != 0,
            Extension::Zfa => self.ext0 & EXT_ZFA != 0,
            Extension::Ztso => self.ext0 & EXT_ZTSO != 0,
            Extension::Zacas => self.ext0 & EXT_ZACAS != 0,
            Extension::Zicond => self.ext0 & EXT_ZICOND != 0,
            Extension::Zihintpause => self.ext0 & EXT_ZIHINTPAUSE != 0,
            Extension::Zve32x => self.ext0 & EXT_ZVE32X != 0,
            Extension::Zve32f => self.ext0 & EXT_ZVE32F != 0,
            Extension::Zve64x => self.ext0 & EXT_ZVE64X != 0,
            Extension::Zve64f => self.ext0 & EXT_ZVE64F != 0,
            Extension::Zve64d => self.ext0 & EXT_ZVE64D != 0,
            Extension::Zimop => self.ext0 & EXT_ZIMOP != 0,
            Extension::Zca => self.ext0 & EXT_ZCA != 0,
            Extension::Zcb => self.ext0 & EXT_ZCB != 0,
            Extension::Zcd => self.ext0 & EXT_ZCD != 0,
            Extension::Zcf => self.ext0 & EXT_ZCF != 0,
            Extension::Zcmop => self.ext0 & EXT_ZCMOP != 0,
            Extension::Zawrs => self.ext0 & EXT_ZAWRS != 0,
        }
    }
}

/// Linux riscv64 `riscv_hwprobe` syscall number.
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
const SYS_RISCV_HWPROBE: libc::c_long = 258;

/// One key/value request entry, matching the kernel's `struct riscv_hwprobe`.
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
#[repr(C)]
struct HwprobePair {
    key: i64,
    value: u64,
}

/// Issues the batched kernel capability query.
///
/// Returns `None` when the kernel predates the syscall; the caller falls
/// back to the fault-trap probe for every extension.
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
pub(crate) fn query() -> Option<HwprobeSnapshot> {
    let mut pairs = [
        HwprobePair {
            key: KEY_BASE_BEHAVIOR,
            value: 0,
        },
        HwprobePair {
            key: KEY_IMA_EXT_0,
            value: 0,
        },
    ];

    // SAFETY: the request vector is a valid, properly-sized array of
    // repr(C) pairs; an empty cpu set queries all harts.
    let rc = unsafe {
        libc::syscall(
            SYS_RISCV_HWPROBE,
            pairs.as_mut_ptr(),
            pairs.len(),
            0usize,
            std::ptr::null_mut::<libc::c_void>(),
            0usize,
        )
    };

    if rc < 0 {
        return None;
    }

    Some(HwprobeSnapshot {
        base_behavior: pairs[0].value,
        ext0: pairs[1].value,
    })
}
