//! Fault-Trap Capability Probe.
//!
//! The fallback strategy for kernels that predate the batched capability
//! syscall. It works in three steps:
//! 1. **Build:** Generate one executable program that, for every catalog
//!    extension in ordinal order, sets the presence flag, executes that
//!    extension's probe sequence, and stores the flag into the extension's
//!    slot of a results buffer.
//! 2. **Guard:** Install a SIGILL handler for the duration of the run. On
//!    a trap the handler clears the saved presence-flag register and
//!    advances the saved program counter past the faulting instruction, so
//!    the program resumes at the next step instead of crashing or looping.
//!    The previous disposition is restored on the single exit path.
//! 3. **Run:** Invoke the program once and convert the results buffer into
//!    per-extension booleans.
//!
//! A fault other than SIGILL during the run is not handled: the probe
//! operands are constructed never to raise one, so an occurrence is a
//! probe-table defect and surfaces as a crash.

use crate::asm::Assembler;
use crate::common::XReg;

use super::ext::Extension;
use super::probe::emit_probe;

/// Builds the probe program into `asm`.
///
/// `results_addr` is the address of a byte buffer of length
/// [`Extension::COUNT`]; slot `i` receives 1 if the extension with ordinal
/// `i` executed cleanly and 0 if its probe sequence trapped.
/// `dummy_addr` is the address of the cache-line-sized scratch cell used
/// by memory-operand probes.
pub fn build_probe_program(asm: &mut Assembler, results_addr: u64, dummy_addr: u64) {
    asm.li(XReg::T2, results_addr);
    asm.li(XReg::T3, dummy_addr);
    asm.li(XReg::A0, dummy_addr);

    for extension in Extension::ALL {
        asm.li(XReg::T1, 1);
        emit_probe(asm, extension);
        asm.sb(XReg::T1, extension.ordinal() as i32, XReg::T2);
    }

    asm.ret();
}

#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
mod runner {
    use std::cell::UnsafeCell;

    use super::{Assembler, Extension, build_probe_program};

    /// Saved program counter slot in the riscv64 `mcontext_t` register file.
    const GREG_PC: usize = 0;
    /// Presence-flag register (t1 = x6) slot in the register file.
    const GREG_FLAG: usize = 6;

    /// One cache line of scratch memory for probes with memory operands.
    ///
    /// `cbo.zero` clears the whole block containing its operand, so the
    /// cell is a full, self-aligned line and nothing else shares it.
    #[repr(C, align(64))]
    struct ScratchLine(UnsafeCell<[u8; 64]>);

    // SAFETY: only the probe program writes through the cell, and the
    // one-shot runner is serialized by the engine's one-time initialization.
    unsafe impl Sync for ScratchLine {}

    static SCRATCH: ScratchLine = ScratchLine(UnsafeCell::new([0; 64]));

    /// SIGILL handler: record "absent" and resume after the faulting
    /// instruction.
    ///
    /// # Safety
    ///
    /// Installed only while the probe program runs; `ctx` is the ucontext
    /// supplied by the kernel for a SA_SIGINFO handler.
    unsafe extern "C" fn on_sigill(
        _signum: libc::c_int,
        _info: *mut libc::siginfo_t,
        ctx: *mut libc::c_void,
    ) {
        // SAFETY: the kernel passes a valid ucontext_t for SA_SIGINFO
        // handlers; the faulting pc points into our readable code buffer.
        unsafe {
            let uc = ctx.cast::<libc::ucontext_t>();
            let gregs = &mut (*uc).uc_mcontext.__gregs;
            let pc = gregs[GREG_PC] as usize;
            let parcel = (pc as *const u16).read_unaligned();
            let step = crate::isa::formats::insn_len(parcel);
            gregs[GREG_FLAG] = 0;
            gregs[GREG_PC] = (pc + step) as libc::c_ulong;
        }
    }

    /// Scoped SIGILL disposition: installs the probe handler and restores
    /// the previous disposition when dropped.
    struct SigillGuard {
        prev: libc::sigaction,
    }

    impl SigillGuard {
        fn install() -> Self {
            // SAFETY: a zeroed sigaction is a valid starting point; all
            // fields are then set explicitly.
            unsafe {
                let mut action: libc::sigaction = std::mem::zeroed();
                action.sa_sigaction = on_sigill as usize;
                action.sa_flags = libc::SA_SIGINFO;
                let _ = libc::sigemptyset(&mut action.sa_mask);

                let mut prev: libc::sigaction = std::mem::zeroed();
                let rc = libc::sigaction(libc::SIGILL, &action, &mut prev);
                assert_eq!(rc, 0, "sigaction(SIGILL) install failed");
                Self { prev }
            }
        }
    }

    impl Drop for SigillGuard {
        fn drop(&mut self) {
            // SAFETY: restores the disposition saved at install time.
            unsafe {
                let rc = libc::sigaction(libc::SIGILL, &self.prev, std::ptr::null_mut());
                assert_eq!(rc, 0, "sigaction(SIGILL) restore failed");
            }
        }
    }

    /// Builds and runs the probe program once, returning the per-extension
    /// outcome in catalog order.
    pub(crate) fn run() -> [bool; Extension::COUNT] {
        let mut results = [0u8; Extension::COUNT];

        let mut asm = Assembler::new(4096);
        build_probe_program(
            &mut asm,
            results.as_mut_ptr() as u64,
            SCRATCH.0.get() as u64,
        );

        let mut buf = asm.into_buffer();
        buf.make_executable();

        {
            let _guard = SigillGuard::install();
            // SAFETY: the buffer holds a complete parameterless routine
            // ending in `ret`, built above, and was just made executable.
            let entry: extern "C" fn() = unsafe { buf.entry() };
            entry();
        }

        let mut flags = [false; Extension::COUNT];
        for (flag, byte) in flags.iter_mut().zip(results.iter()) {
            *flag = *byte != 0;
        }
        flags
    }
}

#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
pub(crate) use runner::run;
