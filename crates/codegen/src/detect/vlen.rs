//! Vector Length Query.
//!
//! Reads the `vlenb` CSR through a tiny generated routine. The caller is
//! responsible for gating on vector support: executing the routine on a
//! processor without the vector extension traps.

use crate::asm::Assembler;
use crate::common::XReg;
use crate::exec::CodeBuffer;

/// A generated routine that reads one control/status register.
///
/// The routine is two instructions (`csrr a0, <csr>; ret`) and is built
/// once per reader; reads after construction execute the same buffer.
#[derive(Debug)]
pub struct CsrReader {
    buf: CodeBuffer,
}

impl CsrReader {
    /// Generates and finalizes the read routine for `csr`.
    ///
    /// # Panics
    ///
    /// Panics if `csr` is not a 12-bit CSR address, or if executable
    /// memory cannot be allocated.
    pub fn new(csr: u32) -> Self {
        let mut asm = Assembler::new(64);
        asm.csrr(XReg::A0, csr);
        asm.ret();

        let mut buf = asm.into_buffer();
        buf.make_executable();
        Self { buf }
    }

    /// Returns the generated routine's encoding.
    pub fn code(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Executes the routine and returns the CSR value.
    #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
    pub fn read(&self) -> u64 {
        // SAFETY: the buffer holds `csrr a0, csr; ret`, a complete routine
        // returning one integer, and was made executable in `new`.
        let entry: extern "C" fn() -> u64 = unsafe { self.buf.entry() };
        entry()
    }
}
