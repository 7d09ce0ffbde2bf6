//! # Emitter Unit Tests
//!
//! One module per instruction family. Every emitted encoding is compared
//! against a hand-assembled reference word.

/// Atomic memory operation encodings (A, Zacas).
pub mod atomic;



/// Compressed instruction encodings (C, Zcb, Zcd, Zcf).
pub mod compressed;


/// Scalar floating-point encodings (F, D, Zfh, Zfhmin, Zfa).
pub mod float;

/// Constant-materialization property tests.
pub mod li_materialize;


use rvjit_core::Assembler;

/// Emits one 32-bit instruction and returns its encoding.
pub fn encode32(emit: impl FnOnce(&mut Assembler)) -> u32 {
    let mut asm = Assembler::new(64);
    emit(&mut asm);
    let code = asm.code();
    assert_eq!(code.len(), 4, "expected a single 32-bit instruction");
    u32::from_le_bytes([code[0], code[1], code[2], code[3]])
}

/// Emits one 16-bit instruction and returns its encoding.
pub fn encode16(emit: impl FnOnce(&mut Assembler)) -> u16 {
    let mut asm = Assembler::new(64);
    emit(&mut asm);
    let code = asm.code();
    assert_eq!(code.len(), 2, "expected a single 16-bit instruction");
    u16::from_le_bytes([code[0], code[1]])
}
