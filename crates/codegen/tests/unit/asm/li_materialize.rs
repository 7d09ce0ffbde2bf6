//! Constant Materialization Properties.
//!
//! `Assembler::li` must produce a sequence that reconstructs any 64-bit
//! value on real hardware. The property is checked by symbolically
//! executing the emitted LUI/ADDI/ADDIW/SLLI stream with the architected
//! semantics of each instruction.

use proptest::prelude::*;
use rvjit_core::Assembler;
use rvjit_core::common::XReg;

use crate::common::program::eval_li;

fn materialize(value: u64) -> u64 {
    let mut asm = Assembler::new(512);
    asm.li(XReg::T2, value);
    assert!(!asm.code().is_empty(), "li must emit at least one instruction");
    eval_li(asm.code(), 7)
}

proptest! {
    #[test]
    fn li_materializes_arbitrary_values(value in any::<u64>()) {
        prop_assert_eq!(materialize(value), value);
    }

    #[test]
    fn li_materializes_page_aligned_addresses(page in 0u64..=0xFF_FFFF_FFFF) {
        let addr = page << 12;
        prop_assert_eq!(materialize(addr), addr);
    }
}

#[test]
fn li_boundary_values() {
    for value in [
        0,
        1,
        2047,
        2048,
        0x800,
        0xFFF,
        0x1000,
        0x7FFF_FFFF,
        0x8000_0000,
        0xFFFF_FFFF,
        0x1_0000_0000,
        i64::MAX as u64,
        i64::MIN as u64,
        u64::MAX,
    ] {
        assert_eq!(materialize(value), value, "li failed for {value:#x}");
    }
}
