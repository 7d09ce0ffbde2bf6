//! Code Buffer Tests.
//!
//! Execution itself is exercised on RISC-V hardware; these tests cover the
//! host-independent parts: capacity rounding, the emission cursor, and
//! rewind-based reuse.

use pretty_assertions::assert_eq;
use rvjit_core::CodeBuffer;

#[test]
fn capacity_rounds_up_to_whole_pages() {
    assert_eq!(CodeBuffer::new(1).capacity(), 4096);
    assert_eq!(CodeBuffer::new(4096).capacity(), 4096);
    assert_eq!(CodeBuffer::new(4097).capacity(), 8192);
}

#[test]
fn pushes_advance_the_cursor_and_store_little_endian() {
    let mut buf = CodeBuffer::new(64);
    buf.push_u32(0x00008067);
    buf.push_u16(0x9296);
    assert_eq!(buf.cursor(), 6);
    assert_eq!(buf.as_slice(), &[0x67, 0x80, 0x00, 0x00, 0x96, 0x92]);
}

#[test]
fn rewind_resets_the_cursor_for_reuse() {
    let mut buf = CodeBuffer::new(64);
    buf.push_u32(0xDEADBEEF);
    buf.rewind();
    assert_eq!(buf.cursor(), 0);
    buf.push_u32(0x00000013);
    assert_eq!(buf.as_slice(), &[0x13, 0x00, 0x00, 0x00]);
}

#[test]
#[should_panic(expected = "code buffer exhausted")]
fn pushes_past_capacity_panic() {
    let mut buf = CodeBuffer::new(1);
    for _ in 0..=1024 {
        buf.push_u32(0x00000013);
    }
}
