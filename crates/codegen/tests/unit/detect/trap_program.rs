//! Fault-Trap Program Structure Tests.
//!
//! The generated probe program must visit every catalog extension in
//! ordinal order, bracketing each probe sequence between a flag-set
//! instruction and a store into that extension's results slot. Because
//! the fault handler resumes execution immediately after a faulting
//! instruction, a trap inside one bracket can only clear that bracket's
//! flag; the simulation below checks that a faulting probe leaves every
//! later slot intact.

use pretty_assertions::assert_eq;
use rvjit_core::{Assembler, Extension};
use rvjit_core::detect::probe::emit_probe;
use rvjit_core::detect::trap::build_probe_program;

use crate::common::program::{self, Parcel};

const RESULTS_ADDR: u64 = 0x1000;
const DUMMY_ADDR: u64 = 0x2000;

/// Flag-set marker: `addi t1, x0, 1`.
const SET_FLAG: u32 = 0x00100313;
/// Return: `jalr x0, 0(ra)`.
const RET: u32 = 0x00008067;

fn build() -> Vec<u8> {
    let mut asm = Assembler::new(4096);
    build_probe_program(&mut asm, RESULTS_ADDR, DUMMY_ADDR);
    asm.code().to_vec()
}

fn is_result_store(bits: u32) -> bool {
    // sb t1, imm(t2)
    program::opcode(bits) == 0b0100011
        && program::funct3(bits) == 0b000
        && program::rs1(bits) == 7
        && program::rs2(bits) == 6
}

#[test]
fn prologue_materializes_the_two_buffer_addresses() {
    let parcels = program::walk(&build());
    // With page-aligned addresses each li is a single lui.
    assert_eq!(parcels[0].bits, 0x000013B7); // lui t2, 0x1 (results)
    assert_eq!(parcels[1].bits, 0x00002E37); // lui t3, 0x2 (dummy)
    assert_eq!(parcels[2].bits, 0x00002537); // lui a0, 0x2 (dummy, compressed base)
}

#[test]
fn program_ends_with_a_return() {
    let parcels = program::walk(&build());
    assert_eq!(parcels.last().map(|p| p.bits), Some(RET));
}

#[test]
fn one_store_per_extension_in_ordinal_order() {
    let offsets: Vec<i32> = program::walk(&build())
        .iter()
        .filter(|p| is_result_store(p.bits))
        .map(|p| program::s_imm(p.bits))
        .collect();
    let expected: Vec<i32> = (0..Extension::COUNT as i32).collect();
    assert_eq!(offsets, expected);
}

/// Splits the program into per-extension brackets:
/// `SET_FLAG <probe bytes> <store>` for each ordinal.
fn brackets(code: &[u8], parcels: &[Parcel]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut probe_start = None;
    for (index, parcel) in parcels.iter().enumerate() {
        if parcel.bits == SET_FLAG {
            probe_start = Some(parcels[index + 1].offset);
        } else if is_result_store(parcel.bits) {
            let start = probe_start.take().unwrap();
            out.push(code[start..parcel.offset].to_vec());
        }
    }
    out
}

#[test]
fn each_bracket_holds_that_extensions_probe_sequence() {
    let code = build();
    let parcels = program::walk(&code);
    let brackets = brackets(&code, &parcels);
    assert_eq!(brackets.len(), Extension::COUNT);

    for (extension, bracket) in Extension::ALL.iter().zip(&brackets) {
        let mut asm = Assembler::new(64);
        emit_probe(&mut asm, *extension);
        assert_eq!(
            bracket, asm.code(),
            "probe bytes for {extension} diverge from the program"
        );
    }
}

/// Simulates one run with the fault handler's semantics: a probe
/// instruction in a faulting slot clears the flag register and execution
/// resumes at the next parcel. The flag must be re-armed before every
/// bracket, or a single fault would poison all later slots.
fn simulate_run(faulting: &[usize]) -> Vec<bool> {
    let code = build();
    let parcels = program::walk(&code);
    let mut results = vec![false; Extension::COUNT];
    let mut flag = false;
    let mut slot = 0;

    // Skip the three prologue address loads.
    for parcel in &parcels[3..] {
        if parcel.bits == SET_FLAG {
            flag = true;
        } else if is_result_store(parcel.bits) {
            results[program::s_imm(parcel.bits) as usize] = flag;
            slot += 1;
        } else if parcel.bits == RET {
            break;
        } else if faulting.contains(&slot) {
            flag = false;
        }
    }
    results
}

#[test]
fn a_faulting_probe_does_not_disturb_later_slots() {
    let c = Extension::C.ordinal();
    let results = simulate_run(&[c]);
    for extension in Extension::ALL {
        let expected = extension != Extension::C;
        assert_eq!(
            results[extension.ordinal()],
            expected,
            "unexpected simulated outcome for {extension}"
        );
    }
}
