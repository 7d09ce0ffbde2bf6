//! Probe-Table Tests.
//!
//! The extension-to-probe-instruction mapping must be total: every catalog
//! entry yields a non-empty sequence, extensions that cannot be observed
//! by execution are explicitly classified as assumed-present (and emit a
//! plain `nop`), and vector-context probes configure the vector unit
//! before their representative instruction.

use pretty_assertions::assert_eq;
use rvjit_core::{Assembler, Extension};
use rvjit_core::detect::ProbeKind;
use rvjit_core::detect::probe::{emit_probe, probe_kind};

use crate::common::program;

const NOP: u32 = 0x00000013;

/// Extensions whose representative instruction needs an active vector
/// configuration.
const VECTOR_CONTEXT: [Extension; 9] = [
    Extension::Zvbc,
    Extension::Zvkg,
    Extension::Zvkned,
    Extension::Zvknha,
    Extension::Zvknhb,
    Extension::Zvksed,
    Extension::Zvksh,
    Extension::Zvfh,
    Extension::Zvfhmin,
];

fn probe_bytes(extension: Extension) -> Vec<u8> {
    let mut asm = Assembler::new(64);
    emit_probe(&mut asm, extension);
    asm.code().to_vec()
}

#[test]
fn every_extension_has_a_probe_sequence() {
    for extension in Extension::ALL {
        assert!(
            !probe_bytes(extension).is_empty(),
            "no probe sequence for {extension}"
        );
    }
}

#[test]
fn every_probe_sequence_walks_cleanly() {
    for extension in Extension::ALL {
        let bytes = probe_bytes(extension);
        // walk() panics if the stream ends mid-parcel.
        let parcels = program::walk(&bytes);
        assert!(!parcels.is_empty());
    }
}

#[test]
fn assumed_present_extensions_emit_exactly_one_nop() {
    for extension in Extension::ALL {
        let parcels = program::walk(&probe_bytes(extension));
        match probe_kind(extension) {
            ProbeKind::AssumedPresent => {
                assert_eq!(parcels.len(), 1, "{extension} must emit one parcel");
                assert_eq!(parcels[0].bits, NOP, "{extension} must emit a nop");
            }
            ProbeKind::Executable => {
                assert!(
                    parcels.iter().all(|p| p.bits != NOP),
                    "{extension} must not hide behind a nop"
                );
            }
        }
    }
}

#[test]
fn vector_context_probes_configure_the_vector_unit_first() {
    for extension in VECTOR_CONTEXT {
        let parcels = program::walk(&probe_bytes(extension));
        assert_eq!(parcels.len(), 2, "{extension} must be vsetivli + probe");
        let first = parcels[0].bits;
        assert_eq!(program::opcode(first), 0b1010111);
        assert_eq!(program::funct3(first), 0b111, "{extension} must start with vsetivli");
    }
}

#[test]
fn compressed_probes_are_single_16_bit_parcels() {
    for extension in [
        Extension::C,
        Extension::Zca,
        Extension::Zcb,
        Extension::Zcd,
        Extension::Zcf,
    ] {
        let parcels = program::walk(&probe_bytes(extension));
        assert_eq!(parcels.len(), 1);
        assert_eq!(parcels[0].len, 2, "{extension} probe must be compressed");
    }
}

#[test]
fn c_and_zca_share_the_same_representative_instruction() {
    assert_eq!(probe_bytes(Extension::C), probe_bytes(Extension::Zca));
}
