//! Kernel Bitmap Interpretation Tests.
//!
//! The base-behavior bitmap is compared for exact equality against the
//! integer+multiply+atomic baseline: any deviating bit makes I, M, and A
//! all absent. Every other extension answers to exactly one feature bit.

use pretty_assertions::assert_eq;
use rvjit_core::Extension;
use rvjit_core::detect::{CapabilityCache, HwprobeSnapshot, hwprobe};

// ─── Exact-match base policy ─────────────────────────────

#[test]
fn baseline_reports_i_m_a_together() {
    let snap = HwprobeSnapshot {
        base_behavior: hwprobe::BASE_BEHAVIOR_IMA,
        ext0: 0,
    };
    assert!(snap.has(Extension::I));
    assert!(snap.has(Extension::M));
    assert!(snap.has(Extension::A));
}

#[test]
fn any_deviating_base_bit_clears_i_m_a() {
    for base_behavior in [0u64, 0b10, 0b11, 0xFF, u64::MAX] {
        let snap = HwprobeSnapshot {
            base_behavior,
            ext0: u64::MAX,
        };
        assert!(!snap.has(Extension::I), "base {base_behavior:#x}");
        assert!(!snap.has(Extension::M), "base {base_behavior:#x}");
        assert!(!snap.has(Extension::A), "base {base_behavior:#x}");
    }
}

// ─── Scenario: baseline plus scalar floating point ───────

#[test]
fn baseline_with_fd_bit_reports_exactly_the_five_base_extensions() {
    let snap = HwprobeSnapshot {
        base_behavior: hwprobe::BASE_BEHAVIOR_IMA,
        ext0: hwprobe::EXT_FD,
    };
    for extension in Extension::ALL {
        let expected = matches!(
            extension,
            Extension::I | Extension::M | Extension::A | Extension::F | Extension::D
        );
        assert_eq!(snap.has(extension), expected, "wrong answer for {extension}");
    }
}

#[test]
fn named_feature_bits_answer_independently() {
    let snap = HwprobeSnapshot {
        base_behavior: hwprobe::BASE_BEHAVIOR_IMA,
        ext0: hwprobe::EXT_ZBA | hwprobe::EXT_ZAWRS | hwprobe::EXT_V,
    };
    assert!(snap.has(Extension::Zba));
    assert!(snap.has(Extension::Zawrs));
    assert!(snap.has(Extension::V));
    assert!(!snap.has(Extension::Zbb));
    assert!(!snap.has(Extension::C));
    assert!(!snap.has(Extension::F));
}

// ─── Cache construction ──────────────────────────────────

#[test]
fn cache_from_snapshot_matches_per_extension_interpretation() {
    let snap = HwprobeSnapshot {
        base_behavior: hwprobe::BASE_BEHAVIOR_IMA,
        ext0: hwprobe::EXT_FD | hwprobe::EXT_C | hwprobe::EXT_ZICOND,
    };
    let cache = CapabilityCache::from_snapshot(&snap);
    for extension in Extension::ALL {
        assert_eq!(
            cache.has(extension),
            snap.has(extension),
            "cache diverges from snapshot for {extension}"
        );
    }
}
