//! Detectable ISA Extension Catalog.
//!
//! This module defines the closed set of extensions the detection engine
//! can report on. It provides:
//! 1. **Ordinals:** Stable discriminants used to index the capability cache.
//! 2. **Kernel Coupling:** For every extension carried in the kernel's
//!    extension-feature bitmap, the discriminant is the kernel bit index
//!    plus four. This correspondence is an ABI contract with the kernel's
//!    capability query; do not renumber.
//! 3. **Names:** Canonical lower-case ISA names for display, parsing, and
//!    serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// An optional RISC-V ISA feature set the hardware may implement.
///
/// The catalog is closed: every variant has exactly one probe strategy and
/// one kernel-bitmap interpretation, and both dispatch tables are
/// exhaustive matches, so adding a variant fails to compile until it is
/// classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Extension {
    /// Base integer instruction set.
    I = 0,
    /// Integer multiplication and division.
    M = 1,
    /// Atomic memory operations.
    A = 2,
    /// Single-precision floating point.
    F = 3,
    /// Double-precision floating point.
    D = 4,
    /// Compressed (16-bit) instructions.
    C = 5,
    /// Vector operations.
    V = 6,
    /// Address generation (shift-and-add).
    Zba = 7,
    /// Basic bit manipulation.
    Zbb = 8,
    /// Single-bit operations.
    Zbs = 9,
    /// Cache-block zero.
    Zicboz = 10,
    /// Carry-less multiplication.
    Zbc = 11,
    /// Bit manipulation for cryptography.
    Zbkb = 12,
    /// Carry-less multiplication for cryptography.
    Zbkc = 13,
    /// Crossbar permutations.
    Zbkx = 14,
    /// AES decryption.
    Zknd = 15,
    /// AES encryption.
    Zkne = 16,
    /// SHA-2 hash functions.
    Zknh = 17,
    /// SM4 block cipher.
    Zksed = 18,
    /// SM3 hash function.
    Zksh = 19,
    /// Data-independent execution latency.
    Zkt = 20,
    /// Vector basic bit manipulation.
    Zvbb = 21,
    /// Vector carry-less multiplication.
    Zvbc = 22,
    /// Vector bit manipulation for cryptography.
    Zvkb = 23,
    /// Vector GHASH (GCM/GMAC).
    Zvkg = 24,
    /// Vector AES block cipher.
    Zvkned = 25,
    /// Vector SHA-256.
    Zvknha = 26,
    /// Vector SHA-256 and SHA-512.
    Zvknhb = 27,
    /// Vector SM4 block cipher.
    Zvksed = 28,
    /// Vector SM3 hash function.
    Zvksh = 29,
    /// Vector data-independent execution latency.
    Zvkt = 30,
    /// Half-precision floating point.
    Zfh = 31,
    /// Minimal half-precision floating point (conversion/move only).
    Zfhmin = 32,
    /// Non-temporal locality hints.
    Zihintntl = 33,
    /// Vector half-precision floating point.
    Zvfh = 34,
    /// Minimal vector half-precision floating point.
    Zvfhmin = 35,
    /// Additional floating-point instructions.
    Zfa = 36,
    /// Total store ordering memory model.
    Ztso = 37,
    /// Atomic compare-and-swap.
    Zacas = 38,
    /// Integer conditional operations.
    Zicond = 39,
    /// Pause hint.
    Zihintpause = 40,
    /// Vector embedded subset, 32-bit integer.
    Zve32x = 41,
    /// Vector embedded subset, 32-bit with single-precision float.
    Zve32f = 42,
    /// Vector embedded subset, 64-bit integer.
    Zve64x = 43,
    /// Vector embedded subset, 64-bit with single-precision float.
    Zve64f = 44,
    /// Vector embedded subset, 64-bit with double-precision float.
    Zve64d = 45,
    /// May-be-operations (integer).
    Zimop = 46,
    /// Compressed base subset.
    Zca = 47,
    /// Additional simple compressed instructions.
    Zcb = 48,
    /// Compressed double-precision loads and stores.
    Zcd = 49,
    /// Compressed single-precision loads and stores (RV32).
    Zcf = 50,
    /// May-be-operations (compressed).
    Zcmop = 51,
    /// Wait-on-reservation-set instructions.
    Zawrs = 52,
}

impl Extension {
    /// Number of catalog entries; sizes the capability cache.
    pub const COUNT: usize = 53;

    /// Every catalog entry in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::I,
        Self::M,
        Self::A,
        Self::F,
        Self::D,
        Self::C,
        Self::V,
        Self::Zba,
        Self::Zbb,
        Self::Zbs,
        Self::Zicboz,
        Self::Zbc,
        Self::Zbkb,
        Self::Zbkc,
        Self::Zbkx,
        Self::Zknd,
        Self::Zkne,
        Self::Zknh,
        Self::Zksed,
        Self::Zksh,
        Self::Zkt,
        Self::Zvbb,
        Self::Zvbc,
        Self::Zvkb,
        Self::Zvkg,
        Self::Zvkned,
        Self::Zvknha,
        Self::Zvknhb,
        Self::Zvksed,
        Self::Zvksh,
        Self::Zvkt,
        Self::Zfh,
        Self::Zfhmin,
        Self::Zihintntl,
        Self::Zvfh,
        Self::Zvfhmin,
        Self::Zfa,
        Self::Ztso,
        Self::Zacas,
        Self::Zicond,
        Self::Zihintpause,
        Self::Zve32x,
        Self::Zve32f,
        Self::Zve64x,
        Self::Zve64f,
        Self::Zve64d,
        Self::Zimop,
        Self::Zca,
        Self::Zcb,
        Self::Zcd,
        Self::Zcf,
        Self::Zcmop,
        Self::Zawrs,
    ];

    /// Returns the ordinal used to index per-extension tables.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the canonical lower-case ISA name of this extension.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "i",
            Self::M => "m",
            Self::A => "a",
            Self::F => "f",
            Self::D => "d",
            Self::C => "c",
            Self::V => "v",
            Self::Zba => "zba",
            Self::Zbb => "zbb",
            Self::Zbs => "zbs",
            Self::Zicboz => "zicboz",
            Self::Zbc => "zbc",
            Self::Zbkb => "zbkb",
            Self::Zbkc => "zbkc",
            Self::Zbkx => "zbkx",
            Self::Zknd => "zknd",
            Self::Zkne => "zkne",
            Self::Zknh => "zknh",
            Self::Zksed => "zksed",
            Self::Zksh => "zksh",
            Self::Zkt => "zkt",
            Self::Zvbb => "zvbb",
            Self::Zvbc => "zvbc",
            Self::Zvkb => "zvkb",
            Self::Zvkg => "zvkg",
            Self::Zvkned => "zvkned",
            Self::Zvknha => "zvknha",
            Self::Zvknhb => "zvknhb",
            Self::Zvksed => "zvksed",
            Self::Zvksh => "zvksh",
            Self::Zvkt => "zvkt",
            Self::Zfh => "zfh",
            Self::Zfhmin => "zfhmin",
            Self::Zihintntl => "zihintntl",
            Self::Zvfh => "zvfh",
            Self::Zvfhmin => "zvfhmin",
            Self::Zfa => "zfa",
            Self::Ztso => "ztso",
            Self::Zacas => "zacas",
            Self::Zicond => "zicond",
            Self::Zihintpause => "zihintpause",
            Self::Zve32x => "zve32x",
            Self::Zve32f => "zve32f",
            Self::Zve64x => "zve64x",
            Self::Zve64f => "zve64f",
            Self::Zve64d => "zve64d",
            Self::Zimop => "zimop",
            Self::Zca => "zca",
            Self::Zcb => "zcb",
            Self::Zcd => "zcd",
            Self::Zcf => "zcf",
            Self::Zcmop => "zcmop",
            Self::Zawrs => "zawrs",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Error returned when parsing an extension name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown RISC-V extension name: {0}")]
pub struct UnknownExtension(pub String);

impl FromStr for Extension {
    type Err = UnknownExtension;

    /// Parses a canonical lower-case ISA extension name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownExtension`] if `s` names no catalog entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.name() == s)
            .ok_or_else(|| UnknownExtension(s.to_owned()))
    }
}
