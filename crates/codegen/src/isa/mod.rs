//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains encoding constants and field-packing helpers, organized by
//! RISC-V extension. Only the encodings the capability probes and the
//! vector-length query emit are catalogued here.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit).
//! * `rv64m`: Standard Extension for Integer Multiplication and Division.
//! * `rv64a`: Standard Extension for Atomic Instructions (incl. Zacas).
//! * `float`: Single/Double/Half-Precision Floating-Point (F, D, Zfh, Zfa).
//! * `bitmanip`: Bit-Manipulation and scalar carry-less multiply (Zb*).
//! * `scalar_crypto`: Scalar Cryptography (Zk*).
//! * `vector`: Vector base and vector crypto (V, Zv*).
//! * `rvc`: Compressed Instructions (C, Zc*).
//! * `zicbo`: Cache-Block Operations (Zicboz).
//! * `zicsr`: Control and Status Register access.

/// Bit-manipulation extension function codes (Zba, Zbb, Zbs, Zbc, Zbk*).
pub mod bitmanip;

/// Instruction field packing helpers for all emitted formats.
pub mod formats;

/// Floating-point extension encodings (F, D, Zfh, Zfhmin, Zfa).
pub mod float;

/// Atomic memory operation encodings (A, Zacas).
pub mod rv64a;

/// Base integer instruction encodings (64-bit RISC-V core instructions).
pub mod rv64i;

/// Integer multiply/divide extension encodings.
pub mod rv64m;

/// Compressed instruction encodings (16-bit formats, C and Zcb/Zcd/Zcf).
pub mod rvc;

/// Scalar cryptography extension encodings (Zknd, Zkne, Zknh, Zksed, Zksh).
pub mod scalar_crypto;

/// Vector extension encodings (V, Zvbb, Zvbc, Zvk*, Zvf*).
pub mod vector;

/// Cache-block operation encodings (Zicboz).
pub mod zicbo;

/// Control and status register encodings and addresses.
pub mod zicsr;
