//! Hardware Capability Detection.
//!
//! Decides, for every catalog extension, whether the executing processor
//! implements it. Two strategies exist and exactly one of them resolves
//! the whole catalog for the life of the process:
//! 1. **Syscall probe** (preferred): one batched kernel capability query,
//!    interpreted per extension.
//! 2. **Fault-trap probe** (fallback for old kernels): a generated probe
//!    program run once under a SIGILL handler.
//!
//! Results are computed lazily on first use and cached for the process
//! lifetime; concurrent first users block until the cache is fully
//! populated. On targets without RISC-V Linux probing support every query
//! reports unsupported and the vector length is zero.

/// Detectable extension catalog.
pub mod ext;
/// Kernel capability syscall strategy.
pub mod hwprobe;
/// Extension-to-probe-instruction mapping.
pub mod probe;
/// Fault-trap probe strategy.
pub mod trap;
/// Vector register length query.
pub mod vlen;

use std::sync::OnceLock;

use serde::Serialize;

pub use ext::{Extension, UnknownExtension};
pub use hwprobe::HwprobeSnapshot;
pub use probe::ProbeKind;
pub use vlen::CsrReader;

/// Source of raw capability information for an [`Engine`].
///
/// The host implementation talks to the kernel and the hardware; tests
/// substitute deterministic backends.
pub trait ProbeBackend {
    /// Issues the batched kernel capability query, or `None` when the
    /// syscall is unavailable.
    fn hwprobe(&self) -> Option<HwprobeSnapshot>;

    /// Builds and runs the fault-trap probe program, returning the
    /// per-extension outcome in catalog order.
    fn trap_probe(&self) -> [bool; Extension::COUNT];

    /// Executes the generated `vlenb` read routine.
    fn read_vlenb(&self) -> u32;
}

/// Process-wide capability results, populated exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityCache {
    flags: [bool; Extension::COUNT],
}

impl CapabilityCache {
    /// Resolves the whole catalog through `backend`.
    ///
    /// The syscall strategy is preferred; if it is unavailable the
    /// fault-trap strategy resolves every extension. The two are never
    /// mixed per extension.
    pub fn detect<B: ProbeBackend + ?Sized>(backend: &B) -> Self {
        backend.hwprobe().map_or_else(
            || {
                tracing::debug!("capability syscall unavailable; running fault-trap probe");
                Self::from_flags(backend.trap_probe())
            },
            |snapshot| {
                tracing::debug!(
                    base_behavior = snapshot.base_behavior,
                    ext0 = snapshot.ext0,
                    "capabilities resolved by kernel query"
                );
                Self::from_snapshot(&snapshot)
            },
        )
    }

    /// Builds the cache by interpreting a kernel query snapshot.
    pub fn from_snapshot(snapshot: &HwprobeSnapshot) -> Self {
        let mut flags = [false; Extension::COUNT];
        for extension in Extension::ALL {
            flags[extension.ordinal()] = snapshot.has(extension);
        }
        Self { flags }
    }

    /// Builds the cache from fault-trap probe outcomes in catalog order.
    pub const fn from_flags(flags: [bool; Extension::COUNT]) -> Self {
        Self { flags }
    }

    /// Returns the cached outcome for one extension.
    #[inline]
    pub const fn has(&self, extension: Extension) -> bool {
        self.flags[extension.ordinal()]
    }
}

/// Lazily-initialized capability engine over a probe backend.
///
/// The first query runs exactly one detection strategy under the
/// initialization lock; concurrent first users block until the cache is
/// complete. Later queries only read.
pub struct Engine<B> {
    backend: B,
    caps: OnceLock<CapabilityCache>,
    vlen: OnceLock<u32>,
}

impl<B: ProbeBackend> Engine<B> {
    /// Creates an engine; no probing happens until the first query.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            caps: OnceLock::new(),
            vlen: OnceLock::new(),
        }
    }

    /// Returns the backend this engine probes through.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the capability cache, populating it on first use.
    pub fn capabilities(&self) -> &CapabilityCache {
        self.caps
            .get_or_init(|| CapabilityCache::detect(&self.backend))
    }

    /// True iff the hardware supports `extension`.
    pub fn has(&self, extension: Extension) -> bool {
        self.capabilities().has(extension)
    }

    /// Hardware vector register length in bytes; 0 without vector support.
    ///
    /// The CSR routine is generated and executed at most once; the vector
    /// gate is checked first so it is never built on non-vector hardware.
    pub fn vlen_bytes(&self) -> u32 {
        if !self.has(Extension::V) {
            return 0;
        }
        *self.vlen.get_or_init(|| self.backend.read_vlenb())
    }
}

impl<B> std::fmt::Debug for Engine<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("caps", &self.caps)
            .field("vlen", &self.vlen)
            .finish_non_exhaustive()
    }
}

/// Probe backend for the executing host.
///
/// Off RISC-V Linux targets every strategy degrades gracefully: the
/// syscall is unavailable, the trap probe reports nothing present, and the
/// vector length reads as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostBackend;

impl ProbeBackend for HostBackend {
    fn hwprobe(&self) -> Option<HwprobeSnapshot> {
        #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
        {
            hwprobe::query()
        }
        #[cfg(not(all(target_os = "linux", target_arch = "riscv64")))]
        {
            None
        }
    }

    fn trap_probe(&self) -> [bool; Extension::COUNT] {
        #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
        {
            trap::run()
        }
        #[cfg(not(all(target_os = "linux", target_arch = "riscv64")))]
        {
            [false; Extension::COUNT]
        }
    }

    fn read_vlenb(&self) -> u32 {
        #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
        {
            CsrReader::new(crate::isa::zicsr::VLENB).read() as u32
        }
        #[cfg(not(all(target_os = "linux", target_arch = "riscv64")))]
        {
            0
        }
    }
}

static HOST_ENGINE: Engine<HostBackend> = Engine::new(HostBackend);

/// Process-wide capability query facade.
///
/// All instances share one lazily-populated cache; construction is free.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuInfo;

impl CpuInfo {
    /// Creates a query handle.
    pub const fn new() -> Self {
        Self
    }

    /// True iff the hardware supports `extension`.
    pub fn has(self, extension: Extension) -> bool {
        HOST_ENGINE.has(extension)
    }

    /// Hardware vector register length in bytes; 0 without vector support.
    pub fn vlen_bytes(self) -> u32 {
        HOST_ENGINE.vlen_bytes()
    }

    /// Snapshot of every catalog extension plus the vector length.
    pub fn report(self) -> CpuReport {
        CpuReport {
            extensions: Extension::ALL
                .iter()
                .map(|&extension| ExtensionStatus {
                    extension,
                    supported: self.has(extension),
                })
                .collect(),
            vlen_bytes: self.vlen_bytes(),
        }
    }
}

/// Support state of one catalog extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExtensionStatus {
    /// The extension queried.
    pub extension: Extension,
    /// Whether the hardware supports it.
    pub supported: bool,
}

/// Serializable capability summary for diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct CpuReport {
    /// Every catalog extension in ordinal order.
    pub extensions: Vec<ExtensionStatus>,
    /// Hardware vector register length in bytes; 0 without vector support.
    pub vlen_bytes: u32,
}
