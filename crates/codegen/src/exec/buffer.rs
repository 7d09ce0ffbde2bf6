//! Code Buffer Implementation.
//!
//! This module provides a safe wrapper around raw memory used to hold
//! generated machine code. It supports allocation via `mmap` on Unix
//! systems, a byte cursor for sequential emission, and the W^X transition
//! that makes the buffer callable: the mapping is writable while code is
//! emitted and is switched to read/execute before its first invocation.

use std::slice;

/// Host page size used to round buffer capacities.
const PAGE_SIZE: usize = 4096;

/// Linux riscv64 icache synchronization syscall number.
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
const SYS_RISCV_FLUSH_ICACHE: libc::c_long = 259;

/// A page-aligned buffer for generated machine code.
///
/// On Unix systems this uses `mmap` to allocate anonymous memory so the
/// protection of the underlying pages can be changed. The buffer starts
/// writable; call [`CodeBuffer::make_executable`] once emission is done,
/// and [`CodeBuffer::make_writable`] to reuse it for another program.
pub struct CodeBuffer {
    ptr: *mut u8,
    capacity: usize,
    cursor: usize,
    executable: bool,
}

// SAFETY: the mapping is owned exclusively by this value; all cursor and
// protection state lives inside the struct.
unsafe impl Send for CodeBuffer {}

impl CodeBuffer {
    /// Creates a new writable code buffer.
    ///
    /// The capacity is rounded up to a whole number of pages.
    ///
    /// # Panics
    ///
    /// Panics if `mmap` fails on Unix.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.div_ceil(PAGE_SIZE) * PAGE_SIZE;

        #[cfg(unix)]
        {
            use std::ptr;
            // SAFETY: anonymous private mapping with no requested address.
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    capacity,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            if ptr == libc::MAP_FAILED {
                panic!("Failed to mmap code buffer of size {}", capacity);
            }

            Self {
                ptr: ptr as *mut u8,
                capacity,
                cursor: 0,
                executable: false,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; capacity];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                capacity,
                cursor: 0,
                executable: false,
            }
        }
    }

    /// Returns the capacity of the buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current cursor offset in bytes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Resets the cursor to the start of the buffer for reuse.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Returns the emitted bytes up to the cursor.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: bytes below the cursor have all been written.
        unsafe { slice::from_raw_parts(self.ptr, self.cursor) }
    }

    /// Returns a raw pointer to the start of the buffer.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Appends a 16-bit instruction parcel in little-endian order.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full or has been marked executable.
    pub fn push_u16(&mut self, parcel: u16) {
        assert!(!self.executable, "write to an executable code buffer");
        assert!(self.cursor + 2 <= self.capacity, "code buffer exhausted");
        // SAFETY: bounds checked above; the mapping is writable.
        unsafe {
            self.ptr
                .add(self.cursor)
                .copy_from_nonoverlapping(parcel.to_le_bytes().as_ptr(), 2);
        }
        self.cursor += 2;
    }

    /// Appends a 32-bit instruction word in little-endian order.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full or has been marked executable.
    pub fn push_u32(&mut self, word: u32) {
        assert!(!self.executable, "write to an executable code buffer");
        assert!(self.cursor + 4 <= self.capacity, "code buffer exhausted");
        // SAFETY: bounds checked above; the mapping is writable.
        unsafe {
            self.ptr
                .add(self.cursor)
                .copy_from_nonoverlapping(word.to_le_bytes().as_ptr(), 4);
        }
        self.cursor += 4;
    }

    /// Switches the mapping to read/execute and synchronizes the
    /// instruction cache so the emitted code can be invoked.
    ///
    /// # Panics
    ///
    /// Panics if `mprotect` fails, or always on non-Unix platforms where no
    /// executable mapping is available.
    pub fn make_executable(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: ptr/capacity describe a mapping owned by this buffer.
            let rc = unsafe {
                libc::mprotect(
                    self.ptr as *mut libc::c_void,
                    self.capacity,
                    libc::PROT_READ | libc::PROT_EXEC,
                )
            };
            assert_eq!(rc, 0, "mprotect(PROT_EXEC) failed");

            #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
            {
                // SAFETY: flushes the icache range just written; flags=0
                // synchronizes all threads.
                let _ = unsafe {
                    libc::syscall(
                        SYS_RISCV_FLUSH_ICACHE,
                        self.ptr as usize,
                        self.ptr as usize + self.capacity,
                        0usize,
                    )
                };
            }

            self.executable = true;
        }

        #[cfg(not(unix))]
        {
            panic!("executable code buffers require a Unix host");
        }
    }

    /// Switches the mapping back to read/write so the buffer can be reused.
    ///
    /// # Panics
    ///
    /// Panics if `mprotect` fails.
    pub fn make_writable(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: ptr/capacity describe a mapping owned by this buffer.
            let rc = unsafe {
                libc::mprotect(
                    self.ptr as *mut libc::c_void,
                    self.capacity,
                    libc::PROT_READ | libc::PROT_WRITE,
                )
            };
            assert_eq!(rc, 0, "mprotect(PROT_WRITE) failed");
        }
        self.executable = false;
    }

    /// Reinterprets the start of the buffer as a function pointer.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the buffer holds a complete routine
    /// whose ABI matches `F` for the target in execution, and that
    /// [`CodeBuffer::make_executable`] has been called since the last write.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has not been marked executable, or if `F` is
    /// not pointer-sized.
    pub unsafe fn entry<F: Copy>(&self) -> F {
        assert!(self.executable, "code buffer is not executable");
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const u8>(),
            "entry type must be a bare function pointer"
        );
        let ptr = self.ptr as *const u8;
        // SAFETY: sizes checked above; validity of the target is the
        // caller's obligation per the function contract.
        unsafe { std::mem::transmute_copy(&ptr) }
    }
}

impl Drop for CodeBuffer {
    /// Deallocates the code buffer.
    fn drop(&mut self) {
        #[cfg(unix)]
        // SAFETY: ptr/capacity describe a mapping owned by this buffer.
        unsafe {
            let _ = libc::munmap(self.ptr as *mut _, self.capacity);
        }

        #[cfg(not(unix))]
        // SAFETY: reconstructs the Vec forgotten in `new`.
        unsafe {
            let _ = Vec::from_raw_parts(self.ptr, self.capacity, self.capacity);
        }
    }
}

impl std::fmt::Debug for CodeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeBuffer")
            .field("capacity", &self.capacity)
            .field("cursor", &self.cursor)
            .field("executable", &self.executable)
            .finish()
    }
}
