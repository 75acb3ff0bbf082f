//! Typed device-resident buffers.

use opencl3::memory::{
    Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE, CL_MEM_USE_HOST_PTR, CL_MEM_WRITE_ONLY, ClMem, cl_mem_flags,
};

use crate::args::ArgValue;

/// Requested access pattern for a device buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    WriteOnly,
    ReadWrite,
    /// The device works directly on caller-provided host memory where the
    /// backend supports it; no explicit transfer is needed. Best effort:
    /// backends without coherent host access keep an internal copy.
    HostBacked,
}

impl AccessMode {
    pub(crate) fn flags(self) -> cl_mem_flags {
        match self {
            AccessMode::ReadOnly => CL_MEM_READ_ONLY,
            AccessMode::WriteOnly => CL_MEM_WRITE_ONLY,
            AccessMode::ReadWrite => CL_MEM_READ_WRITE,
            AccessMode::HostBacked => CL_MEM_READ_WRITE | CL_MEM_USE_HOST_PTR,
        }
    }

    pub fn is_host_backed(self) -> bool {
        matches!(self, AccessMode::HostBacked)
    }
}

/// A device allocation holding `len` elements of `T`.
///
/// The element count and access mode are fixed at creation. The underlying
/// device memory is released exactly once when the buffer is dropped; the
/// task that created it does not track it afterwards.
#[derive(Debug)]
pub struct DeviceBuffer<T> {
    raw: Buffer<T>,
    len: usize,
    mode: AccessMode,
}

impl<T> DeviceBuffer<T> {
    pub(crate) fn new(raw: Buffer<T>, len: usize, mode: AccessMode) -> Self {
        Self { raw, len, mode }
    }

    /// Number of elements the buffer was created for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Whether the allocation is backed by host memory (zero-copy capable).
    pub fn is_host_backed(&self) -> bool {
        self.mode.is_host_backed()
    }

    /// Argument value binding this buffer to a kernel slot.
    pub fn as_arg(&self) -> ArgValue {
        ArgValue::Mem(self.raw.get())
    }

    pub(crate) fn raw(&self) -> &Buffer<T> {
        &self.raw
    }

    pub(crate) fn raw_mut(&mut self) -> &mut Buffer<T> {
        &mut self.raw
    }
}
