//! Single-kernel accelerator execution context.
//!
//! An [`AcceleratorTask`] owns everything one compiled kernel needs on one
//! device: context, in-order command queue, built program and the resolved
//! entry point. Nothing in here is shared between tasks; two tasks on the
//! same physical device still have independent queues with no ordering
//! guarantee between them.

use std::ptr;
use std::time::{Duration, Instant};

use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::Device;
use opencl3::kernel::Kernel;
use opencl3::memory::Buffer;
use opencl3::program::Program;
use opencl3::types::{CL_BLOCKING, CL_NON_BLOCKING, cl_uint};
use snafu::ensure;
use tracing::{debug, warn};

use sverka_device::decompose::{Decomposition, decompose};

use crate::args::{ArgValue, KernelArgs};
use crate::buffer::{AccessMode, DeviceBuffer};
use crate::catalog::KERNEL_ENTRY_POINT;
use crate::error::{
    ArgumentBindingSnafu, BufferCreateSnafu, BufferReadSnafu, BufferWriteSnafu, ConstructionSnafu, EnqueueSnafu,
    Result, SizeMismatchSnafu,
};

/// One accelerator execution context: one device, one compiled kernel.
pub struct AcceleratorTask {
    // Field order is the release order: kernel, program, queue, context.
    kernel: Kernel,
    program: Program,
    queue: CommandQueue,
    context: Context,
    device: Device,
}

impl AcceleratorTask {
    /// Compiles `source` for `device` and prepares an in-order command queue.
    ///
    /// The stages run in strict order: context creation, queue creation,
    /// program build from the literal source text, entry-point resolution by
    /// the fixed [`KERNEL_ENTRY_POINT`] symbol. The first failure aborts the
    /// chain; whatever was already constructed is released on the way out,
    /// and no task value exists afterwards.
    pub fn create(device: Device, source: &str) -> Result<Self> {
        let context = Context::from_device(&device)
            .map_err(|source| ConstructionSnafu { stage: "context", reason: source.to_string() }.build())?;

        let queue = CommandQueue::create_default_with_properties(&context, 0, 0)
            .map_err(|source| ConstructionSnafu { stage: "queue", reason: source.to_string() }.build())?;

        // The build log comes back as the error payload on compile failure.
        let program = Program::create_and_build_from_source(&context, source, "")
            .map_err(|build_log| ConstructionSnafu { stage: "program build", reason: build_log }.build())?;

        let kernel = Kernel::create(&program, KERNEL_ENTRY_POINT)
            .map_err(|source| ConstructionSnafu { stage: "kernel", reason: source.to_string() }.build())?;

        debug!(entry = KERNEL_ENTRY_POINT, "accelerator task ready");
        Ok(Self { kernel, program, queue, context, device })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Work decomposition for a 1-D dispatch of `problem_size` items.
    ///
    /// Queries the device's compute-unit count; a failed query degrades to
    /// the default local size.
    pub fn decomposition(&self, problem_size: usize) -> Decomposition {
        let units = match self.device.max_compute_units() {
            Ok(units) => Some(units),
            Err(error) => {
                warn!(%error, "compute unit query failed, keeping the default local size");
                None
            }
        };
        decompose(problem_size, units)
    }

    /// Allocates a device buffer for `count` elements of `T`.
    pub fn create_buffer<T>(&self, count: usize, mode: AccessMode) -> Result<DeviceBuffer<T>> {
        // SAFETY: the runtime allocates count * size_of::<T>() bytes itself;
        // no host pointer is involved.
        let raw = unsafe { Buffer::<T>::create(&self.context, mode.flags(), count, ptr::null_mut()) }
            .map_err(|source| BufferCreateSnafu { count, reason: source.to_string() }.build())?;
        Ok(DeviceBuffer::new(raw, count, mode))
    }

    /// Creates a buffer backed directly by `host` memory (zero-copy where
    /// the backend supports it); no separate write is needed.
    ///
    /// # Safety
    ///
    /// `host` must stay alive and must not be read or written by the host
    /// for as long as the device may access the buffer; a blocking enqueue
    /// on this task's queue is the synchronization point.
    pub unsafe fn create_host_buffer<T>(&self, host: &mut [T]) -> Result<DeviceBuffer<T>> {
        let count = host.len();
        // SAFETY: caller guarantees the slice outlives device use.
        let raw = unsafe {
            Buffer::<T>::create(&self.context, AccessMode::HostBacked.flags(), count, host.as_mut_ptr().cast())
        }
        .map_err(|source| BufferCreateSnafu { count, reason: source.to_string() }.build())?;
        Ok(DeviceBuffer::new(raw, count, AccessMode::HostBacked))
    }

    /// Copies `data` into `buffer`, waiting for the transfer to complete.
    pub fn write_buffer<T>(&self, data: &[T], buffer: &mut DeviceBuffer<T>) -> Result<()> {
        ensure!(data.len() == buffer.len(), SizeMismatchSnafu { expected: buffer.len(), actual: data.len() });
        // SAFETY: the blocking flag keeps `data` borrowed until the copy is done.
        unsafe { self.queue.enqueue_write_buffer(buffer.raw_mut(), CL_BLOCKING, 0, data, &[]) }
            .map_err(|source| BufferWriteSnafu { reason: source.to_string() }.build())?;
        Ok(())
    }

    /// Queues a copy of `data` into `buffer` without waiting.
    ///
    /// # Safety
    ///
    /// The transfer may still be in flight when this returns: the caller
    /// must not reuse or free `data` until a later blocking operation on
    /// this queue confirms completion.
    pub unsafe fn enqueue_write_buffer<T>(&self, data: &[T], buffer: &mut DeviceBuffer<T>) -> Result<()> {
        ensure!(data.len() == buffer.len(), SizeMismatchSnafu { expected: buffer.len(), actual: data.len() });
        // SAFETY: caller upholds the ordering obligation documented above.
        unsafe { self.queue.enqueue_write_buffer(buffer.raw_mut(), CL_NON_BLOCKING, 0, data, &[]) }
            .map_err(|source| BufferWriteSnafu { reason: source.to_string() }.build())?;
        Ok(())
    }

    /// Copies `buffer` back into `dest`, waiting for the transfer to complete.
    pub fn read_buffer<T>(&self, dest: &mut [T], buffer: &DeviceBuffer<T>) -> Result<()> {
        ensure!(dest.len() == buffer.len(), SizeMismatchSnafu { expected: buffer.len(), actual: dest.len() });
        // SAFETY: the blocking flag keeps `dest` borrowed until the copy is done.
        unsafe { self.queue.enqueue_read_buffer(buffer.raw(), CL_BLOCKING, 0, dest, &[]) }
            .map_err(|source| BufferReadSnafu { reason: source.to_string() }.build())?;
        Ok(())
    }

    /// Queues a copy of `buffer` into `dest` without waiting.
    ///
    /// # Safety
    ///
    /// Same contract as [`Self::enqueue_write_buffer`]: `dest` must not be
    /// read or reused until a later blocking operation confirms completion.
    pub unsafe fn enqueue_read_buffer<T>(&self, dest: &mut [T], buffer: &DeviceBuffer<T>) -> Result<()> {
        ensure!(dest.len() == buffer.len(), SizeMismatchSnafu { expected: buffer.len(), actual: dest.len() });
        // SAFETY: caller upholds the ordering obligation documented above.
        unsafe { self.queue.enqueue_read_buffer(buffer.raw(), CL_NON_BLOCKING, 0, dest, &[]) }
            .map_err(|source| BufferReadSnafu { reason: source.to_string() }.build())?;
        Ok(())
    }

    /// Binds `args` to consecutive kernel slots starting at 0.
    ///
    /// Binding aborts at the first slot the runtime rejects; later arguments
    /// are left unbound and the parameter state is undefined until bound
    /// again.
    pub fn bind_parameters(&self, args: &KernelArgs) -> Result<()> {
        for (index, value) in args.values().iter().enumerate() {
            let index = index as cl_uint;
            // SAFETY: each variant's payload has exactly the byte size the
            // kernel expects in its slot; call sites construct the list to
            // match the kernel signature.
            let bound = unsafe {
                match value {
                    ArgValue::Int(v) => self.kernel.set_arg(index, v),
                    ArgValue::UInt(v) => self.kernel.set_arg(index, v),
                    ArgValue::Long(v) => self.kernel.set_arg(index, v),
                    ArgValue::ULong(v) => self.kernel.set_arg(index, v),
                    ArgValue::Float(v) => self.kernel.set_arg(index, v),
                    ArgValue::Double(v) => self.kernel.set_arg(index, v),
                    ArgValue::Mem(v) => self.kernel.set_arg(index, v),
                }
            };
            if let Err(source) = bound {
                return ArgumentBindingSnafu { index, reason: source.to_string() }.fail();
            }
        }
        Ok(())
    }

    /// Submits the kernel over `global` work items in `local`-sized groups
    /// and blocks until the device signals completion, returning the
    /// wall-clock time around the wait.
    ///
    /// Both slices must have the same rank; every `global[d]` must be a
    /// multiple of `local[d]`, which the underlying enqueue reports as a
    /// submission error if violated.
    pub fn enqueue(&self, local: &[usize], global: &[usize]) -> Result<Duration> {
        assert_eq!(local.len(), global.len(), "local and global decompositions must have the same rank");

        let started = Instant::now();
        // SAFETY: kernel, queue and both size arrays belong together; the
        // rank matches both array lengths.
        let event = unsafe {
            self.queue.enqueue_nd_range_kernel(
                self.kernel.get(),
                global.len() as cl_uint,
                ptr::null(),
                global.as_ptr(),
                local.as_ptr(),
                &[],
            )
        }
        .map_err(|source| EnqueueSnafu { reason: source.to_string() }.build())?;

        event.wait().map_err(|source| EnqueueSnafu { reason: source.to_string() }.build())?;
        Ok(started.elapsed())
    }
}
