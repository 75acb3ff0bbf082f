//! Accelerator task execution for sverka.
//!
//! The central piece is the [`task::AcceleratorTask`] (feature `opencl`): a
//! single-device execution context that compiles one kernel at runtime,
//! owns its command queue, and drives the buffer-create / write / bind /
//! enqueue / read-back cycle. Around it sit the opaque kernel source
//! [`catalog`], the positional argument list in [`args`], host-side
//! [`benchmark`] timing, and the AXPY / matrix-multiply offload drivers.
//!
//! Without the `opencl` feature only the device-independent pieces are
//! built: argument capture, catalog and benchmarking.

pub mod args;
#[cfg(feature = "opencl")]
pub mod axpy;
pub mod benchmark;
#[cfg(feature = "opencl")]
pub mod buffer;
pub mod catalog;
pub mod error;
#[cfg(feature = "opencl")]
pub mod matmul;
#[cfg(feature = "opencl")]
pub mod task;

#[cfg(test)]
pub mod test;

pub use args::{ArgValue, KernelArgs};
#[cfg(feature = "opencl")]
pub use axpy::axpy_offloaded;
pub use benchmark::{BenchmarkConfig, BenchmarkResult, OffloadRun, benchmark_fn};
#[cfg(feature = "opencl")]
pub use buffer::{AccessMode, DeviceBuffer};
pub use catalog::{AxpyElement, DAXPY, KERNEL_ENTRY_POINT, MAT_MULT, MAT_MULT_TILED, SAXPY};
pub use error::*;
#[cfg(feature = "opencl")]
pub use matmul::{MatMultOptions, TILE_SIZE, mat_mult_offloaded};
#[cfg(feature = "opencl")]
pub use task::AcceleratorTask;
