//! AXPY offload driver.

use std::time::Instant;

use snafu::ensure;
use tracing::info;

use sverka_device::opencl::ClEnumerator;
use sverka_device::registry::Registry;

use crate::args::{ArgValue, KernelArgs};
use crate::benchmark::OffloadRun;
use crate::buffer::AccessMode;
use crate::catalog::AxpyElement;
use crate::error::{DeviceNotFoundSnafu, InvalidShapeSnafu, Result};
use crate::task::AcceleratorTask;

/// Runs `y[i*incy] += a * x[i*incx]` on the first accelerator whose name
/// contains `pattern`, updating `y` in place.
///
/// Drives the full task lifecycle: resolve, compile, decompose, create and
/// fill buffers, bind, dispatch, read back. A resolution miss comes back as
/// [`Error::DeviceNotFound`](crate::error::Error::DeviceNotFound) so the
/// caller can fall back to the CPU path.
pub fn axpy_offloaded<T>(
    registry: &Registry<ClEnumerator>,
    pattern: &str,
    n: i64,
    a: T,
    x: &[T],
    incx: i64,
    y: &mut [T],
    incy: i64,
) -> Result<OffloadRun>
where
    T: AxpyElement + Into<ArgValue>,
{
    ensure!(n > 0 && incx > 0 && incy > 0, InvalidShapeSnafu { reason: format!("n={n}, incx={incx}, incy={incy}") });

    let device = registry.resolve(pattern).cloned().ok_or_else(|| DeviceNotFoundSnafu { pattern }.build())?;
    let task = AcceleratorTask::create(device, T::SOURCE)?;
    let decomposition = task.decomposition(n as usize);

    let mut y_buffer = task.create_buffer::<T>(y.len(), AccessMode::ReadWrite)?;
    let mut x_buffer = task.create_buffer::<T>(x.len(), AccessMode::ReadOnly)?;

    let started = Instant::now();
    task.write_buffer(y, &mut y_buffer)?;
    task.write_buffer(x, &mut x_buffer)?;

    let args = KernelArgs::new()
        .arg(n)
        .arg(a)
        .arg(x_buffer.as_arg())
        .arg(incx)
        .arg(x.len() as i64)
        .arg(y_buffer.as_arg())
        .arg(incy)
        .arg(y.len() as i64);
    task.bind_parameters(&args)?;

    let kernel_time = task.enqueue(&[decomposition.local], &[decomposition.global])?;
    task.read_buffer(y, &y_buffer)?;
    let total_time = started.elapsed();

    info!(?kernel_time, ?total_time, n, "axpy offload complete");
    Ok(OffloadRun { kernel_time, total_time })
}
