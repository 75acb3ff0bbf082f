//! Matrix-multiply offload driver.

use std::time::Instant;

use snafu::ensure;
use tracing::info;

use sverka_device::opencl::ClEnumerator;
use sverka_device::registry::Registry;

use crate::args::KernelArgs;
use crate::benchmark::OffloadRun;
use crate::buffer::AccessMode;
use crate::catalog::{MAT_MULT, MAT_MULT_TILED};
use crate::error::{DeviceNotFoundSnafu, InvalidShapeSnafu, Result};
use crate::task::AcceleratorTask;

/// Tile edge shared by the device kernels and the dispatch geometry.
pub const TILE_SIZE: usize = 16;

/// Options for [`mat_mult_offloaded`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MatMultOptions {
    /// Use the local-memory tiled kernel instead of the naive one.
    pub tiled: bool,
    /// Back all three buffers with host memory instead of copying.
    /// Best-effort zero copy; the result is read through the shared
    /// allocation with no explicit read-back.
    pub host_backed: bool,
}

/// Multiplies row-major `a` (`rows x inner`) by `b` (`inner x cols`) on the
/// first accelerator whose name contains `pattern`.
///
/// The dispatch runs one work item per output cell in 16x16 groups, so
/// `rows` and `cols` must be multiples of [`TILE_SIZE`] (and `inner` too for
/// the tiled kernel); violations surface as the runtime's enqueue error.
/// The operand slices are mutable because the host-backed mode hands them to
/// the device as backing store.
pub fn mat_mult_offloaded(
    registry: &Registry<ClEnumerator>,
    pattern: &str,
    a: &mut [i32],
    b: &mut [i32],
    rows: usize,
    inner: usize,
    cols: usize,
    options: MatMultOptions,
) -> Result<(Vec<i32>, OffloadRun)> {
    ensure!(rows > 0 && inner > 0 && cols > 0, InvalidShapeSnafu { reason: format!("{rows}x{inner}x{cols}") });
    ensure!(
        a.len() == rows * inner && b.len() == inner * cols,
        InvalidShapeSnafu {
            reason: format!("operands {}x{} do not match shape {rows}x{inner}x{cols}", a.len(), b.len()),
        }
    );

    let device = registry.resolve(pattern).cloned().ok_or_else(|| DeviceNotFoundSnafu { pattern }.build())?;
    let source = if options.tiled { MAT_MULT_TILED } else { MAT_MULT };
    let task = AcceleratorTask::create(device, source)?;

    let mut out = vec![0i32; rows * cols];
    let local = [TILE_SIZE, TILE_SIZE];
    let global = [rows, cols];

    let started = Instant::now();
    let (a_buffer, b_buffer, out_buffer) = if options.host_backed {
        // SAFETY: the slices outlive the task, and the host does not touch
        // them again before the blocking enqueue below completes.
        unsafe {
            (
                task.create_host_buffer(a)?,
                task.create_host_buffer(b)?,
                task.create_host_buffer(&mut out)?,
            )
        }
    } else {
        let mut a_buffer = task.create_buffer::<i32>(a.len(), AccessMode::ReadOnly)?;
        let mut b_buffer = task.create_buffer::<i32>(b.len(), AccessMode::ReadOnly)?;
        let out_buffer = task.create_buffer::<i32>(out.len(), AccessMode::WriteOnly)?;
        task.write_buffer(a, &mut a_buffer)?;
        task.write_buffer(b, &mut b_buffer)?;
        (a_buffer, b_buffer, out_buffer)
    };

    let args = KernelArgs::new()
        .arg(a_buffer.as_arg())
        .arg(b_buffer.as_arg())
        .arg(out_buffer.as_arg())
        .arg(rows as u32)
        .arg(inner as u32)
        .arg(cols as u32);
    task.bind_parameters(&args)?;

    let kernel_time = task.enqueue(&local, &global)?;
    if !options.host_backed {
        task.read_buffer(&mut out, &out_buffer)?;
    }
    let total_time = started.elapsed();

    info!(?kernel_time, ?total_time, rows, inner, cols, tiled = options.tiled, "matmul offload complete");
    Ok((out, OffloadRun { kernel_time, total_time }))
}
