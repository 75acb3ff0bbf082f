//! Benchmark drivers comparing CPU and accelerator kernel implementations.
//!
//! Every subcommand runs the CPU reference paths, checks that all
//! implementations agree, and (when built with the `opencl` feature and
//! given `--device`) offloads the same problem to the first matching
//! accelerator. A resolution miss degrades to a CPU-only run; a parity
//! failure or a device-side error aborts with a nonzero exit status.

use clap::{Args, Parser, Subcommand};
use snafu::Snafu;
use tracing_subscriber::EnvFilter;

use sverka_kernels::{
    axpy_parallel, axpy_sequential, mat_mult, mat_mult_blocked, mat_mult_parallel, mat_mult_transposed,
    transpose,
};
use sverka_runtime::{ArgValue, AxpyElement, BenchmarkConfig, BenchmarkResult, benchmark_fn};

#[cfg(feature = "opencl")]
use sverka_device::{ClEnumerator, Registry};

/// Parity tolerance for single-precision comparisons.
const TOLERANCE: f64 = 1e-6;

#[derive(Parser)]
#[command(name = "sverka", about = "CPU vs accelerator numerical parity benchmarks", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered accelerator platforms and devices.
    Devices,
    /// Benchmark strided AXPY across implementations.
    Axpy(AxpyArgs),
    /// Benchmark dense integer matrix multiplication across implementations.
    Matmul(MatmulArgs),
}

#[derive(Args)]
struct AxpyArgs {
    /// Vector length.
    #[arg(long, default_value_t = 1 << 20)]
    size: usize,

    /// Stride through x.
    #[arg(long, default_value_t = 1)]
    incx: i64,

    /// Stride through y.
    #[arg(long, default_value_t = 1)]
    incy: i64,

    /// Scale factor applied to x.
    #[arg(long, default_value_t = 2.0)]
    alpha: f64,

    /// Run in double precision.
    #[arg(long)]
    double: bool,

    /// Substring of the accelerator device name to offload to.
    #[arg(long)]
    device: Option<String>,

    /// Untimed warmup runs per implementation.
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Timed runs per implementation.
    #[arg(long, default_value_t = 3)]
    runs: usize,
}

#[derive(Args)]
struct MatmulArgs {
    /// Rows of the left operand (rounded up to a multiple of 16).
    #[arg(long, default_value_t = 512)]
    rows: usize,

    /// Shared inner dimension (rounded up to a multiple of 16).
    #[arg(long, default_value_t = 512)]
    inner: usize,

    /// Columns of the right operand (rounded up to a multiple of 16).
    #[arg(long, default_value_t = 512)]
    cols: usize,

    /// Offload with the local-memory tiled kernel.
    #[arg(long)]
    tiled: bool,

    /// Offload with host-backed (zero-copy) buffers.
    #[arg(long)]
    host_backed: bool,

    /// Substring of the accelerator device name to offload to.
    #[arg(long)]
    device: Option<String>,

    /// Untimed warmup runs per implementation.
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Timed runs per implementation.
    #[arg(long, default_value_t = 3)]
    runs: usize,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("{implementation} diverges from the sequential reference: max deviation {max_diff:e}"))]
    Parity { implementation: &'static str, max_diff: f64 },

    #[cfg(feature = "opencl")]
    #[snafu(display("offload failed: {source}"))]
    Offload { source: sverka_runtime::Error },
}

type Result<T, E = Error> = std::result::Result<T, E>;

#[snafu::report]
fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Devices => {
            list_devices();
            Ok(())
        }
        Command::Axpy(args) => {
            if args.double {
                let alpha = args.alpha;
                run_axpy::<f64>(&args, alpha)
            } else {
                let alpha = args.alpha as f32;
                run_axpy::<f32>(&args, alpha)
            }
        }
        Command::Matmul(args) => run_matmul(&args),
    }
}

fn list_devices() {
    #[cfg(feature = "opencl")]
    {
        use sverka_device::Enumerator;

        let registry = Registry::discover(ClEnumerator);
        if registry.is_empty() {
            println!("no accelerator devices found");
            return;
        }
        let enumerator = registry.enumerator();
        for (platform, devices) in registry.platforms() {
            let platform_name = enumerator.platform_name(platform).unwrap_or_else(|_| "<unnamed>".into());
            println!("{platform_name}");
            for device in devices {
                let name = enumerator.device_name(device).unwrap_or_else(|_| "<unnamed>".into());
                match enumerator.compute_units(device) {
                    Ok(units) => println!("  {name} ({units} compute units)"),
                    Err(_) => println!("  {name}"),
                }
            }
        }
    }

    #[cfg(not(feature = "opencl"))]
    println!("built without the `opencl` feature; no accelerator backend available");
}

fn report(label: &str, result: &BenchmarkResult) {
    println!("  {label:<12} min {:>12.3?}   mean {:>12.3?}", result.min, result.mean);
}

/// Largest absolute difference between two runs of the same kernel.
fn max_abs_diff<T: Copy + Into<f64>>(reference: &[T], candidate: &[T]) -> f64 {
    reference
        .iter()
        .zip(candidate)
        .map(|(r, c)| {
            let r: f64 = (*r).into();
            let c: f64 = (*c).into();
            (r - c).abs()
        })
        .fold(0.0, f64::max)
}

fn check_parity<T: Copy + Into<f64>>(implementation: &'static str, reference: &[T], candidate: &[T]) -> Result<()> {
    let max_diff = max_abs_diff(reference, candidate);
    snafu::ensure!(max_diff <= TOLERANCE, ParitySnafu { implementation, max_diff });
    Ok(())
}

fn run_axpy<T>(args: &AxpyArgs, alpha: T) -> Result<()>
where
    T: Copy
        + From<u8>
        + Into<f64>
        + Into<ArgValue>
        + std::ops::Add<Output = T>
        + std::ops::Mul<Output = T>
        + Send
        + Sync
        + AxpyElement,
{
    let n = args.size as i64;
    let one = T::from(1u8);
    let x = vec![one; args.size];
    let y_init = vec![one; args.size];
    let config = BenchmarkConfig { warmup_runs: args.warmup, timing_runs: args.runs, take_minimum: true };

    println!(
        "axpy: n={} incx={} incy={} alpha={} ({})",
        args.size,
        args.incx,
        args.incy,
        args.alpha,
        if args.double { "f64" } else { "f32" },
    );

    let mut y_seq = y_init.clone();
    axpy_sequential(n, alpha, &x, args.incx, &mut y_seq, args.incy);

    let mut y_par = y_init.clone();
    axpy_parallel(n, alpha, &x, args.incx, &mut y_par, args.incy);
    check_parity("parallel axpy", &y_seq, &y_par)?;

    let sequential = benchmark_fn(&config, || {
        let mut y = y_init.clone();
        axpy_sequential(n, alpha, &x, args.incx, &mut y, args.incy);
        y
    });
    report("sequential", &sequential);

    let parallel = benchmark_fn(&config, || {
        let mut y = y_init.clone();
        axpy_parallel(n, alpha, &x, args.incx, &mut y, args.incy);
        y
    });
    report("parallel", &parallel);

    offload_axpy(args, alpha, &x, &y_init, &y_seq)?;
    Ok(())
}

#[cfg(feature = "opencl")]
fn offload_axpy<T>(args: &AxpyArgs, alpha: T, x: &[T], y_init: &[T], y_reference: &[T]) -> Result<()>
where
    T: Copy + Into<f64> + Into<ArgValue> + AxpyElement,
{
    let Some(pattern) = &args.device else {
        return Ok(());
    };

    let registry = Registry::discover(ClEnumerator);
    let mut y_device = y_init.to_vec();
    match sverka_runtime::axpy_offloaded(&registry, pattern, args.size as i64, alpha, x, args.incx, &mut y_device, args.incy)
    {
        Ok(run) => {
            check_parity("offloaded axpy", y_reference, &y_device)?;
            println!("  {:<12} kernel {:>10.3?}   total {:>12.3?}", "device", run.kernel_time, run.total_time);
            Ok(())
        }
        Err(sverka_runtime::Error::DeviceNotFound { pattern }) => {
            tracing::warn!(pattern = %pattern, "no matching accelerator, CPU-only run");
            Ok(())
        }
        Err(source) => Err(Error::Offload { source }),
    }
}

#[cfg(not(feature = "opencl"))]
fn offload_axpy<T>(args: &AxpyArgs, _alpha: T, _x: &[T], _y_init: &[T], _y_reference: &[T]) -> Result<()> {
    if args.device.is_some() {
        tracing::warn!("built without the `opencl` feature, --device ignored");
    }
    Ok(())
}

fn run_matmul(args: &MatmulArgs) -> Result<()> {
    // The device dispatch runs 16x16 work groups, so keep every dimension a
    // multiple of the tile edge for all paths.
    let rows = args.rows.next_multiple_of(16);
    let inner = args.inner.next_multiple_of(16);
    let cols = args.cols.next_multiple_of(16);

    let a: Vec<i32> = (0..rows * inner).map(|i| (i as i32 % 17) - 8).collect();
    let b: Vec<i32> = (0..inner * cols).map(|i| (i as i32 % 13) - 6).collect();
    let config = BenchmarkConfig { warmup_runs: args.warmup, timing_runs: args.runs, take_minimum: true };

    println!("matmul: {rows}x{inner} * {inner}x{cols}");

    let reference = mat_mult(&a, &b, rows, inner, cols);

    let parallel = mat_mult_parallel(&a, &b, rows, inner, cols);
    check_parity("parallel matmul", &reference, &parallel)?;

    let b_t = transpose(&b, inner, cols);
    let transposed = mat_mult_transposed(&a, &b_t, rows, inner, cols);
    check_parity("transposed matmul", &reference, &transposed)?;

    let blocked = mat_mult_blocked(&a, &b, rows, inner, cols);
    check_parity("blocked matmul", &reference, &blocked)?;

    report("naive", &benchmark_fn(&config, || mat_mult(&a, &b, rows, inner, cols)));
    report("parallel", &benchmark_fn(&config, || mat_mult_parallel(&a, &b, rows, inner, cols)));
    report(
        "transposed",
        &benchmark_fn(&config, || {
            let b_t = transpose(&b, inner, cols);
            mat_mult_transposed(&a, &b_t, rows, inner, cols)
        }),
    );
    report("blocked", &benchmark_fn(&config, || mat_mult_blocked(&a, &b, rows, inner, cols)));

    offload_matmul(args, &a, &b, rows, inner, cols, &reference)?;
    Ok(())
}

#[cfg(feature = "opencl")]
fn offload_matmul(
    args: &MatmulArgs,
    a: &[i32],
    b: &[i32],
    rows: usize,
    inner: usize,
    cols: usize,
    reference: &[i32],
) -> Result<()> {
    let Some(pattern) = &args.device else {
        return Ok(());
    };

    let registry = Registry::discover(ClEnumerator);
    let options = sverka_runtime::MatMultOptions { tiled: args.tiled, host_backed: args.host_backed };
    let mut a_host = a.to_vec();
    let mut b_host = b.to_vec();
    match sverka_runtime::mat_mult_offloaded(&registry, pattern, &mut a_host, &mut b_host, rows, inner, cols, options) {
        Ok((out, run)) => {
            check_parity("offloaded matmul", reference, &out)?;
            println!("  {:<12} kernel {:>10.3?}   total {:>12.3?}", "device", run.kernel_time, run.total_time);
            Ok(())
        }
        Err(sverka_runtime::Error::DeviceNotFound { pattern }) => {
            tracing::warn!(pattern = %pattern, "no matching accelerator, CPU-only run");
            Ok(())
        }
        Err(source) => Err(Error::Offload { source }),
    }
}

#[cfg(not(feature = "opencl"))]
fn offload_matmul(
    args: &MatmulArgs,
    _a: &[i32],
    _b: &[i32],
    _rows: usize,
    _inner: usize,
    _cols: usize,
    _reference: &[i32],
) -> Result<()> {
    if args.device.is_some() {
        tracing::warn!("built without the `opencl` feature, --device ignored");
    }
    Ok(())
}
