//! Host-side timing for benchmark comparisons.
//!
//! Wall-clock measurement of kernel invocations with warmup runs discarded
//! and min/mean statistics over the timed runs.

use std::time::{Duration, Instant};

/// Configuration for host benchmarking.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of warmup runs (not timed).
    pub warmup_runs: usize,
    /// Number of timing runs.
    pub timing_runs: usize,
    /// Whether to report the minimum time (true) or the mean (false).
    pub take_minimum: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { warmup_runs: 1, timing_runs: 3, take_minimum: true }
    }
}

/// Result of benchmarking one implementation.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Minimum execution time.
    pub min: Duration,
    /// Mean execution time.
    pub mean: Duration,
    /// All timing measurements.
    pub runs: Vec<Duration>,
}

impl BenchmarkResult {
    /// The timing value preferred by `take_minimum`.
    pub fn timing(&self, take_minimum: bool) -> Duration {
        if take_minimum { self.min } else { self.mean }
    }
}

/// Wall-clock timings of one offloaded dispatch.
#[derive(Debug, Clone, Copy)]
pub struct OffloadRun {
    /// Device execution time measured around the completion wait.
    pub kernel_time: Duration,
    /// Transfers, binding, dispatch and read-back end to end.
    pub total_time: Duration,
}

/// Benchmarks a host-side operation.
///
/// Runs `op` for `warmup_runs` untimed iterations, then `timing_runs` timed
/// ones, and returns min/mean/all timings.
pub fn benchmark_fn<T>(config: &BenchmarkConfig, mut op: impl FnMut() -> T) -> BenchmarkResult {
    for _ in 0..config.warmup_runs {
        op();
    }

    let mut runs = Vec::with_capacity(config.timing_runs);
    for _ in 0..config.timing_runs {
        let start = Instant::now();
        op();
        runs.push(start.elapsed());
    }

    let min = runs.iter().copied().min().unwrap_or(Duration::ZERO);
    let total: Duration = runs.iter().sum();
    let mean = total / runs.len().max(1) as u32;

    BenchmarkResult { min, mean, runs }
}
