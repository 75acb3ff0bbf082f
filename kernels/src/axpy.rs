//! Strided AXPY reference kernels.

use std::ops::{Add, Mul};

use rayon::prelude::*;

/// Number of updates that stay inside both stride-scaled vector bounds.
///
/// An update touches `x[i * incx]` and `y[i * incy]`, so iteration stops at
/// the first index past either vector; an oversized `n` is clamped instead
/// of faulting.
fn effective_len(n: i64, x_len: usize, incx: usize, y_len: usize, incy: usize) -> usize {
    (n as usize).min(x_len.div_ceil(incx)).min(y_len.div_ceil(incy))
}

/// `y[i * incy] += a * x[i * incx]` for `i` in `[0, n)`, sequentially.
///
/// Non-positive `n` or strides are a no-op, as are the iterations beyond
/// either vector's bound.
pub fn axpy_sequential<T>(n: i64, a: T, x: &[T], incx: i64, y: &mut [T], incy: i64)
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    if n <= 0 || incx <= 0 || incy <= 0 {
        return;
    }
    let (incx, incy) = (incx as usize, incy as usize);
    let count = effective_len(n, x.len(), incx, y.len(), incy);

    for index in 0..count {
        y[index * incy] = y[index * incy] + a * x[index * incx];
    }
}

/// Fork-join variant of [`axpy_sequential`] with identical semantics.
pub fn axpy_parallel<T>(n: i64, a: T, x: &[T], incx: i64, y: &mut [T], incy: i64)
where
    T: Copy + Add<Output = T> + Mul<Output = T> + Send + Sync,
{
    if n <= 0 || incx <= 0 || incy <= 0 {
        return;
    }
    let (incx, incy) = (incx as usize, incy as usize);
    let count = effective_len(n, x.len(), incx, y.len(), incy);

    // Chunks of `incy` elements start exactly at the strided output
    // positions, so every worker owns a disjoint slice of `y`.
    y.par_chunks_mut(incy).take(count).enumerate().for_each(|(index, chunk)| {
        chunk[0] = chunk[0] + a * x[index * incx];
    });
}
