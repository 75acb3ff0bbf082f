//! Dense integer matrix multiplication reference kernels.
//!
//! All matrices are row-major: `a` is `rows x inner`, `b` is `inner x cols`
//! and every product is `rows x cols`. The `_transposed` variants take `b`
//! already transposed (`cols x inner`, see [`transpose`]) so the innermost
//! loop walks both operands contiguously.

use rayon::prelude::*;

/// Edge length of the cache blocks used by [`mat_mult_blocked`].
const BLOCK: usize = 16;

/// Naive triple loop, the correctness reference for every other variant.
pub fn mat_mult(a: &[i32], b: &[i32], rows: usize, inner: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    for z in 0..rows {
        for x in 0..cols {
            let mut acc = 0;
            for y in 0..inner {
                acc += a[z * inner + y] * b[y * cols + x];
            }
            out[z * cols + x] = acc;
        }
    }
    out
}

/// Row-parallel variant of [`mat_mult`]; each worker owns one output row.
pub fn mat_mult_parallel(a: &[i32], b: &[i32], rows: usize, inner: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    out.par_chunks_mut(cols).enumerate().for_each(|(z, row)| {
        for x in 0..cols {
            let mut acc = 0;
            for y in 0..inner {
                acc += a[z * inner + y] * b[y * cols + x];
            }
            row[x] = acc;
        }
    });
    out
}

/// Multiply against a pre-transposed `b_t` (`cols x inner`).
pub fn mat_mult_transposed(a: &[i32], b_t: &[i32], rows: usize, inner: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    for z in 0..rows {
        for x in 0..cols {
            let mut acc = 0;
            for y in 0..inner {
                acc += a[z * inner + y] * b_t[x * inner + y];
            }
            out[z * cols + x] = acc;
        }
    }
    out
}

/// Row-parallel variant of [`mat_mult_transposed`].
pub fn mat_mult_transposed_parallel(a: &[i32], b_t: &[i32], rows: usize, inner: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    out.par_chunks_mut(cols).enumerate().for_each(|(z, row)| {
        for x in 0..cols {
            let mut acc = 0;
            for y in 0..inner {
                acc += a[z * inner + y] * b_t[x * inner + y];
            }
            row[x] = acc;
        }
    });
    out
}

/// Cache-blocked variant of [`mat_mult`].
///
/// Block bounds are clamped, so shapes need not be multiples of the block
/// edge.
pub fn mat_mult_blocked(a: &[i32], b: &[i32], rows: usize, inner: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    for z0 in (0..rows).step_by(BLOCK) {
        for x0 in (0..cols).step_by(BLOCK) {
            for y0 in (0..inner).step_by(BLOCK) {
                for z in z0..(z0 + BLOCK).min(rows) {
                    for x in x0..(x0 + BLOCK).min(cols) {
                        let mut acc = 0;
                        for y in y0..(y0 + BLOCK).min(inner) {
                            acc += a[z * inner + y] * b[y * cols + x];
                        }
                        out[z * cols + x] += acc;
                    }
                }
            }
        }
    }
    out
}

/// Transpose of a `rows x cols` matrix.
pub fn transpose(a: &[i32], rows: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    for y in 0..rows {
        for x in 0..cols {
            out[x * rows + y] = a[y * cols + x];
        }
    }
    out
}

/// Fork-join variant of [`transpose`]; each worker owns one output row.
pub fn transpose_parallel(a: &[i32], rows: usize, cols: usize) -> Vec<i32> {
    let mut out = vec![0; rows * cols];
    out.par_chunks_mut(rows).enumerate().for_each(|(x, row)| {
        for y in 0..rows {
            row[y] = a[y * cols + x];
        }
    });
    out
}
