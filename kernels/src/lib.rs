//! CPU reference kernels.
//!
//! Sequential and rayon-parallel implementations of the two benchmarked
//! operations: strided AXPY (`y[i*incy] += a * x[i*incx]`) and dense
//! row-major integer matrix multiplication. These are the correctness
//! baseline the accelerator path is compared against, and the fallback when
//! no accelerator resolves.
//!
//! All variants of an operation produce identical output on identical
//! input: the parallel kernels partition work into disjoint output slices
//! and perform the same per-element arithmetic as their sequential
//! counterparts.

pub mod axpy;
pub mod matmul;

#[cfg(test)]
pub mod test;

pub use axpy::{axpy_parallel, axpy_sequential};
pub use matmul::{
    mat_mult, mat_mult_blocked, mat_mult_parallel, mat_mult_transposed, mat_mult_transposed_parallel, transpose,
    transpose_parallel,
};
