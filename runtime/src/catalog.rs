//! Kernel source catalog.
//!
//! Opaque device-language blobs handed verbatim to the program build stage;
//! nothing here is parsed by the host. Every kernel exports a single entry
//! point named [`KERNEL_ENTRY_POINT`].

/// Entry-point symbol every catalog kernel exports.
pub const KERNEL_ENTRY_POINT: &str = "operation";

/// Strided single-precision `y[i*incy] += a * x[i*incx]` with bounds guards.
///
/// Argument order: `(n, a, x, incx, x_len, y, incy, y_len)`.
pub const SAXPY: &str = r#"
__kernel void operation(long n, float a,
    const __global float *x, long incx, long x_len,
    __global float *y, long incy, long y_len)
{
    int index = get_global_id(0);
    if (index * incx >= x_len || index * incy >= y_len)
        return;
    if (index < n)
        y[index * incy] = y[index * incy] + a * x[index * incx];
}
"#;

/// Double-precision variant of [`SAXPY`], same argument order.
pub const DAXPY: &str = r#"
__kernel void operation(long n, double a,
    const __global double *x, long incx, long x_len,
    __global double *y, long incy, long y_len)
{
    int index = get_global_id(0);
    if (index * incx >= x_len || index * incy >= y_len)
        return;
    if (index < n)
        y[index * incy] = y[index * incy] + a * x[index * incx];
}
"#;

/// Naive integer matrix multiply, one work item per output cell.
///
/// Argument order: `(a, b, out, rows, inner, cols)`; global work size must
/// be exactly `[rows, cols]` rounded to the work-group shape.
pub const MAT_MULT: &str = r#"
__kernel void operation(const __global int *a, const __global int *b,
    __global int *out, unsigned int rows, unsigned int inner, unsigned int cols)
{
    int z = get_global_id(0);
    int x = get_global_id(1);
    int acc = 0;
    for (int y = 0; y < inner; ++y)
    {
        acc += a[z * inner + y] * b[y * cols + x];
    }
    out[z * cols + x] = acc;
}
"#;

/// Tiled integer matrix multiply staging 16x16 blocks in local memory.
///
/// Same argument order as [`MAT_MULT`]; every dimension must be a multiple
/// of the tile edge.
pub const MAT_MULT_TILED: &str = r#"
#define TILE_SIZE 16
__kernel void operation(const __global int *a, const __global int *b,
    __global int *out, unsigned int rows, unsigned int inner, unsigned int cols)
{
    int z = get_global_id(0);
    int x = get_global_id(1);
    int lz = get_local_id(0);
    int lx = get_local_id(1);

    __local int tile_a[TILE_SIZE][TILE_SIZE];
    __local int tile_b[TILE_SIZE][TILE_SIZE];

    int acc = 0;
    for (int tile = 0; tile * TILE_SIZE < inner; ++tile)
    {
        tile_a[lz][lx] = a[z * inner + (tile * TILE_SIZE + lx)];
        tile_b[lz][lx] = b[(tile * TILE_SIZE + lz) * cols + x];
        barrier(CLK_LOCAL_MEM_FENCE);
        for (int y = 0; y < TILE_SIZE; ++y)
        {
            acc += tile_a[lz][y] * tile_b[y][lx];
        }
        barrier(CLK_LOCAL_MEM_FENCE);
    }
    out[z * cols + x] = acc;
}
"#;

/// Maps a host element type to the kernel source implementing AXPY for it.
pub trait AxpyElement: Copy {
    const SOURCE: &'static str;
}

impl AxpyElement for f32 {
    const SOURCE: &'static str = SAXPY;
}

impl AxpyElement for f64 {
    const SOURCE: &'static str = DAXPY;
}
