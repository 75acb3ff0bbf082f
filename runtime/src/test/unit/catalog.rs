use crate::catalog::{AxpyElement, DAXPY, KERNEL_ENTRY_POINT, MAT_MULT, MAT_MULT_TILED, SAXPY};

#[test]
fn every_kernel_exports_the_fixed_entry_point() {
    for source in [SAXPY, DAXPY, MAT_MULT, MAT_MULT_TILED] {
        assert!(!source.trim().is_empty());
        assert!(
            source.contains(&format!("__kernel void {KERNEL_ENTRY_POINT}")),
            "kernel blob must define the `{KERNEL_ENTRY_POINT}` entry point"
        );
    }
}

#[test]
fn axpy_sources_are_precision_specific() {
    assert_eq!(<f32 as AxpyElement>::SOURCE, SAXPY);
    assert_eq!(<f64 as AxpyElement>::SOURCE, DAXPY);
    assert!(SAXPY.contains("float"));
    assert!(!SAXPY.contains("double"));
    assert!(DAXPY.contains("double"));
}
