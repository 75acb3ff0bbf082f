use crate::matmul::{
    mat_mult, mat_mult_blocked, mat_mult_parallel, mat_mult_transposed, mat_mult_transposed_parallel, transpose,
    transpose_parallel,
};

#[test]
fn identity_times_b_is_b() {
    let identity = vec![1, 0, 0, 0, 1, 0, 0, 0, 1];
    let b = vec![5, -3, 2, 7, 0, 9, 1, 4, -8];
    assert_eq!(mat_mult(&identity, &b, 3, 3, 3), b);
}

#[test]
fn known_rectangular_product() {
    // (2x3) * (3x2)
    let a = vec![1, 2, 3, 4, 5, 6];
    let b = vec![7, 8, 9, 10, 11, 12];
    assert_eq!(mat_mult(&a, &b, 2, 3, 2), vec![58, 64, 139, 154]);
}

#[test]
fn one_by_one() {
    assert_eq!(mat_mult(&[3], &[-7], 1, 1, 1), vec![-21]);
}

#[test]
fn transpose_of_rectangular_matrix() {
    // 2x3 -> 3x2
    let a = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(transpose(&a, 2, 3), vec![1, 4, 2, 5, 3, 6]);
}

#[test]
fn transpose_round_trips() {
    let a: Vec<i32> = (0..12).collect();
    assert_eq!(transpose(&transpose(&a, 3, 4), 4, 3), a);
}

#[test]
fn transpose_parallel_matches_sequential() {
    let a: Vec<i32> = (0..35).map(|i| i * 3 - 17).collect();
    assert_eq!(transpose_parallel(&a, 5, 7), transpose(&a, 5, 7));
}

#[test]
fn transposed_variant_matches_reference() {
    let a: Vec<i32> = (0..6).collect();
    let b: Vec<i32> = (0..6).map(|i| 6 - i).collect();
    let b_t = transpose(&b, 3, 2);
    assert_eq!(mat_mult_transposed(&a, &b_t, 2, 3, 2), mat_mult(&a, &b, 2, 3, 2));
}

#[test]
fn parallel_variants_match_reference() {
    let rows = 9;
    let inner = 5;
    let cols = 11;
    let a: Vec<i32> = (0..rows * inner).map(|i| (i as i32 % 13) - 6).collect();
    let b: Vec<i32> = (0..inner * cols).map(|i| (i as i32 % 7) - 3).collect();

    let reference = mat_mult(&a, &b, rows, inner, cols);
    assert_eq!(mat_mult_parallel(&a, &b, rows, inner, cols), reference);

    let b_t = transpose(&b, inner, cols);
    assert_eq!(mat_mult_transposed_parallel(&a, &b_t, rows, inner, cols), reference);
}

#[test]
fn blocked_matches_reference_on_block_multiples() {
    let rows = 32;
    let inner = 16;
    let cols = 48;
    let a: Vec<i32> = (0..rows * inner).map(|i| (i as i32 % 19) - 9).collect();
    let b: Vec<i32> = (0..inner * cols).map(|i| (i as i32 % 23) - 11).collect();
    assert_eq!(mat_mult_blocked(&a, &b, rows, inner, cols), mat_mult(&a, &b, rows, inner, cols));
}

#[test]
fn blocked_matches_reference_on_ragged_shapes() {
    // Shapes deliberately not multiples of the block edge.
    let rows = 17;
    let inner = 33;
    let cols = 9;
    let a: Vec<i32> = (0..rows * inner).map(|i| (i as i32 % 19) - 9).collect();
    let b: Vec<i32> = (0..inner * cols).map(|i| (i as i32 % 23) - 11).collect();
    assert_eq!(mat_mult_blocked(&a, &b, rows, inner, cols), mat_mult(&a, &b, rows, inner, cols));
}
