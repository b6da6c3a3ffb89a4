use std::ops::Range;

use super::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation and the reference that
/// every other strategy must agree with cell for cell. Accumulation wraps
/// on overflow, so results are identical in debug and release builds.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(
    a: &[Element],
    b: &[Element],
    c: &mut [Element],
    m: usize,
    n: usize,
    k: usize,
) {
    matmul_naive_ijk_rows(a, b, c, 0..m, n, k);
}

/// i-j-k multiplication restricted to a band of output rows.
///
/// `c_band` holds only the rows in `rows`, so its length is
/// `rows.len() * n`. Row `i` of the product lands at
/// `c_band[(i - rows.start) * n..]`. The threaded multiplier hands each
/// worker its own band, which is how writes stay disjoint.
pub fn matmul_naive_ijk_rows(
    a: &[Element],
    b: &[Element],
    c_band: &mut [Element],
    rows: Range<usize>,
    n: usize,
    k: usize,
) {
    debug_assert_eq!(c_band.len(), rows.len() * n);

    for (local, i) in rows.enumerate() {
        for j in 0..n {
            let mut sum: Element = 0;
            for p in 0..k {
                sum = sum.wrapping_add(a[i * k + p].wrapping_mul(b[p * n + j]));
            }
            c_band[local * n + j] = sum;
        }
    }
}
