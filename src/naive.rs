//! Reference triple-loop multiplication.
//!
//! This is the slow side of the comparison: the textbook i-j-k loop over
//! flat row-major slices, plus a shape-checked wrapper and a
//! multi-threaded variant that splits the outer loop across rows.

use std::thread;

use crate::error::ShapeError;
use crate::matrix::dense::Matrix;

/// Naive matrix multiplication kernel using i-j-k loop order.
///
/// The innermost loop accesses B with stride `n` (column-wise), causing
/// cache misses on every iteration. That's what this demo is here to
/// show, so keep it this way.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[i64], b: &[i64], c: &mut [i64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                c[i * n + j] += a[i * k + p] * b[p * n + j];
            }
        }
    }
}

/// Shape-checked naive product.
///
/// Validates the inner dimensions before computing anything; a mismatch
/// comes back as a [`ShapeError`] value rather than a panic, so callers
/// can print it like any other result. Exact `i64` arithmetic, standard
/// cubic-time summation.
///
/// # Example
///
/// ```
/// use matmul_demo::{Matrix, multiply};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
///
/// let c = multiply(&a, &b).expect("inner dimensions match");
/// assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]));
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, ShapeError> {
    if a.cols() != b.rows() {
        return Err(ShapeError::inner_dimension(a.shape(), b.shape()));
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = vec![0; m * n];
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c, m, n, k);
    Ok(Matrix::from_vec(m, n, c))
}

/// Same as [`multiply`] but splits the outer loop across threads.
///
/// Row chunks go to scoped threads, each running the plain kernel on its
/// portion. Thread count adapts to matrix size - small products stay
/// single-threaded because the spawn overhead isn't worth it.
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn multiply_parallel(
    a: &Matrix,
    b: &Matrix,
    num_threads: usize,
) -> Result<Matrix, ShapeError> {
    if a.cols() != b.rows() {
        return Err(ShapeError::inner_dimension(a.shape(), b.shape()));
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let effective_threads = choose_thread_count(m, n, k, num_threads);

    if effective_threads <= 1 {
        return multiply(a, b);
    }

    let rows_per_thread = m.div_ceil(effective_threads);
    let a_flat = a.as_slice();
    let b_flat = b.as_slice();

    let mut c = vec![0; m * n];
    thread::scope(|s| {
        for (tid, chunk) in c.chunks_mut(rows_per_thread * n).enumerate() {
            let rows = chunk.len() / n;
            let a_part = &a_flat[tid * rows_per_thread * k..][..rows * k];
            s.spawn(move || matmul_naive_ijk(a_part, b_flat, chunk, rows, n, k));
        }
    });

    Ok(Matrix::from_vec(m, n, c))
}

fn choose_thread_count(m: usize, n: usize, k: usize, max_threads: usize) -> usize {
    let flops = 2.0 * (m * n * k) as f64;

    const SINGLE_THREAD_THRESHOLD: f64 = 100_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 300_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (m / 64).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads)
}
