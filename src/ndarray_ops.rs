//! The optimized side of the comparison: `ndarray`-backed products.
//!
//! This is the external-library boundary. The crate's own
//! [`Matrix`](crate::Matrix) converts into an `Array2<i64>` once, and the
//! library operations (dot, generalized matmul, elementwise product) run
//! on that representation. Shape checks happen here, before calling into
//! `ndarray`, because `ndarray` panics where this crate reports a value.

use ndarray::Array2;
use ndarray::linalg::general_mat_mul;

use crate::error::ShapeError;
use crate::matrix::dense::Matrix;

/// Converts a [`Matrix`] into `ndarray`'s dense representation,
/// preserving shape and row-major order.
pub fn to_array(m: &Matrix) -> Array2<i64> {
    let (rows, cols) = m.shape();
    Array2::from_shape_vec((rows, cols), m.as_slice().to_vec())
        .expect("matrix data length matches its dimensions")
}

/// Standard dense product via `ndarray`'s `dot`.
pub fn dot(a: &Array2<i64>, b: &Array2<i64>) -> Result<Array2<i64>, ShapeError> {
    check_inner_dimensions(a, b)?;
    Ok(a.dot(b))
}

/// Generalized matmul via `ndarray::linalg::general_mat_mul`, computing
/// `C = 1 * A * B + 0 * C` into a zeroed result.
pub fn general_matmul(a: &Array2<i64>, b: &Array2<i64>) -> Result<Array2<i64>, ShapeError> {
    check_inner_dimensions(a, b)?;
    let mut c = Array2::zeros((a.nrows(), b.ncols()));
    general_mat_mul(1, a, b, 0, &mut c);
    Ok(c)
}

/// Elementwise (cell-by-cell) product. Not matrix multiplication.
///
/// Shapes are compatible when every axis matches, or the right operand's
/// axis is 1 and broadcasts across the left's. Anything else is reported
/// as a [`ShapeError::Elementwise`] value.
pub fn elementwise(a: &Array2<i64>, b: &Array2<i64>) -> Result<Array2<i64>, ShapeError> {
    let rows_fit = a.nrows() == b.nrows() || b.nrows() == 1;
    let cols_fit = a.ncols() == b.ncols() || b.ncols() == 1;
    if !(rows_fit && cols_fit) {
        return Err(ShapeError::elementwise(a.dim(), b.dim()));
    }
    Ok(a * b)
}

fn check_inner_dimensions(a: &Array2<i64>, b: &Array2<i64>) -> Result<(), ShapeError> {
    if a.ncols() != b.nrows() {
        return Err(ShapeError::inner_dimension(a.dim(), b.dim()));
    }
    Ok(())
}
