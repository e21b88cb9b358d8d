//! Naive vs. ndarray matrix multiplication, timed.
//!
//! I wanted to see the gap between the textbook triple loop and a real
//! dense-array library on the same inputs, so this crate runs both and
//! times every call. The slow side is the crate's own [`Matrix`] plus a
//! plain i-j-k kernel; the fast side converts once to `ndarray` and runs
//! `dot`, `general_mat_mul`, and the elementwise product.
//!
//! ## Usage
//!
//! ```
//! use matmul_demo::{Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//!
//! let c = multiply(&a, &b).expect("inner dimensions match");
//! assert_eq!(c.get(0, 1), 22);
//! ```
//!
//! Shape mismatches are values, not panics: every entry point validates
//! dimensions first and returns a [`ShapeError`] you can print like any
//! other result.
//!
//! ## What's inside
//!
//! - The dense integer [`Matrix`] and its uniform-random generator
//! - The i-j-k reference kernel, single- and multi-threaded
//! - The `ndarray` boundary: dot, generalized matmul, elementwise
//! - A timing harness that wraps any operation without changing it

pub mod error;
pub mod matrix;
pub mod naive;
pub mod ndarray_ops;
pub mod report;
pub mod timing;

pub use error::ShapeError;
pub use matrix::dense::Matrix;
pub use matrix::random::{CELL_MAX, CELL_MIN, random_matrix};
pub use naive::{multiply, multiply_parallel};
pub use report::Outcome;
pub use timing::{run_reported, time};
