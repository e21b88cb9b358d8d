//! Tagged outcome for printed results.
//!
//! A timed operation hands back either a result matrix or the shape
//! complaint it reported. Folding both into one enum keeps rendering
//! exhaustive instead of branching on what the value happens to be at
//! print time.

use std::fmt;

use crate::error::ShapeError;

/// What a shape-checked operation produced.
///
/// `M` is whichever dense representation the operation works in - the
/// crate's own [`Matrix`](crate::Matrix) or an `ndarray` array.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<M> {
    /// The computed product.
    Matrix(M),
    /// The descriptive incompatibility report.
    Mismatch(ShapeError),
}

impl<M> Outcome<M> {
    /// Returns the product matrix, if the shapes were compatible.
    pub fn matrix(&self) -> Option<&M> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Mismatch(_) => None,
        }
    }

    /// True when the operation reported a shape mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Outcome::Mismatch(_))
    }
}

impl<M> From<Result<M, ShapeError>> for Outcome<M> {
    fn from(result: Result<M, ShapeError>) -> Self {
        match result {
            Ok(m) => Outcome::Matrix(m),
            Err(e) => Outcome::Mismatch(e),
        }
    }
}

impl<M: fmt::Display> fmt::Display for Outcome<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Matrix(m) => m.fmt(f),
            Outcome::Mismatch(e) => write!(f, "Error: {e}"),
        }
    }
}
