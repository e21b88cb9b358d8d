//! The one failure mode in this crate: operand shapes that don't fit.

use thiserror::Error;

/// Dimension incompatibility between two operand matrices.
///
/// Shape problems are values, not panics: every multiply entry point
/// validates shapes before touching any cells and hands back one of
/// these, so callers and the timing harness always receive something
/// printable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The standard product needs the left operand's columns to equal
    /// the right operand's rows.
    #[error(
        "cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix: \
         left columns must equal right rows"
    )]
    InnerDimension {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// The elementwise product needs equal shapes, or a right operand
    /// whose axes broadcast.
    #[error(
        "cannot take the elementwise product of a {lhs_rows}x{lhs_cols} matrix and a \
         {rhs_rows}x{rhs_cols} matrix: shapes must match or broadcast"
    )]
    Elementwise {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}

impl ShapeError {
    pub(crate) fn inner_dimension(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        ShapeError::InnerDimension {
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }

    pub(crate) fn elementwise(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        ShapeError::Elementwise {
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }
}
