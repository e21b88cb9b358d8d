use std::fmt;

/// A dense rows × cols matrix of `i64` cells, stored flat in row-major
/// order.
///
/// Matrices are plain values: build one, multiply it, print it. Every
/// operation allocates a fresh result rather than mutating in place, and
/// the constructors enforce the rectangular invariant so the rest of the
/// crate can index by `row * cols + col` without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from flat row-major data.
    ///
    /// # Panics
    ///
    /// Panics if the slice length doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements, got {}",
            rows,
            cols,
            rows * cols,
            data.len()
        );
        Self { data, rows, cols }
    }

    /// Creates a matrix from nested rows. Handy for literals in tests
    /// and docs.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    ///
    /// # Example
    ///
    /// ```
    /// use matmul_demo::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 2), 6);
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                n_cols,
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                n_cols
            );
            data.extend_from_slice(row);
        }

        Self {
            data,
            rows: n_rows,
            cols: n_cols,
        }
    }

    /// Returns the shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Returns the underlying row-major data as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// Full dump, one bracketed row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for (j, cell) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "]")?;
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
