use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use super::dense::Matrix;

/// Smallest value a generated cell can take.
pub const CELL_MIN: i64 = 10;

/// Largest value a generated cell can take (inclusive).
pub const CELL_MAX: i64 = 20;

/// Fills a `rows` × `cols` matrix with independent uniform draws from
/// `[CELL_MIN, CELL_MAX]`.
///
/// The random source is an argument rather than a hidden global, so a
/// seeded `StdRng` reproduces the same matrix in tests while the demo
/// binary just hands in `thread_rng`.
///
/// # Example
///
/// ```
/// use matmul_demo::{random_matrix, CELL_MAX, CELL_MIN};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let m = random_matrix(&mut rng, 3, 4);
///
/// assert_eq!(m.shape(), (3, 4));
/// assert!(m.as_slice().iter().all(|&v| (CELL_MIN..=CELL_MAX).contains(&v)));
/// ```
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Matrix {
    let between = Uniform::from(CELL_MIN..=CELL_MAX);
    let data = (0..rows * cols).map(|_| between.sample(rng)).collect();
    Matrix::from_vec(rows, cols, data)
}
