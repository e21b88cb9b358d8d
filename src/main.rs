//! Demo runner: naive triple-loop multiplication vs. ndarray, timed.

use matmul_demo::ndarray_ops::{dot, elementwise, general_matmul, to_array};
use matmul_demo::{Outcome, multiply, multiply_parallel, random_matrix, run_reported};

fn main() {
    let mut rng = rand::thread_rng();

    // 15x23 times 23x63 is a valid standard product but not a valid
    // elementwise one, so the same pair drives both demos.
    let a = random_matrix(&mut rng, 15, 23);
    let b = random_matrix(&mut rng, 23, 63);

    println!("=== Naive Matrix Multiplication ===");

    run_reported("naive multiply", || Outcome::from(multiply(&a, &b)));
    run_reported("naive multiply (4 threads)", || {
        Outcome::from(multiply_parallel(&a, &b, 4))
    });

    println!("\n=== ndarray Matrix Operations ===");

    let a_nd = to_array(&a);
    let b_nd = to_array(&b);

    run_reported("ndarray dot", || Outcome::from(dot(&a_nd, &b_nd)));
    run_reported("ndarray general_mat_mul", || {
        Outcome::from(general_matmul(&a_nd, &b_nd))
    });

    println!("\n=== Elementwise Products (mismatched shapes) ===");

    run_reported("ndarray elementwise", || {
        Outcome::from(elementwise(&a_nd, &b_nd))
    });

    // Same-shape operands, so this time the elementwise product goes
    // through.
    let c = random_matrix(&mut rng, 5, 6);
    let d = random_matrix(&mut rng, 5, 6);
    let c_nd = to_array(&c);
    let d_nd = to_array(&d);

    println!("\n=== Elementwise Products (matching shapes) ===");

    run_reported("ndarray elementwise", || {
        Outcome::from(elementwise(&c_nd, &d_nd))
    });
}
