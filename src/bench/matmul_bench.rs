//! Criterion benchmark: naive triple loop vs. ndarray dot.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use matmul_demo::ndarray_ops::{dot, to_array};
use matmul_demo::{multiply, random_matrix};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for size in [16, 64, 128] {
        let a = random_matrix(&mut rng, size, size);
        let b = random_matrix(&mut rng, size, size);
        let a_nd = to_array(&a);
        let b_nd = to_array(&b);

        c.bench_function(&format!("naive {size}x{size}"), |bench| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });

        c.bench_function(&format!("ndarray dot {size}x{size}"), |bench| {
            bench.iter(|| dot(black_box(&a_nd), black_box(&b_nd)))
        });
    }
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
