//! Synthesis benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use alsvid_op::{PauliOperator, PauliTerm};
use alsvid_synth::{
    ConstraintOptions, SynthesisOptions, suzuki_trotter, synthesize_with_depth_constraint,
};

fn ising(n: usize) -> PauliOperator {
    let mut h = PauliOperator::new(n);
    for q in 0..n - 1 {
        h.push(PauliTerm::zz(n, -1.0, q, q + 1).unwrap()).unwrap();
    }
    for q in 0..n {
        h.push(PauliTerm::x(n, -0.7, q).unwrap()).unwrap();
    }
    h
}

fn bench_suzuki_trotter(c: &mut Criterion) {
    let h = ising(8);
    let options = SynthesisOptions::default();

    c.bench_function("suzuki_trotter_8q_order2_r10", |b| {
        b.iter(|| suzuki_trotter(black_box(&h), 2, 10, 1.0, &options).unwrap())
    });
}

fn bench_depth_search(c: &mut Criterion) {
    let h = ising(8);
    let options = ConstraintOptions::default();

    c.bench_function("depth_search_8q_budget200", |b| {
        b.iter(|| synthesize_with_depth_constraint(black_box(&h), 1.0, 200, &options).unwrap())
    });
}

criterion_group!(benches, bench_suzuki_trotter, bench_depth_search);
criterion_main!(benches);
