use abtest_bayesian::BayesianTest;
use abtest_core::VariantObservation;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_posterior_comparison(c: &mut Criterion) {
    let control = VariantObservation::new(10_000, 500).unwrap();
    let treatment = VariantObservation::new(9_800, 560).unwrap();

    c.bench_function("monte_carlo_100k", |b| {
        let test = BayesianTest::new().with_seed(42);
        b.iter(|| {
            test.evaluate(black_box(&control), black_box(&treatment))
                .unwrap()
        })
    });

    c.bench_function("exact_closed_form", |b| {
        let test = BayesianTest::new();
        b.iter(|| {
            test.evaluate_exact(black_box(&control), black_box(&treatment))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_posterior_comparison);
criterion_main!(benches);
