use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aeromist_core::{InputParameters, PhysicsEvaluator, SweepAxis, SweepRange};

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = PhysicsEvaluator::default();
    let params = InputParameters::default();

    c.bench_function("evaluate_reference", |b| {
        b.iter(|| evaluator.evaluate(black_box(&params)))
    });

    c.bench_function("sweep_calibrated_droplets", |b| {
        b.iter(|| {
            evaluator.sweep(
                black_box(&params),
                SweepAxis::DropletDiameter,
                SweepRange::calibrated_droplets(),
            )
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
