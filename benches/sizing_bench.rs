//! Benchmarks for the sizing pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cable_sizing::prelude::*;

fn bench_compute_cable_sizing(c: &mut Criterion) {
    let params = CircuitParameters::new(
        5000.0,
        230.0,
        0.9,
        PhaseType::Single,
        25.0,
        Conductor::Copper,
    )
    .with_derating(0.8, 0.94);

    c.bench_function("compute_cable_sizing", |b| {
        b.iter(|| compute_cable_sizing(black_box(&params)).unwrap())
    });
}

fn bench_select_cross_section(c: &mut Criterion) {
    c.bench_function("select_cross_section", |b| {
        b.iter(|| select_cross_section(black_box(150.0), Conductor::Copper).unwrap())
    });
}

criterion_group!(benches, bench_compute_cable_sizing, bench_select_cross_section);
criterion_main!(benches);
