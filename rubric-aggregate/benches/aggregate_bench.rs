use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rubric_aggregate::{apply_all, init, merge, merge_all, update};
use rubric_core::config::AggregatorConfig;
use rubric_core::evidence::{AllTraitState, Observation, TraitKey};

fn observations(n: usize) -> Vec<Observation> {
    (0..n)
        .map(|i| {
            Observation::new(
                TraitKey::ALL[i % 3],
                (i as f64 * 0.37) % 1.0,
                0.05 + (i as f64 * 0.13) % 0.95,
            )
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let config = AggregatorConfig::default();
    let state = init(&config);
    let observation = Observation::new(TraitKey::Reasoning, 0.7, 0.4);

    c.bench_function("aggregate_update_single", |b| {
        b.iter(|| update(black_box(&state), black_box(&observation), &config))
    });
}

fn bench_apply_all(c: &mut Criterion) {
    let config = AggregatorConfig::default();
    let batch = observations(1_000);

    c.bench_function("aggregate_apply_all_1k", |b| {
        b.iter(|| apply_all(&init(&config), black_box(&batch), &config))
    });
}

fn bench_merge(c: &mut Criterion) {
    let config = AggregatorConfig::default();
    let a = apply_all(&init(&config), &observations(50), &config).unwrap().0;
    let b_state = apply_all(&init(&config), &observations(70), &config).unwrap().0;

    c.bench_function("aggregate_merge_pair", |b| {
        b.iter(|| merge(black_box(&a), black_box(&b_state), &config))
    });

    let partials: Vec<AllTraitState> = observations(10_000)
        .chunks(10)
        .map(|chunk| apply_all(&init(&config), chunk, &config).unwrap().0)
        .collect();

    c.bench_function("aggregate_merge_all_1k_partials", |b| {
        b.iter(|| merge_all(black_box(&partials), &config))
    });
}

criterion_group!(benches, bench_update, bench_apply_all, bench_merge);
criterion_main!(benches);
