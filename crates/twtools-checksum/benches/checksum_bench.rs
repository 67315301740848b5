//! チェックサム ベンチマーク
//!
//! 目的: 検証・生成の各処理を数秒で計測する最小セットを提供する。

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twtools_checksum::{
    TwidOptions, generate_twid_with, generate_ubn_with, generate_ubns_with, is_valid_twid,
    is_valid_ubn,
};

#[cfg(feature = "parallel")]
use twtools_checksum::generate_ubns_parallel;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    group.bench_function("twid", |b| b.iter(|| is_valid_twid(black_box("A123456789"))));
    group.bench_function("ubn", |b| b.iter(|| is_valid_ubn(black_box("24-53-6806"))));

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = StdRng::seed_from_u64(417);

    group.bench_function("twid", |b| {
        b.iter(|| generate_twid_with(&mut rng, TwidOptions::default()))
    });
    group.bench_function("ubn", |b| b.iter(|| generate_ubn_with(&mut rng)));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let mut rng = StdRng::seed_from_u64(477);

    group.bench_function("sequential_1000", |b| {
        b.iter(|| generate_ubns_with(&mut rng, black_box(1000)))
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel_1000", |b| {
        b.iter(|| generate_ubns_parallel(black_box(1000)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_validate, bench_generate, bench_batch
}
criterion_main!(benches);
