use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_capture::{Capture, MAX_VALUE};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_values(count: usize, rng: &mut StdRng) -> Vec<u32> {
    (0..count).map(|_| rng.gen_range(1..=MAX_VALUE)).collect()
}

fn filled_capture(values: &[u32]) -> Capture {
    let mut capture = Capture::new();
    for &value in values {
        capture.add(value).unwrap();
    }
    capture
}

fn bench_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1234);
    let values = random_values(10_000, &mut rng);
    c.bench_function("capture_add_10k", |b| {
        b.iter(|| {
            let capture = filled_capture(&values);
            black_box(capture.total());
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2024);
    let sparse = filled_capture(&random_values(10, &mut rng));
    let dense = filled_capture(&random_values(100_000, &mut rng));

    c.bench_function("build_sparse", |b| b.iter(|| black_box(sparse.build())));
    c.bench_function("build_dense", |b| b.iter(|| black_box(dense.build())));
}

fn bench_queries(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let stats = filled_capture(&random_values(50_000, &mut rng)).build();
    let queries = random_values(2_000, &mut rng);

    c.bench_function("query_2k_mixed", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for pair in queries.chunks_exact(2) {
                acc += stats.less(pair[0]).unwrap();
                acc += stats.greater(pair[1]).unwrap();
                acc += stats.between(pair[0], pair[1]).unwrap();
            }
            black_box(acc);
        })
    });
}

criterion_group!(benches, bench_add, bench_build, bench_queries);
criterion_main!(benches);
