use std::hint::black_box;

use b64fix_rs::b64fix::{Alphabet, Seed, Termination, generate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("b64fix_generate");
    for size_kb in [1, 64, 1024] {
        let n = size_kb * 1024;
        group.bench_with_input(BenchmarkId::new("exact", format!("{}KB", size_kb)), &n, |b, &n| {
            b.iter(|| {
                generate(&Alphabet::STANDARD, &Seed::STANDARD, black_box(n), Termination::Exact)
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("padded", format!("{}KB", size_kb)), &n, |b, &n| {
            b.iter(|| {
                generate(&Alphabet::STANDARD, &Seed::STANDARD, black_box(n), Termination::Padded)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_seed_search(c: &mut Criterion) {
    c.bench_function("b64fix_seed_find", |b| {
        b.iter(|| Seed::find(black_box(&Alphabet::STANDARD)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_seed_search);
criterion_main!(benches);
