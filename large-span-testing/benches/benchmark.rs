use criterion::{Criterion, criterion_group, criterion_main};
use large_span::{LargeSpan, LargeSpanMut};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const LEN: usize = 1 << 20;

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

fn copy_benchmark(c: &mut Criterion) {
    let source = random_bytes(42, LEN);
    let mut target = vec![0u8; LEN];

    c.bench_function("span copy_to", |b| {
        b.iter(|| {
            let mut dest = LargeSpanMut::new(&mut target);
            LargeSpan::new(black_box(&source))
                .copy_to(&mut dest)
                .unwrap();
        })
    });

    c.bench_function("slice copy_from_slice", |b| {
        b.iter(|| target.copy_from_slice(black_box(&source)))
    });

    c.bench_function("span copy_within", |b| {
        b.iter(|| LargeSpanMut::new(&mut target).copy_within(0, LEN - 64, black_box(64)))
    });

    c.bench_function("slice copy_within", |b| {
        b.iter(|| target.copy_within(0..LEN - 64, black_box(64)))
    });
}

fn fill_benchmark(c: &mut Criterion) {
    let mut bytes = random_bytes(7, LEN);
    c.bench_function("span fill u8", |b| {
        b.iter(|| LargeSpanMut::new(&mut bytes).fill(black_box(0xA5)))
    });
    c.bench_function("slice fill u8", |b| b.iter(|| bytes.fill(black_box(0xA5))));

    let mut words = vec![0u64; LEN / 8];
    c.bench_function("span fill u64", |b| {
        b.iter(|| LargeSpanMut::new(&mut words).fill(black_box(u64::MAX)))
    });
    c.bench_function("span zero u64", |b| {
        b.iter(|| LargeSpanMut::new(&mut words).zero())
    });
}

fn compare_benchmark(c: &mut Criterion) {
    let a = random_bytes(1, LEN);
    let b_bytes = a.clone();
    c.bench_function("span compare_memory", |b| {
        b.iter(|| LargeSpan::new(black_box(&a)).compare_memory(LargeSpan::new(&b_bytes)))
    });
    c.bench_function("span sequence_eq", |b| {
        b.iter(|| LargeSpan::new(black_box(&a)).sequence_eq(LargeSpan::new(&b_bytes)))
    });
    c.bench_function("span iter sum", |b| {
        b.iter(|| {
            LargeSpan::new(black_box(&a))
                .iter()
                .map(|&x| x as u64)
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, copy_benchmark, fill_benchmark, compare_benchmark);
criterion_main!(benches);
