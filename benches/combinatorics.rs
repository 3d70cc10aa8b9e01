use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;

use kumiko::Seq;
use kumiko::combinations;
use kumiko::permutations;
use kumiko::product_repeat;

fn bench_combinations(c: &mut Criterion) {
    c.bench_function("combinations 16 choose 8", |b| {
        b.iter(|| {
            let mut emitted = 0_usize;
            combinations(black_box((0_u32..16).collect::<Vec<_>>()), 8)
                .for_each(|_| emitted += 1);
            emitted
        })
    });
}

fn bench_permutations(c: &mut Criterion) {
    c.bench_function("permutations 8 take 6", |b| {
        b.iter(|| {
            let mut emitted = 0_usize;
            permutations(black_box((0_u32..8).collect::<Vec<_>>()), 6)
                .for_each(|_| emitted += 1);
            emitted
        })
    });
}

fn bench_product_repeat(c: &mut Criterion) {
    c.bench_function("product of 12 binary pools", |b| {
        b.iter(|| {
            let mut emitted = 0_usize;
            product_repeat(black_box(vec![0_u8, 1]), 12)
                .for_each(|_| emitted += 1);
            emitted
        })
    });
}

criterion_group!(
    benches,
    bench_combinations,
    bench_permutations,
    bench_product_repeat
);
criterion_main!(benches);
