use std::sync::OnceLock;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use itertools::Itertools;
use xforms::{compose, dedupe, filter, for_each, map, partition_all, take, transduce};

const NUM_INTS: usize = 100_000;

fn ints() -> impl Iterator<Item = i64> {
    static INTS: OnceLock<Vec<i64>> = OnceLock::new();
    INTS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(8172645);
        let mut ints = Vec::with_capacity(NUM_INTS);
        for _ in 0..NUM_INTS {
            ints.push(rand::Rng::gen_range(&mut rng, 0..100));
        }
        ints
    })
    .iter()
    .copied()
}

fn benchmark_map(c: &mut Criterion) {
    c.bench_function("micro_ops/map/xforms", |b| {
        let _init = ints();

        b.iter(|| {
            transduce(
                map(|x: i64| x + 1),
                for_each(|x: i64| {
                    black_box(x);
                }),
                ints(),
            );
        })
    });
    c.bench_function("micro_ops/map/iter", |b| {
        let _init = ints();

        b.iter(|| {
            for x in ints().map(|x| x + 1) {
                black_box(x);
            }
        })
    });
}

fn benchmark_filter(c: &mut Criterion) {
    c.bench_function("micro_ops/filter/xforms", |b| {
        let _init = ints();

        b.iter(|| {
            transduce(
                filter(|&x: &i64| x % 2 == 0),
                for_each(|x: i64| {
                    black_box(x);
                }),
                ints(),
            );
        })
    });
    c.bench_function("micro_ops/filter/iter", |b| {
        let _init = ints();

        b.iter(|| {
            for x in ints().filter(|&x| x % 2 == 0) {
                black_box(x);
            }
        })
    });
}

fn benchmark_dedupe(c: &mut Criterion) {
    c.bench_function("micro_ops/dedupe/xforms", |b| {
        let _init = ints();

        b.iter(|| {
            transduce(
                dedupe(),
                for_each(|x: i64| {
                    black_box(x);
                }),
                ints(),
            );
        })
    });
    c.bench_function("micro_ops/dedupe/itertools", |b| {
        let _init = ints();

        b.iter(|| {
            for x in ints().dedup() {
                black_box(x);
            }
        })
    });
}

fn benchmark_partition_all(c: &mut Criterion) {
    c.bench_function("micro_ops/partition_all/xforms", |b| {
        let _init = ints();

        b.iter(|| {
            transduce(
                partition_all(8),
                for_each(|part: Vec<i64>| {
                    black_box(part.len());
                }),
                ints(),
            );
        })
    });
    c.bench_function("micro_ops/partition_all/itertools", |b| {
        let _init = ints();

        b.iter(|| {
            let chunks = ints().chunks(8);
            for chunk in &chunks {
                black_box(chunk.count());
            }
        })
    });
}

fn benchmark_fused_chain(c: &mut Criterion) {
    c.bench_function("micro_ops/fused_chain/xforms", |b| {
        let _init = ints();

        b.iter(|| {
            let xf = compose!(
                filter(|&x: &i64| x % 2 == 0),
                map(|x: i64| x / 2),
                take(NUM_INTS / 4),
            );
            transduce(
                xf,
                for_each(|x: i64| {
                    black_box(x);
                }),
                ints(),
            );
        })
    });
    c.bench_function("micro_ops/fused_chain/iter", |b| {
        let _init = ints();

        b.iter(|| {
            let iter = ints()
                .filter(|&x| x % 2 == 0)
                .map(|x| x / 2)
                .take(NUM_INTS / 4);
            for x in iter {
                black_box(x);
            }
        })
    });
}

criterion_group!(
    micro_ops,
    benchmark_map,
    benchmark_filter,
    benchmark_dedupe,
    benchmark_partition_all,
    benchmark_fused_chain,
);
criterion_main!(micro_ops);
