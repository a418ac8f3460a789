use std::sync::OnceLock;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seq_macro::seq;
use xforms::{compose, for_each, map, transduce};

const NUM_OPS: usize = 20;
const NUM_INTS: usize = 100_000;

fn vals() -> impl Iterator<Item = u64> {
    static VALS: OnceLock<Vec<u64>> = OnceLock::new();
    VALS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        let mut vals = Vec::with_capacity(NUM_INTS);
        for _ in 0..NUM_INTS {
            vals.push(rand::Rng::gen_range(&mut rng, 0..1_000_000));
        }
        vals
    })
    .iter()
    .copied()
}

fn benchmark_xforms(c: &mut Criterion) {
    c.bench_function("arithmetic/xforms", |b| {
        let _init = vals();

        b.iter(|| {
            let xf = seq!(N in 0..20 {
                compose!(
                    #(
                        map(|x: u64| x + N),
                    )*
                )
            });
            transduce(
                xf,
                for_each(|x: u64| {
                    black_box(x);
                }),
                vals(),
            );
        })
    });
}

fn benchmark_iter(c: &mut Criterion) {
    c.bench_function("arithmetic/iter", |b| {
        let _init = vals();

        b.iter(|| {
            seq!(N in 0..20 {
                let iter = vals()
                    #(.map(|x| x + N))*;
                for x in iter {
                    black_box(x);
                }
            });
        })
    });
}

fn benchmark_raw(c: &mut Criterion) {
    c.bench_function("arithmetic/raw", |b| {
        let _init = vals();

        b.iter(|| {
            for mut x in vals() {
                for i in 0..NUM_OPS as u64 {
                    x += i;
                }
                black_box(x);
            }
        })
    });
}

criterion_group!(arithmetic, benchmark_xforms, benchmark_iter, benchmark_raw);
criterion_main!(arithmetic);
