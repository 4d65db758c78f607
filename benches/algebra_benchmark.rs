// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use intervalset::Interval;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const PAIR_COUNT: usize = 1024;

/// Draws an interval from a mix of bounded/unbounded and open/closed
/// shapes so the benchmarks exercise every comparison branch.
fn random_interval(rng: &mut StdRng) -> Interval<f64> {
    let a: f64 = rng.gen_range(-100.0..100.0);
    let b: f64 = rng.gen_range(-100.0..100.0);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    match rng.gen_range(0..8) {
        0 => Interval::closed(lo, hi),
        1 => Interval::open(lo, hi),
        2 => Interval::closed_open(lo, hi),
        3 => Interval::open_closed(lo, hi),
        4 => Interval::gt(a),
        5 => Interval::gte(a),
        6 => Interval::lt(a),
        _ => Interval::point(a),
    }
}

fn bench_algebra(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let pairs: Vec<(Interval<f64>, Interval<f64>)> = (0..PAIR_COUNT)
        .map(|_| (random_interval(&mut rng), random_interval(&mut rng)))
        .collect();

    let mut group = c.benchmark_group("algebra");
    group.throughput(Throughput::Elements(PAIR_COUNT as u64));

    group.bench_with_input(BenchmarkId::new("intersection", PAIR_COUNT), &pairs, |b, pairs| {
        b.iter(|| {
            for &(x, y) in pairs {
                black_box(x.intersection(black_box(y)));
            }
        })
    });

    group.bench_with_input(BenchmarkId::new("union", PAIR_COUNT), &pairs, |b, pairs| {
        b.iter(|| {
            let mut merged = 0usize;
            for &(x, y) in pairs {
                if x.union(black_box(y)).is_ok() {
                    merged += 1;
                }
            }
            black_box(merged)
        })
    });

    group.bench_with_input(BenchmarkId::new("complement", PAIR_COUNT), &pairs, |b, pairs| {
        b.iter(|| {
            let mut pieces = 0usize;
            for &(x, _) in pairs {
                pieces += black_box(x.complement()).len();
            }
            black_box(pieces)
        })
    });

    group.bench_with_input(BenchmarkId::new("is_subset_of", PAIR_COUNT), &pairs, |b, pairs| {
        b.iter(|| {
            let mut subsets = 0usize;
            for &(x, y) in pairs {
                if x.is_subset_of(black_box(y)) {
                    subsets += 1;
                }
            }
            black_box(subsets)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_algebra);
criterion_main!(benches);
