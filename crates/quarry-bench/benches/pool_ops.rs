//! Criterion micro-benchmarks for pool construction, allocation, and churn.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quarry_bench::churn_order;
use quarry_pool::Pool;

const CAPACITY: u32 = 1024;

/// Benchmark: construct a 1024-slot pool (arena + free-list linking).
fn bench_pool_new(c: &mut Criterion) {
    c.bench_function("pool_new_1024", |b| {
        b.iter(|| {
            let pool = Pool::<u64>::new(CAPACITY).unwrap();
            black_box(pool.capacity());
        });
    });
}

/// Benchmark: allocate every slot, then free them all in order.
fn bench_fill_and_drain(c: &mut Criterion) {
    c.bench_function("pool_fill_drain_1024", |b| {
        let mut pool = Pool::<u64>::new(CAPACITY).unwrap();
        let mut handles = Vec::with_capacity(CAPACITY as usize);
        b.iter(|| {
            for _ in 0..CAPACITY {
                handles.push(pool.allocate().unwrap());
            }
            for h in handles.drain(..) {
                black_box(pool.free(h).unwrap());
            }
        });
    });
}

/// Benchmark: the LIFO hot path — one slot allocated and freed in a
/// tight loop, always reusing the free-list head.
fn bench_lifo_hot_pair(c: &mut Criterion) {
    let mut pool = Pool::<u64>::new(CAPACITY).unwrap();
    c.bench_function("pool_lifo_hot_pair", |b| {
        b.iter(|| {
            let h = pool.allocate().unwrap();
            *pool.get_mut(h).unwrap() = Some(7);
            black_box(pool.free(h).unwrap());
        });
    });
}

/// Benchmark: fill the pool, free in a deterministic shuffled order,
/// then refill. Exercises the free list with a scattered link pattern
/// instead of the neat index-order chain construction produces.
fn bench_random_churn(c: &mut Criterion) {
    let order = churn_order(42, CAPACITY as usize);
    let mut pool = Pool::<u64>::new(CAPACITY).unwrap();
    let mut handles = Vec::with_capacity(CAPACITY as usize);

    c.bench_function("pool_random_churn_1024", |b| {
        b.iter(|| {
            for _ in 0..CAPACITY {
                handles.push(pool.allocate().unwrap());
            }
            for &i in &order {
                black_box(pool.free(handles[i]).unwrap());
            }
            handles.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_pool_new,
    bench_fill_and_drain,
    bench_lifo_hot_pair,
    bench_random_churn
);
criterion_main!(benches);
