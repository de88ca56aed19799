// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast store operations.
//!
//! Measures the performance of:
//! - Submitting new toasts (id generation + timer scheduling)
//! - Updating toasts in place by id
//! - Expiring a full stack in one tick

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toasted::store::ToastStore;
use iced_toasted::toast::Toast;
use std::hint::black_box;
use std::time::{Duration, Instant};

const STACK_SIZE: usize = 64;

fn filled_store(now: Instant) -> ToastStore {
    let (mut store, _sender) = ToastStore::channel();
    for i in 0..STACK_SIZE {
        store.submit(Toast::info(format!("toast {i}"), 1_000).with_id(i.to_string()), now);
    }
    store
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");
    let now = Instant::now();

    group.bench_function("submit_new", |b| {
        b.iter_batched(
            || ToastStore::channel().0,
            |mut store| {
                for _ in 0..STACK_SIZE {
                    store.submit(Toast::info("hello", 1_000), now);
                }
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("update_in_place", |b| {
        let mut store = filled_store(now);
        let last_id = (STACK_SIZE - 1).to_string();
        b.iter(|| {
            black_box(store.submit(Toast::warning("again", 1_000).with_id(last_id.as_str()), now));
        });
    });

    group.finish();
}

fn bench_expire(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");
    let now = Instant::now();

    group.bench_function("expire_all", |b| {
        b.iter_batched(
            || filled_store(now),
            |mut store| black_box(store.tick(now + Duration::from_secs(1))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_submit, bench_expire);
criterion_main!(benches);
