//! Criterion micro-benchmarks for arena list operations.

use std::hint::black_box;

use chainslot_list::{ArenaList, ListConfig};
use criterion::{criterion_group, criterion_main, Criterion};

const N: u32 = 10_000;

fn unchecked(capacity: usize) -> ArenaList<u32> {
    ArenaList::with_config(&ListConfig::new(capacity).with_validation(false)).unwrap()
}

fn filled() -> ArenaList<u32> {
    let mut list = unchecked(N as usize);
    for v in 0..N {
        if v % 2 == 0 {
            list.insert_after_head(v).unwrap();
        } else {
            list.insert_before_tail(v).unwrap();
        }
    }
    list
}

/// Benchmark: 10K head inserts starting from capacity 8 (exercises growth).
fn bench_insert_with_growth(c: &mut Criterion) {
    c.bench_function("insert_after_head_10k_growing", |b| {
        b.iter(|| {
            let mut list = unchecked(8);
            for v in 0..N {
                list.insert_after_head(v).unwrap();
            }
            black_box(list.len())
        });
    });
}

/// Benchmark: delete and reinsert through the free list.
fn bench_churn(c: &mut Criterion) {
    let mut list = filled();
    c.bench_function("delete_head_insert_tail_10k", |b| {
        b.iter(|| {
            for _ in 0..N {
                let v = list.delete_head().unwrap();
                list.insert_before_tail(v).unwrap();
            }
        });
    });
}

/// Benchmark: logical position lookups, unsorted walk vs sorted index.
fn bench_logical_lookup(c: &mut Criterion) {
    let unsorted = filled();
    let mut sorted = filled();
    sorted.sort();

    c.bench_function("find_by_logical_pos_unsorted_100", |b| {
        b.iter(|| {
            for pos in (1..=N as usize).step_by(100) {
                black_box(unsorted.find_node_by_logical_pos(pos));
            }
        });
    });
    c.bench_function("find_by_logical_pos_sorted_100", |b| {
        b.iter(|| {
            for pos in (1..=N as usize).step_by(100) {
                black_box(sorted.find_node_by_logical_pos(pos));
            }
        });
    });
}

/// Benchmark: sort a list whose physical order alternates ends.
fn bench_sort(c: &mut Criterion) {
    let list = filled();
    c.bench_function("sort_10k", |b| {
        b.iter(|| {
            let mut copy = list.clone();
            copy.sort();
            black_box(copy.is_sorted())
        });
    });
}

criterion_group!(
    benches,
    bench_insert_with_growth,
    bench_churn,
    bench_logical_lookup,
    bench_sort
);
criterion_main!(benches);
