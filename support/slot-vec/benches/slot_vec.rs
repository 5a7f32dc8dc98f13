//! Benchmarks for SlotVec vs SmallVec vs Vec
//!
//! Run with: `cargo bench --bench slot_vec`

use arraylist_slot_vec::SlotVec;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smallvec::SmallVec;

/// Doubling growth, the way the list grows its slots.
fn push_doubling(slots: &mut SlotVec<u64>, value: u64) {
    if slots.spare() == 0 {
        let cap = slots.capacity();
        slots.reallocate(if cap == 0 { 4 } else { cap * 2 });
    }
    slots.push(value);
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [4, 16, 64, 1024] {
        group.bench_with_input(BenchmarkId::new("SlotVec", size), &size, |b, &size| {
            b.iter(|| {
                let mut slots = SlotVec::new();
                for i in 0..size {
                    push_doubling(&mut slots, black_box(i));
                }
                black_box(slots);
            });
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<16>", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = SmallVec::<[u64; 16]>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u64>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [16, 256] {
        group.bench_with_input(BenchmarkId::new("SlotVec", size), &size, |b, &size| {
            b.iter(|| {
                let mut slots = SlotVec::with_capacity(size as usize);
                for i in 0..size {
                    slots.insert(0, black_box(i));
                }
                black_box(slots);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u64>::with_capacity(size as usize);
                for i in 0..size {
                    vec.insert(0, black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_remove_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_range");

    group.bench_function("SlotVec_1024_middle_half", |b| {
        let slots: SlotVec<u64> = (0..1024).collect();
        b.iter_batched(
            || slots.clone(),
            |mut slots| {
                slots.remove_range(256, 512);
                black_box(slots);
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("Vec_1024_middle_half", |b| {
        let vec: Vec<u64> = (0..1024).collect();
        b.iter_batched(
            || vec.clone(),
            |mut vec| {
                vec.drain(256..768);
                black_box(vec);
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_insert_front, bench_remove_range);
criterion_main!(benches);
