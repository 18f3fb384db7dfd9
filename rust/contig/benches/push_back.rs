use contig::{SimpleVector, reserve};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for &n in &[16usize, 1024, 65536] {
        group.bench_with_input(BenchmarkId::new("grow_from_empty", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::<u64>::new();
                for i in 0..n as u64 {
                    v.push_back(black_box(i));
                }
                black_box(v.size())
            });
        });

        group.bench_with_input(BenchmarkId::new("reserved", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::<u64>::from(reserve(n));
                for i in 0..n as u64 {
                    v.push_back(black_box(i));
                }
                black_box(v.size())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vec::<u64>::new();
                for i in 0..n as u64 {
                    v.push(black_box(i));
                }
                black_box(v.len())
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for &n in &[16usize, 1024] {
        group.bench_with_input(BenchmarkId::new("simple_vector", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::<u32>::new();
                for i in 0..n as u32 {
                    let _ = v.insert(0, black_box(i));
                }
                black_box(v.size())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_front);
criterion_main!(benches);
