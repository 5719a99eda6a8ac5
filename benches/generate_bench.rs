//! Benchmarks for column generation.
//!
//! Tests:
//! - Row throughput per column kind
//! - End-to-end generation into a TSV buffer

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use populate::{ColumnKind, Escape, Locale, Populator, Seed, TsvWriter};
use std::hint::black_box;

/// Benchmark raw generation for each implemented kind
fn bench_generate_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_kinds");

    let rows = 1_000u64;
    group.throughput(Throughput::Elements(rows));

    for kind in ColumnKind::ALL.into_iter().filter(ColumnKind::is_implemented) {
        group.bench_with_input(BenchmarkId::new("kind", kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut populator = Populator::new(Locale::EnUs, Some(&Seed::from(42)));
                let count = populator
                    .generate(kind, rows)
                    .map(|r| black_box(r.unwrap()))
                    .count();
                black_box(count)
            })
        });
    }

    group.finish();
}

/// Benchmark generation plus TSV serialization with varying row counts
fn bench_generate_to_tsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_to_tsv");

    for rows in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(rows));
        group.bench_with_input(
            BenchmarkId::new("email", format!("{}_rows", rows)),
            &rows,
            |b, &rows| {
                b.iter(|| {
                    let mut populator = Populator::new(Locale::EnUs, Some(&Seed::from(42)));
                    let mut writer = TsvWriter::new(Vec::with_capacity(64 * 1024), Escape::Quote);
                    for row in populator.generate(ColumnKind::Email, rows) {
                        writer.write_row(&row.unwrap()).unwrap();
                    }
                    black_box(writer.into_inner().unwrap().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_kinds, bench_generate_to_tsv);
criterion_main!(benches);
