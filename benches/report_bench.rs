// ABOUTME: Criterion benchmarks for workout package dispatch and report rendering
// ABOUTME: Measures single-package formatting and mixed batch processing throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the report pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_report::dispatcher::{
    default_packages, format_report, process_batch, read_package, WorkoutPackage,
};
use workout_report::output::OutputFormat;

/// Build a batch cycling through valid and rejected packages
fn mixed_batch(count: usize) -> Vec<WorkoutPackage> {
    let samples = default_packages();
    (0..count)
        .map(|index| match index % 5 {
            3 => WorkoutPackage::new("XYZ", vec![1.0]),
            4 => WorkoutPackage::new("RUN", vec![15000.0, 1.0]),
            n => samples[n].clone(),
        })
        .collect()
}

fn bench_format_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_report");
    for package in default_packages() {
        group.bench_function(package.workout_type.as_str(), |b| {
            b.iter(|| {
                read_package(black_box(&package.workout_type), black_box(&package.data))
                    .map(|workout| format_report(&workout))
            });
        });
    }
    group.finish();
}

fn bench_process_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_batch");
    for size in [10_usize, 100, 1000] {
        let batch = mixed_batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &batch, |b, batch| {
            b.iter(|| {
                process_batch(black_box(batch))
                    .iter()
                    .filter_map(|outcome| outcome.render(OutputFormat::Text).ok())
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_format_report, bench_process_batch);
criterion_main!(benches);
