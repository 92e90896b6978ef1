// ABOUTME: Criterion benchmarks for identity matching and the reading pipeline
// ABOUTME: Measures scoring cost as household size grows and full per-reading processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the body metrics engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use body_metrics::intelligence::{compute, Matcher};
use body_metrics::models::{PersonAttributes, RawSample, Sex};
use body_metrics::pipeline::ReadingPipeline;
use body_metrics::store::ProfileStore;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Household sizes to score against
const HOUSEHOLD_SIZES: [usize; 3] = [2, 8, 32];

fn household(size: usize) -> ProfileStore {
    let mut store = ProfileStore::new();
    for index in 0..size {
        let sex = if index % 2 == 0 { Sex::Female } else { Sex::Male };
        let weight = (index as f64).mul_add(3.5, 50.0);
        let attributes =
            PersonAttributes::new(format!("Member {index}"), weight, 170.0, 30, sex).unwrap();
        store.enroll(attributes).unwrap();
    }
    store
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity_matching");
    let matcher = Matcher::default();
    let sample = RawSample::new(61.2, Some(505.0));

    for size in HOUSEHOLD_SIZES {
        let store = household(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| matcher.match_sample(black_box(&sample), store.iter()));
        });
    }

    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let attributes = PersonAttributes::new("Bench", 72.0, 178.0, 34, Sex::Male).unwrap();

    c.bench_function("composition_with_impedance", |b| {
        b.iter(|| compute(black_box(72.4), black_box(Some(498.0)), &attributes));
    });
    c.bench_function("composition_weight_only", |b| {
        b.iter(|| compute(black_box(72.4), None, &attributes));
    });
}

fn bench_process_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_reading");
    let pipeline = ReadingPipeline::default();

    for size in HOUSEHOLD_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut store = household(size);
            b.iter(|| {
                pipeline
                    .process_reading(&mut store, black_box(RawSample::new(57.1, Some(510.0))))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_matching,
    bench_composition,
    bench_process_reading
);
criterion_main!(benches);
