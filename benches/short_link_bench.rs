// ABOUTME: Criterion benchmarks for the short link codec
// ABOUTME: Measures encode, decode, and rejection of malformed tokens across id magnitudes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Criterion benchmarks for short link encoding and decoding.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use foodgram_api::short_link::ShortLinkCodec;

const IDS: [u64; 4] = [7, 48_213, 9_876_543_210, u64::MAX];

fn bench_encode(c: &mut Criterion) {
    let codec = ShortLinkCodec::default();
    let mut group = c.benchmark_group("short_link_encode");

    for id in IDS {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| codec.encode(black_box(id)));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let codec = ShortLinkCodec::default();
    let mut group = c.benchmark_group("short_link_decode");

    for id in IDS {
        let token = codec.encode(id);
        group.bench_with_input(BenchmarkId::from_parameter(&token), &token, |b, token| {
            b.iter(|| codec.decode(black_box(token)).unwrap());
        });
    }

    group.bench_function("rejected", |b| {
        b.iter(|| codec.decode(black_box("mn6j!")).is_err());
    });

    group.finish();
}

fn bench_bulk_round_trip(c: &mut Criterion) {
    let codec = ShortLinkCodec::default();
    let mut group = c.benchmark_group("short_link_round_trip");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("10k_sequential_ids", |b| {
        b.iter(|| {
            for id in 1..=10_000_u64 {
                let token = codec.encode(id);
                black_box(codec.decode(&token).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_bulk_round_trip);
criterion_main!(benches);
