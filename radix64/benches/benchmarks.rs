//! Benchmarks comparing our base64 implementation with the external base64 crate.

use base64_external::{engine::general_purpose::STANDARD as EXT_STANDARD, Engine};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use radix64::{decode_result, encode, encode_to_slice, encoded_len, make_alphabet, STANDARD};
use std::hint::black_box;

/// Sample data sizes for benchmarking
const SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 16384];

fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &size in SIZES {
        let data = generate_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("our_impl", size), &data, |b, data| {
            b.iter(|| encode(black_box(data), &STANDARD, true))
        });

        let mut output = vec![0u8; encoded_len(size, true)];
        group.bench_with_input(BenchmarkId::new("our_impl_slice", size), &data, |b, data| {
            b.iter(|| encode_to_slice(&mut output, black_box(data), &STANDARD, true))
        });

        group.bench_with_input(BenchmarkId::new("base64_crate", size), &data, |b, data| {
            b.iter(|| EXT_STANDARD.encode(black_box(data)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in SIZES {
        let data = generate_data(size);
        let encoded_ours = encode(&data, &STANDARD, true);
        let encoded_external = EXT_STANDARD.encode(&data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("our_impl", size),
            &encoded_ours,
            |b, encoded| b.iter(|| decode_result(black_box(encoded), &STANDARD)),
        );

        group.bench_with_input(
            BenchmarkId::new("base64_crate", size),
            &encoded_external,
            |b, encoded| b.iter(|| EXT_STANDARD.decode(black_box(encoded))),
        );
    }

    group.finish();
}

fn bench_make_alphabet(c: &mut Criterion) {
    let spec = STANDARD.to_string();
    c.bench_function("make_alphabet", |b| b.iter(|| make_alphabet(black_box(&spec))));
}

criterion_group!(benches, bench_encode, bench_decode, bench_make_alphabet);
criterion_main!(benches);
