use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zreuse_core::prelude::*;

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| b"the quick brown fox jumps over the lazy dog "[(i * 7 + i / 64) % 44]).collect()
}

fn bench_reuse(c: &mut Criterion) {
    let codec = Codec::new();
    let mut group = c.benchmark_group("reuse");

    for size in [4 * 1024, 256 * 1024, 4 * 1024 * 1024] {
        let data = payload(size);
        let mut compressed = Vec::new();
        codec.compress(&mut compressed, &data).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            let mut dst = Vec::new();
            b.iter(|| {
                dst.clear();
                codec.compress(&mut dst, black_box(data)).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("decompress", size), &compressed, |b, src| {
            let mut dst = Vec::new();
            b.iter(|| {
                dst.clear();
                codec.decompress(&mut dst, black_box(src)).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_fresh_destination(c: &mut Criterion) {
    let codec = Codec::new();
    let data = payload(256 * 1024);
    let mut compressed = Vec::new();
    codec.compress(&mut compressed, &data).unwrap();

    let mut group = c.benchmark_group("fresh");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("compress", |b| {
        b.iter(|| {
            let mut dst = Vec::new();
            codec.compress(&mut dst, black_box(&data)).unwrap();
            dst
        })
    });
    group.bench_function("decompress", |b| {
        b.iter(|| {
            let mut dst = Vec::new();
            codec.decompress(&mut dst, black_box(&compressed)).unwrap();
            dst
        })
    });
    group.bench_function("decompress_streaming", |b| {
        b.iter(|| {
            let mut dst = Vec::new();
            codec.decoder().decompress_streaming(&mut dst, black_box(&compressed), None).unwrap();
            dst
        })
    });
    group.finish();
}

fn bench_dictionary(c: &mut Criterion) {
    let codec = Codec::new();
    let raw = b"{\"kind\":\"event\",\"source\":\"sensor\",\"value\":".repeat(8);
    let cdict = CompressionDict::new(&raw, 3).unwrap();
    let ddict = DecompressionDict::new(&raw).unwrap();
    let record = b"{\"kind\":\"event\",\"source\":\"sensor\",\"value\":42}".to_vec();
    let mut compressed = Vec::new();
    codec.compress_dict(&mut compressed, &record, &cdict).unwrap();

    let mut group = c.benchmark_group("dictionary");
    group.bench_function("compress_dict", |b| {
        let mut dst = Vec::with_capacity(256);
        b.iter(|| {
            dst.clear();
            codec.compress_dict(&mut dst, black_box(&record), &cdict).unwrap();
        })
    });
    group.bench_function("decompress_dict", |b| {
        let mut dst = Vec::with_capacity(256);
        b.iter(|| {
            dst.clear();
            codec.decompress_dict(&mut dst, black_box(&compressed), &ddict).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_reuse, bench_fresh_destination, bench_dictionary);
criterion_main!(benches);
