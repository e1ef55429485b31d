use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use radix_codec::{BaseCodec, BaseType, CodecRegistry};
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 256, 1024, 4096];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i.wrapping_mul(31) % 251 + 1) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    for base_type in BaseType::ALL {
        let codec = base_type.codec();
        let mut group = c.benchmark_group(format!("encode_{}", base_type));

        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data = sample(size);

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| codec.encode(black_box(data)));
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for base_type in BaseType::ALL {
        let codec = base_type.codec();
        let mut group = c.benchmark_group(format!("decode_{}", base_type));

        for size in SIZES {
            let encoded = codec.encode(&sample(size));

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| codec.decode(black_box(encoded)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_leading_zeros(c: &mut Criterion) {
    let codec = BaseType::Base91.codec();
    let mut group = c.benchmark_group("encode_base91_leading_zeros");

    for zeros in [0usize, 64, 512] {
        let mut data = vec![0u8; zeros];
        data.extend(sample(512));
        group.bench_with_input(BenchmarkId::from_parameter(zeros), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_registry_codec(c: &mut Criterion) {
    let registry = CodecRegistry::load_default().unwrap();
    let codec = registry.resolve("base58").unwrap();
    let data = sample(256);

    c.bench_function("encode_base58_256", |b| {
        b.iter(|| codec.encode(black_box(&data)));
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_leading_zeros,
    bench_registry_codec
);
criterion_main!(benches);
