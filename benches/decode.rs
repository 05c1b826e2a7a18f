use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sl2_rs::record::{DEPTH_OFFSET, LATITUDE_OFFSET, LONGITUDE_OFFSET};
use sl2_rs::{decode, BlockScanner};

const BLOCK_LEN: usize = 144;

/// Generate a realistic track: a slow drift in position with a varying
/// bottom, every block carrying a distinct GPS fix.
fn synthetic_stream(blocks: usize) -> Vec<u8> {
    let mut data = vec![0u8; 10];
    for i in 0..=blocks {
        let start = data.len();
        data.resize(start + BLOCK_LEN, 0);
        data[start..start + 2].copy_from_slice(&(BLOCK_LEN as u16).to_le_bytes());

        let depth = 5.0 + (i as f32 * 0.05).sin() * 3.0;
        let lon = 1_200_000u32 + i as u32 * 3;
        let lat = 7_600_000u32 + i as u32 * 2;
        data[start + DEPTH_OFFSET..start + DEPTH_OFFSET + 4]
            .copy_from_slice(&depth.to_le_bytes());
        data[start + LONGITUDE_OFFSET..start + LONGITUDE_OFFSET + 4]
            .copy_from_slice(&lon.to_le_bytes());
        data[start + LATITUDE_OFFSET..start + LATITUDE_OFFSET + 4]
            .copy_from_slice(&lat.to_le_bytes());
    }
    data
}

fn bench_decode(c: &mut Criterion) {
    let stream_1k = synthetic_stream(1_000);
    let stream_10k = synthetic_stream(10_000);

    let mut group = c.benchmark_group("decode");

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("track/1k_blocks", |b| {
        b.iter(|| decode(black_box(&stream_1k)).unwrap())
    });

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("track/10k_blocks", |b| {
        b.iter(|| decode(black_box(&stream_10k)).unwrap())
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let stream_10k = synthetic_stream(10_000);

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("offsets/10k_blocks", |b| {
        b.iter(|| {
            BlockScanner::new(black_box(&stream_10k))
                .unwrap()
                .map(|r| r.unwrap())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_scan);
criterion_main!(benches);
