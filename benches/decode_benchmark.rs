// benches/decode_benchmark.rs
use byteorder::{LittleEndian, WriteBytesExt};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sxf_rs::*;

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.write_u32::<LittleEndian>(v).unwrap();
}

fn put_f32(buf: &mut Vec<u8>, v: f32) {
    buf.write_f32::<LittleEndian>(v).unwrap();
}

fn put_zeros(buf: &mut Vec<u8>, n: usize) {
    buf.resize(buf.len() + n, 0);
}

/// WDS results file with `items` scans of `samples` points each.
fn wds_results(items: u32, samples: usize) -> Vec<u8> {
    let mut buf = Vec::new();

    // header, version 2
    buf.push(6);
    buf.extend_from_slice(b"fxs");
    put_u32(&mut buf, 2);
    put_u32(&mut buf, 0);
    put_zeros(&mut buf, 24);

    // main body, version 11, one dataset
    for v in [11, 1, 0, 1, 3, 60, 1] {
        put_u32(&mut buf, v);
    }

    // dataset header, version 13
    put_u32(&mut buf, 13);
    put_u32(&mut buf, 0);
    put_zeros(&mut buf, 24);
    put_u32(&mut buf, 1);
    put_u32(&mut buf, 1);
    put_zeros(&mut buf, 12 + 4 + 4 + 4 + 49 * 4 + 8 + 4 + 8);
    put_u32(&mut buf, items);
    put_zeros(&mut buf, 16);

    for item in 0..items {
        put_u32(&mut buf, 3);
        put_u32(&mut buf, 1);
        // X-ray signal header
        put_u32(&mut buf, 26);
        put_u32(&mut buf, 2);
        put_u32(&mut buf, 1);
        put_u32(&mut buf, item % 5 + 1);
        buf.extend_from_slice(b"FILL");
        put_zeros(&mut buf, 5 * 4 + 5 * 4);
        put_u32(&mut buf, 0);
        put_zeros(&mut buf, 4);
        // WDS scan payload
        for v in [4, 30_000, samples as u32] {
            put_u32(&mut buf, v);
        }
        put_f32(&mut buf, 10.0);
        put_f32(&mut buf, 0.1);
        put_u32(&mut buf, 5);
        put_u32(&mut buf, (samples * 4) as u32);
        for i in 0..samples {
            put_f32(&mut buf, (i % 97) as f32);
        }
        put_zeros(&mut buf, 4);
        put_u32(&mut buf, 0);
        put_zeros(&mut buf, 16);
        put_u32(&mut buf, 0);
    }

    // comment, reserved, no extra endings, no overview, video block
    put_u32(&mut buf, 0);
    put_zeros(&mut buf, 32);
    put_u32(&mut buf, 0);
    put_u32(&mut buf, 0);
    put_u32(&mut buf, 0);
    put_zeros(&mut buf, 96);

    // WDS/calibration extras
    put_u32(&mut buf, 2);
    put_zeros(&mut buf, 12);
    put_u32(&mut buf, 1);
    put_zeros(&mut buf, 8 + 16);

    // global options
    put_zeros(&mut buf, 12);
    buf
}

fn benchmark_decode_wds_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_wds_results");

    for samples in [100usize, 1_000, 10_000].iter() {
        let data = bytes::Bytes::from(wds_results(5, *samples));
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &data, |b, data| {
            b.iter(|| {
                let file = decode_bytes(data.clone()).unwrap();
                assert_eq!(file.datasets()[0].items.len(), 5);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode_wds_results);
criterion_main!(benches);
