/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use favicon_core::options::EncoderOptions;
use favicon_png::PngEncoder;

fn encode_favicon(data: &[u8], size: usize, effort: u8) -> Vec<u8> {
    let options = EncoderOptions::new(size, size).set_effort(effort);
    let mut sink = Vec::new();
    PngEncoder::new(data, options).encode(&mut sink).unwrap();
    sink
}

/// A disc over a transparent background, the typical favicon shape
fn make_disc(size: usize) -> Vec<u8> {
    let radius = (size as f64 / 2.0) * 0.9;
    let mut data = Vec::with_capacity(size * size * 4);

    for y in 0..size {
        for x in 0..size {
            let cx = size as f64 / 2.0 - x as f64;
            let cy = size as f64 / 2.0 - y as f64;

            if (cx * cx + cy * cy).sqrt() <= radius {
                data.extend_from_slice(&[40, 120, 200, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    data
}

fn encode_test(c: &mut Criterion) {
    let size = 512;
    let data = make_disc(size);

    let mut group = c.benchmark_group("[png]: PNG encoding 512x512 disc");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("PNG encoding, best compression", |b| {
        b.iter(|| black_box(encode_favicon(data.as_slice(), size, 9)))
    });

    group.bench_function("PNG encoding, fast compression", |b| {
        b.iter(|| black_box(encode_favicon(data.as_slice(), size, 1)))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(5))
      };
    targets=encode_test);

criterion_main!(benches);
