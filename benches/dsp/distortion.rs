//! Benchmarks for progressive clipping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use distortion_dsp::dsp::distortion;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        // Soft half - tanh with extra inner gain
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("soft_region", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::progressive_clip_buffer(black_box(&mut buffer), black_box(0.25));
            })
        });

        // Hard half - mostly clamped at this drive
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("hard_region", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::progressive_clip_buffer(black_box(&mut buffer), black_box(0.9));
            })
        });
    }

    group.finish();
}
