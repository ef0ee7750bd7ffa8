//! Benchmarks for the tube saturation unit.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use distortion_dsp::dsp::TubeSaturation;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_tube(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tube");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(4.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("driven", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                tube.process_buffer(black_box(&mut buffer));
            })
        });

        // Zero drive takes the pass-through branch
        let mut idle = TubeSaturation::new(48_000.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("identity", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                idle.process_buffer(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
