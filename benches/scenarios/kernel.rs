//! Benchmarks for full render calls.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use distortion_dsp::kernel::{gain_tube, progressive};
use distortion_dsp::{GainTube, KernelConfig, ProgressiveClip, ProgressiveKernel, RenderEvent, TubeKernel};

use crate::{test_signal, BLOCK_SIZES};

fn config() -> KernelConfig {
    KernelConfig {
        sample_rate: 48_000.0,
        channels: 2,
        max_frames: 512,
        bypassed: false,
    }
}

pub fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/kernel");

    for &size in BLOCK_SIZES {
        let left = test_signal(size);
        let right: Vec<f32> = left.iter().map(|s| -s).collect();
        let mut out_l = vec![0.0f32; size];
        let mut out_r = vec![0.0f32; size];

        // === Progressive clip, stereo ===
        let mut clip = ProgressiveKernel::with_config(ProgressiveClip::new(), config()).unwrap();
        clip.set_parameter(progressive::DRIVE, 0.7);
        group.bench_with_input(BenchmarkId::new("clip_stereo", size), &size, |b, _| {
            b.iter(|| {
                clip.process(
                    black_box(&[&left[..], &right[..]]),
                    &mut [&mut out_l[..], &mut out_r[..]],
                    0,
                    size,
                );
            })
        });

        // === Gain + tube, stereo ===
        let mut tube = TubeKernel::with_config(GainTube::new(), config()).unwrap();
        tube.set_parameter(gain_tube::GAIN, 1.5);
        tube.set_parameter(gain_tube::TUBE_DRIVE, 5.0);
        group.bench_with_input(BenchmarkId::new("tube_stereo", size), &size, |b, _| {
            b.iter(|| {
                tube.process(
                    black_box(&[&left[..], &right[..]]),
                    &mut [&mut out_l[..], &mut out_r[..]],
                    0,
                    size,
                );
            })
        });

        // === Bypass: plain copy ===
        let mut bypassed = ProgressiveKernel::with_config(ProgressiveClip::new(), config()).unwrap();
        bypassed.set_bypass(true);
        group.bench_with_input(BenchmarkId::new("bypass_stereo", size), &size, |b, _| {
            b.iter(|| {
                bypassed.process(
                    black_box(&[&left[..], &right[..]]),
                    &mut [&mut out_l[..], &mut out_r[..]],
                    0,
                    size,
                );
            })
        });

        // === Split render: four drive changes inside the buffer ===
        let step = (size / 4) as i64;
        let events: Vec<RenderEvent> = (0..4)
            .map(|i| RenderEvent::parameter(i * step, progressive::DRIVE, 0.2 + 0.2 * i as f32))
            .collect();
        let mut split = ProgressiveKernel::with_config(ProgressiveClip::new(), config()).unwrap();
        group.bench_with_input(BenchmarkId::new("clip_split_render", size), &size, |b, _| {
            b.iter(|| {
                split.render(
                    black_box(&[&left[..], &right[..]]),
                    &mut [&mut out_l[..], &mut out_r[..]],
                    0,
                    size,
                    black_box(&events),
                );
            })
        });
    }

    group.finish();
}
