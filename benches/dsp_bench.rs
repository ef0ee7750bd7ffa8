//! Benchmarks for the saturation primitives and the render kernel.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the cost of one render call to make sure it
//! stays well inside real-time audio deadlines.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Per-sample shapers (progressive clip, tube unit)
//!   - scenarios/*  Full kernel calls: stereo process, bypass, split render

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

/// Sine-like test signal shared by every group.
pub fn test_signal(size: usize) -> Vec<f32> {
    (0..size).map(|i| (i as f32 * 0.1).sin()).collect()
}

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_distortion,
    dsp::bench_tube,
    // Whole render calls
    scenarios::bench_kernel,
);
criterion_main!(benches);
