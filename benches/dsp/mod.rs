//! Benchmarks for low-level DSP primitives.

mod distortion;
mod tube;

pub use distortion::bench_distortion;
pub use tube::bench_tube;
