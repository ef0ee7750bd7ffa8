//! Render kernel benchmarks.
//!
//! These model what a host render thread actually calls: a stereo buffer
//! per call, with and without parameter events inside it.

mod kernel;

pub use kernel::bench_kernel;
