//! Low-level DSP primitives used by the saturation strategies.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on the signal math; parameter plumbing and buffer orchestration live in
//! [`crate::kernel`].

/// Progressive soft-to-hard clipping.
pub mod distortion;
/// One-pole smoothing filter.
pub mod filter;
/// Asymmetric tube saturation unit.
pub mod tube;

pub use tube::TubeSaturation;
