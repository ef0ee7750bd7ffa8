//! Error types for kernel setup.
//!
//! Only the non-realtime surface (initialization and configuration) can fail.
//! The render path reports nothing: its preconditions are debug assertions.

use thiserror::Error;

/// Error type for distortion_dsp setup operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Channel mismatch: {input} input channels, {output} output channels")]
    ChannelMismatch { input: usize, output: usize },

    #[error("Invalid channel count: {0}. At least one channel is required")]
    InvalidChannelCount(usize),

    #[error("Invalid sample rate: {0}. Must be finite and positive")]
    InvalidSampleRate(f64),

    #[error("Invalid maximum frame count: {0}. Must be at least 1")]
    InvalidMaxFrames(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
