#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Session settings a kernel is initialized with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    pub sample_rate: f64,
    /// Channel count, identical on input and output.
    pub channels: usize,
    /// Largest frame count a single render call may ask for.
    pub max_frames: u32,
    pub bypassed: bool,
}

impl KernelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::InvalidChannelCount(self.channels));
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.max_frames == 0 {
            return Err(Error::InvalidMaxFrames(self.max_frames));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            channels: 2,
            max_frames: 1024,
            bypassed: false,
        }
    }
}
