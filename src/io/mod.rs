// Purpose - owned multichannel buffers and offline rendering, for callers
// that are not a host render thread (tools, tests, benches)

use std::f32::consts::TAU;

use crate::kernel::{DistortionKernel, Saturator};

/// Owned, non-interleaved audio: one `Vec` per channel, all the same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChannelBuffers {
    pub buffers: Vec<Vec<f32>>,
}

impl ChannelBuffers {
    /// Silence.
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; frames]; channels],
        }
    }

    /// The same signal copied onto every channel.
    pub fn from_mono(signal: &[f32], channels: usize) -> Self {
        Self {
            buffers: vec![signal.to_vec(); channels],
        }
    }

    pub fn channels(&self) -> usize {
        self.buffers.len()
    }

    pub fn frames(&self) -> usize {
        self.buffers.first().map_or(0, Vec::len)
    }

    pub fn channel(&self, index: usize) -> &[f32] {
        &self.buffers[index]
    }

    /// Interleave into `[L0, R0, L1, R1, ...]`.
    pub fn interleaved(&self) -> Vec<f32> {
        let channels = self.channels();
        let mut out = vec![0.0; channels * self.frames()];
        for (ch, buffer) in self.buffers.iter().enumerate() {
            for (i, &sample) in buffer.iter().enumerate() {
                out[i * channels + ch] = sample;
            }
        }
        out
    }
}

/// Sine test tone.
pub fn sine(frequency: f32, sample_rate: f32, frames: usize, amplitude: f32) -> Vec<f32> {
    let step = TAU * frequency / sample_rate;
    (0..frames)
        .map(|i| (i as f32 * step).sin() * amplitude)
        .collect()
}

/// Run `input` through `kernel` in blocks of its maximum frame count.
///
/// Allocates; meant for offline use. The kernel must have been initialized
/// for at least `input.channels()` channels.
pub fn process_offline<S: Saturator>(
    kernel: &mut DistortionKernel<S>,
    input: &ChannelBuffers,
) -> ChannelBuffers {
    let frames = input.frames();
    let block = (kernel.maximum_frames_to_render() as usize).max(1);
    let mut output = ChannelBuffers::new(input.channels(), frames);

    let mut start = 0;
    while start < frames {
        let len = block.min(frames - start);
        let end = start + len;

        let inputs: Vec<&[f32]> = input.buffers.iter().map(|b| &b[start..end]).collect();
        let mut outputs: Vec<&mut [f32]> = output
            .buffers
            .iter_mut()
            .map(|b| &mut b[start..end])
            .collect();

        kernel.process(&inputs, &mut outputs, start as i64, len);
        start = end;
    }

    output
}
