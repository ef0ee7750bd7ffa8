use crate::params::{ParamSpec, ParameterStore};

/// A saturation strategy the render kernel can drive.
///
/// The kernel owns exactly one strategy, chosen when the kernel type is
/// composed (`DistortionKernel<ProgressiveClip>`, `DistortionKernel<GainTube>`).
/// Everything except [`prepare`](Self::prepare) and
/// [`release`](Self::release) runs on the render thread and must not
/// allocate, block or log.
pub trait Saturator: Send {
    /// Parameters this strategy reads from the store.
    const PARAMS: &'static [ParamSpec];

    /// Size per-channel state for a new session. Non-realtime; may allocate.
    fn prepare(&mut self, channel_count: usize, sample_rate: f64);

    /// Drop session state. Default implementation does nothing.
    fn release(&mut self) {}

    /// Pull the current goal values out of the store.
    ///
    /// Called at the start of every processed range.
    fn load_params(&mut self, params: &ParameterStore);

    /// Shape one sample on `channel`.
    fn process_sample(&mut self, channel: usize, sample: f32) -> f32;

    /// Shape a run of samples on `channel`.
    ///
    /// `input` and `output` have the same length.
    fn process_channel(&mut self, channel: usize, input: &[f32], output: &mut [f32]) {
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = self.process_sample(channel, sample);
        }
    }

    /// Clear any per-sample history. Default implementation does nothing.
    fn reset(&mut self) {}
}
