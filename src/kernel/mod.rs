//! The render kernel: bypass, event application and per-sample saturation.
//!
//! [`DistortionKernel`] is generic over one [`Saturator`] strategy. The host
//! glue calls [`initialize`](DistortionKernel::initialize) once per session,
//! then drives [`process`](DistortionKernel::process) (events pre-applied) or
//! [`render`](DistortionKernel::render) (events applied at their frame
//! offset) from its render thread. UI threads use a [`ParameterHandle`].
//!
//! Nothing reachable from the render entry points allocates, locks or logs.

/// Tempo query hook.
pub mod context;
/// Render events and dispatch.
pub mod event;
/// Gain stage into a per-channel tube unit.
pub mod gain_tube;
/// Progressive soft-to-hard clipper.
pub mod progressive;
/// Lock-free timed event queue.
pub mod queue;
/// Strategy trait.
pub mod saturator;

use std::sync::Arc;

pub use context::{MusicalContext, MusicalContextBlock};
pub use event::RenderEvent;
pub use gain_tube::GainTube;
pub use progressive::ProgressiveClip;
pub use queue::{EventSource, MAX_QUEUED_EVENTS};
pub use saturator::Saturator;

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::params::{
    ParamAddress, ParamSpec, ParameterHandle, ParameterStore, BYPASS_ADDRESS, BYPASS_SPEC,
};

/// Kernel running the progressive clipper.
pub type ProgressiveKernel = DistortionKernel<ProgressiveClip>;
/// Kernel running gain into tube saturation.
pub type TubeKernel = DistortionKernel<GainTube>;

pub struct DistortionKernel<S: Saturator> {
    saturator: S,
    params: Arc<ParameterStore>,
    sample_rate: f64,
    channel_count: usize,
    max_frames: u32,
    musical_context: Option<MusicalContextBlock>,
    queued: Vec<RenderEvent>,
}

impl<S: Saturator> DistortionKernel<S> {
    /// Kernel prepared with [`KernelConfig::default`].
    pub fn new(saturator: S) -> Self {
        let config = KernelConfig::default();
        let mut kernel = Self {
            saturator,
            params: Arc::new(ParameterStore::new(S::PARAMS)),
            sample_rate: config.sample_rate,
            channel_count: config.channels,
            max_frames: config.max_frames,
            musical_context: None,
            queued: Vec::new(),
        };
        kernel.configure(config.channels, config.sample_rate);
        kernel
    }

    pub fn with_config(saturator: S, config: KernelConfig) -> Result<Self> {
        config.validate()?;

        let mut kernel = Self::new(saturator);
        kernel.set_maximum_frames_to_render(config.max_frames);
        kernel.initialize(config.channels, config.channels, config.sample_rate)?;
        kernel.set_bypass(config.bypassed);
        Ok(kernel)
    }

    /// Start a session. Non-realtime: sizes per-channel state.
    pub fn initialize(
        &mut self,
        input_channels: usize,
        output_channels: usize,
        sample_rate: f64,
    ) -> Result<()> {
        if input_channels != output_channels {
            tracing::warn!(
                "rejecting channel layout {} in / {} out",
                input_channels,
                output_channels
            );
            return Err(Error::ChannelMismatch {
                input: input_channels,
                output: output_channels,
            });
        }
        if input_channels == 0 {
            tracing::warn!("rejecting zero-channel layout");
            return Err(Error::InvalidChannelCount(input_channels));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            tracing::warn!("rejecting sample rate {}", sample_rate);
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        self.configure(input_channels, sample_rate);
        tracing::info!(
            "kernel initialized: {} channels at {} Hz, up to {} frames",
            input_channels,
            sample_rate,
            self.max_frames
        );
        Ok(())
    }

    fn configure(&mut self, channel_count: usize, sample_rate: f64) {
        self.channel_count = channel_count;
        self.sample_rate = sample_rate;
        self.saturator.prepare(channel_count, sample_rate);
        self.saturator.load_params(&self.params);
        self.queued = Vec::with_capacity(MAX_QUEUED_EVENTS);
    }

    /// End the session. Per-sample history is cleared.
    pub fn deinitialize(&mut self) {
        self.saturator.release();
        tracing::debug!("kernel deinitialized");
    }

    // Bypass

    pub fn is_bypassed(&self) -> bool {
        self.params.is_bypassed()
    }

    pub fn set_bypass(&mut self, bypassed: bool) {
        self.params.set_bypass(bypassed);
    }

    // Parameters

    pub fn set_parameter(&self, address: ParamAddress, value: f32) {
        self.params.set(address, value);
    }

    /// Goal value for `address`; 0.0 for addresses nobody declared.
    pub fn get_parameter(&self, address: ParamAddress) -> f32 {
        self.params.get(address)
    }

    pub fn parameter_handle(&self) -> ParameterHandle {
        ParameterHandle::new(Arc::clone(&self.params))
    }

    pub fn parameter_specs(&self) -> &'static [ParamSpec] {
        S::PARAMS
    }

    pub fn bypass_spec(&self) -> &'static ParamSpec {
        &BYPASS_SPEC
    }

    /// Metadata for `address`, bypass included.
    pub fn parameter_spec(&self, address: ParamAddress) -> Option<&'static ParamSpec> {
        if address == BYPASS_ADDRESS {
            return Some(&BYPASS_SPEC);
        }
        self.params.spec(address)
    }

    /// Put every parameter back to its default. Bypass is untouched.
    pub fn reset_to_defaults(&self) {
        self.params.reset_to_defaults();
    }

    // Session properties

    pub fn maximum_frames_to_render(&self) -> u32 {
        self.max_frames
    }

    pub fn set_maximum_frames_to_render(&mut self, max_frames: u32) {
        self.max_frames = max_frames;
        tracing::debug!("maximum frames to render set to {}", max_frames);
    }

    pub fn set_musical_context_block(&mut self, block: Option<MusicalContextBlock>) {
        self.musical_context = block;
    }

    pub fn has_musical_context(&self) -> bool {
        self.musical_context.is_some()
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn saturator(&self) -> &S {
        &self.saturator
    }

    /// Clear the strategy's per-sample history without ending the session.
    pub fn reset(&mut self) {
        self.saturator.reset();
    }

    // Render

    /// Apply one render event. Non-parameter events are ignored.
    #[inline]
    pub fn handle_one_event(&mut self, _now: i64, event: &RenderEvent) {
        event::apply_event(&self.params, event);
    }

    /// Apply a whole event list at `now`, in the order given.
    ///
    /// For hosts that deliver events outside a render call. Inside one, use
    /// [`render`](Self::render) so each event lands on its frame.
    pub fn dispatch(&mut self, _now: i64, events: &[RenderEvent]) {
        event::dispatch(&self.params, events);
    }

    /// Process a whole buffer with the current parameter values.
    ///
    /// Every input channel must have a matching output channel and both must
    /// hold at least `frame_count` samples. These are caller preconditions,
    /// checked only in debug builds.
    pub fn process(
        &mut self,
        inputs: &[&[f32]],
        outputs: &mut [&mut [f32]],
        _start_time: i64,
        frame_count: usize,
    ) {
        self.check_preconditions(inputs, outputs, frame_count);
        self.process_range(inputs, outputs, 0, frame_count);
    }

    /// Process a buffer, applying each event at its own frame offset.
    ///
    /// `events` must be sorted by sample time. Events timed before
    /// `start_time` apply at frame 0, events past the buffer after the last
    /// frame.
    pub fn render(
        &mut self,
        inputs: &[&[f32]],
        outputs: &mut [&mut [f32]],
        start_time: i64,
        frame_count: usize,
        events: &[RenderEvent],
    ) {
        self.check_preconditions(inputs, outputs, frame_count);

        let mut cursor = 0;
        for event in events {
            let offset = event::event_offset(event.sample_time(), start_time, frame_count);
            if offset > cursor {
                self.process_range(inputs, outputs, cursor, offset);
                cursor = offset;
            }
            self.handle_one_event(start_time + cursor as i64, event);
        }

        if cursor < frame_count {
            self.process_range(inputs, outputs, cursor, frame_count);
        }
    }

    /// Pull this buffer's events from `source`, then [`render`](Self::render).
    ///
    /// At most [`MAX_QUEUED_EVENTS`] are taken per call; the rest stay queued.
    pub fn render_queued<Q: EventSource>(
        &mut self,
        inputs: &[&[f32]],
        outputs: &mut [&mut [f32]],
        start_time: i64,
        frame_count: usize,
        source: &mut Q,
    ) {
        let end_time = start_time.saturating_add(frame_count as i64);
        let mut pending = std::mem::take(&mut self.queued);
        pending.clear();

        while pending.len() < MAX_QUEUED_EVENTS {
            match source.pop_before(end_time) {
                Some(event) => pending.push(event),
                None => break,
            }
        }

        self.render(inputs, outputs, start_time, frame_count, &pending);
        self.queued = pending;
    }

    #[inline]
    fn check_preconditions(&self, inputs: &[&[f32]], outputs: &[&mut [f32]], frame_count: usize) {
        debug_assert_eq!(
            inputs.len(),
            outputs.len(),
            "input and output channel counts differ"
        );
        debug_assert!(
            inputs.len() <= self.channel_count,
            "more channels than the kernel was initialized for"
        );
        debug_assert!(
            frame_count <= self.max_frames as usize,
            "frame count exceeds maximum frames to render"
        );
        debug_assert!(
            inputs.iter().all(|channel| channel.len() >= frame_count)
                && outputs.iter().all(|channel| channel.len() >= frame_count),
            "buffer shorter than frame count"
        );
    }

    #[inline]
    fn process_range(
        &mut self,
        inputs: &[&[f32]],
        outputs: &mut [&mut [f32]],
        start: usize,
        end: usize,
    ) {
        if self.params.is_bypassed() {
            for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
                output[start..end].copy_from_slice(&input[start..end]);
            }
            return;
        }

        self.saturator.load_params(&self.params);
        for (channel, (input, output)) in inputs.iter().zip(outputs.iter_mut()).enumerate() {
            self.saturator
                .process_channel(channel, &input[start..end], &mut output[start..end]);
        }
    }
}

impl Default for DistortionKernel<ProgressiveClip> {
    fn default() -> Self {
        Self::new(ProgressiveClip::new())
    }
}

impl Default for DistortionKernel<GainTube> {
    fn default() -> Self {
        Self::new(GainTube::new())
    }
}
