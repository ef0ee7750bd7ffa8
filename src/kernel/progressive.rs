use crate::dsp::distortion::progressive_clip;
use crate::kernel::saturator::Saturator;
use crate::params::{ParamAddress, ParamSpec, ParamUnit, ParameterStore};

/// Address of the drive control.
pub const DRIVE: ParamAddress = 0;

pub const PROGRESSIVE_PARAMS: &[ParamSpec] = &[ParamSpec {
    address: DRIVE,
    identifier: "drive",
    name: "Drive",
    unit: ParamUnit::Percent,
    min: 0.0,
    max: 1.0,
    default: 0.5,
}];

/// Stateless soft-to-hard clipper driven by a single `drive` control.
#[derive(Debug, Clone, Copy)]
pub struct ProgressiveClip {
    drive: f32,
}

impl ProgressiveClip {
    pub fn new() -> Self {
        Self {
            drive: PROGRESSIVE_PARAMS[0].default,
        }
    }

    pub fn drive(&self) -> f32 {
        self.drive
    }
}

impl Default for ProgressiveClip {
    fn default() -> Self {
        Self::new()
    }
}

impl Saturator for ProgressiveClip {
    const PARAMS: &'static [ParamSpec] = PROGRESSIVE_PARAMS;

    fn prepare(&mut self, _channel_count: usize, _sample_rate: f64) {
        // No per-channel state
    }

    #[inline]
    fn load_params(&mut self, params: &ParameterStore) {
        self.drive = params.load(DRIVE);
    }

    #[inline]
    fn process_sample(&mut self, _channel: usize, sample: f32) -> f32 {
        progressive_clip(sample, self.drive)
    }
}
