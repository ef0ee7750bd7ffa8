use crate::dsp::tube::{TubeSaturation, MAX_TUBE_DRIVE};
use crate::kernel::saturator::Saturator;
use crate::params::{ParamAddress, ParamSpec, ParamUnit, ParameterStore};

/// Address of the linear input gain.
pub const GAIN: ParamAddress = 0;
/// Address of the tube stage drive.
pub const TUBE_DRIVE: ParamAddress = 1;

pub const GAIN_TUBE_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        address: GAIN,
        identifier: "gain",
        name: "Gain",
        unit: ParamUnit::LinearGain,
        min: 0.0,
        max: 10.0,
        default: 1.0,
    },
    ParamSpec {
        address: TUBE_DRIVE,
        identifier: "tubeDrive",
        name: "Tube Drive",
        unit: ParamUnit::Generic,
        min: 0.0,
        max: MAX_TUBE_DRIVE,
        default: 2.0,
    },
];

/// Linear gain into a tube saturation unit, one unit per channel.
pub struct GainTube {
    gain: f32,
    tube_drive: f32,
    tubes: Vec<TubeSaturation>,
}

impl GainTube {
    pub fn new() -> Self {
        Self {
            gain: GAIN_TUBE_PARAMS[0].default,
            tube_drive: GAIN_TUBE_PARAMS[1].default,
            tubes: Vec::new(),
        }
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Tube unit for `channel`, if the session has that many channels.
    pub fn tube(&self, channel: usize) -> Option<&TubeSaturation> {
        self.tubes.get(channel)
    }

    pub fn channel_count(&self) -> usize {
        self.tubes.len()
    }
}

impl Default for GainTube {
    fn default() -> Self {
        Self::new()
    }
}

impl Saturator for GainTube {
    const PARAMS: &'static [ParamSpec] = GAIN_TUBE_PARAMS;

    fn prepare(&mut self, channel_count: usize, sample_rate: f64) {
        let tube_drive = self.tube_drive;
        self.tubes = (0..channel_count)
            .map(|_| {
                let mut tube = TubeSaturation::new(sample_rate as f32);
                tube.set_drive(tube_drive);
                tube
            })
            .collect();
    }

    fn release(&mut self) {
        self.reset();
    }

    #[inline]
    fn load_params(&mut self, params: &ParameterStore) {
        self.gain = params.load(GAIN);
        self.tube_drive = params.load(TUBE_DRIVE);
        for tube in &mut self.tubes {
            tube.set_drive(self.tube_drive);
        }
    }

    #[inline]
    fn process_sample(&mut self, channel: usize, sample: f32) -> f32 {
        let processed = sample * self.gain;
        self.tubes[channel].process_sample(processed)
    }

    fn process_channel(&mut self, channel: usize, input: &[f32], output: &mut [f32]) {
        let gain = self.gain;
        let tube = &mut self.tubes[channel];
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = tube.process_sample(sample * gain);
        }
    }

    fn reset(&mut self) {
        for tube in &mut self.tubes {
            tube.reset();
        }
    }
}
