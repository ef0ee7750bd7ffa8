//! Tube-style saturation stage.

use crate::dsp::filter::OnePole;

/*
Tube Saturation
===============

A triode stage does not clip symmetrically. The grid bias sits off-centre,
so one half of the wave compresses earlier than the other. That asymmetry is
what produces the even harmonics people call "tube warmth".

Vocabulary
----------

  drive         Gain into the shaper. 0.0 disables the stage entirely
                (bit-exact pass-through), 10.0 is the top of the knob.

  bias          Constant offset added before the curve. Shifts the operating
                point so positive and negative peaks bend differently.

  plate rolloff The output of a real stage loses top end into its load.
                Modelled here with a one-pole low-pass.


Signal Flow
-----------

    x ──► × (1 + drive) ──► tanh(v + bias) - tanh(bias) ──► ÷ makeup ──► LPF ──► y

Subtracting tanh(bias) keeps silence at zero, so the stage adds no DC for a
silent input.

The low-pass runs at min(12 kHz, 0.45 · fs). It is the only state, and it is
why one unit must be used per channel.
*/

/// Operating-point offset for the asymmetric curve.
const BIAS: f32 = 0.2;

/// Plate-load rolloff frequency.
const ROLLOFF_HZ: f32 = 12_000.0;

/// Fraction of the sample rate the rolloff may reach.
const ROLLOFF_MAX_RATIO: f32 = 0.45;

/// Loudness compensation per unit of drive.
const MAKEUP_PER_DRIVE: f32 = 0.1;

/// Highest drive shown on the knob. Not enforced.
pub const MAX_TUBE_DRIVE: f32 = 10.0;

/// Asymmetric triode-like transfer curve. Zero in, zero out.
#[inline]
pub fn tube_curve(v: f32) -> f32 {
    (v + BIAS).tanh() - BIAS.tanh()
}

/// Stateful tube saturation unit for a single channel.
pub struct TubeSaturation {
    sample_rate: f32,
    drive: f32,
    rolloff: OnePole,
}

impl TubeSaturation {
    pub fn new(sample_rate: f32) -> Self {
        let mut tube = Self {
            sample_rate,
            drive: 0.0,
            rolloff: OnePole::new(),
        };
        tube.set_sample_rate(sample_rate);
        tube
    }

    /// Recompute the rolloff coefficient and clear the filter state.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        let cutoff = ROLLOFF_HZ.min(sample_rate * ROLLOFF_MAX_RATIO);
        self.rolloff.set_cutoff(cutoff, sample_rate);
        self.rolloff.reset();
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[inline]
    pub fn set_drive(&mut self, drive: f32) {
        self.drive = drive;
    }

    #[inline]
    pub fn drive(&self) -> f32 {
        self.drive
    }

    /// Shape one sample. Call exactly once per sample, in order.
    #[inline]
    pub fn process_sample(&mut self, sample: f32) -> f32 {
        if self.drive <= 0.0 {
            self.rolloff.track(sample);
            return sample;
        }

        let v = sample * (1.0 + self.drive);
        let shaped = tube_curve(v) / (1.0 + self.drive * MAKEUP_PER_DRIVE);
        let out = self.rolloff.next_sample(shaped);

        if !out.is_finite() {
            self.rolloff.reset();
            return 0.0;
        }

        out
    }

    pub fn process_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.rolloff.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_drive_is_identity() {
        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(0.0);
        for &x in &[0.1, -0.9, 0.0, 3.5] {
            assert_eq!(tube.process_sample(x), x);
        }
    }

    #[test]
    fn test_drive_round_trip() {
        let mut tube = TubeSaturation::new(44_100.0);
        tube.set_drive(6.5);
        assert_eq!(tube.drive(), 6.5);
    }

    #[test]
    fn test_curve_is_asymmetric() {
        let pos = tube_curve(2.0);
        let neg = tube_curve(-2.0);
        assert!(pos > 0.0 && neg < 0.0);
        assert!((pos + neg).abs() > 0.05);
        assert_eq!(tube_curve(0.0), 0.0);
    }

    #[test]
    fn test_silence_stays_silent() {
        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(8.0);
        let mut buffer = [0.0f32; 64];
        tube.process_buffer(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_output_bounded_under_heavy_drive() {
        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(MAX_TUBE_DRIVE);
        for i in 0..4_800 {
            let x = (i as f32 * 0.05).sin() * 4.0;
            let y = tube.process_sample(x);
            assert!(y.is_finite());
            assert!(y.abs() <= 2.0);
        }
    }

    #[test]
    fn test_state_carries_between_samples() {
        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(2.0);
        let first = tube.process_sample(0.5);
        let second = tube.process_sample(0.5);
        assert_ne!(first, second);
    }

    #[test]
    fn test_non_finite_input_does_not_poison_state() {
        let mut tube = TubeSaturation::new(48_000.0);
        tube.set_drive(2.0);
        assert_eq!(tube.process_sample(f32::NAN), 0.0);
        assert!(tube.process_sample(0.25).is_finite());
    }

    #[test]
    fn test_rolloff_limited_below_nyquist() {
        let mut tube = TubeSaturation::new(8_000.0);
        assert_eq!(tube.sample_rate(), 8_000.0);
        tube.set_drive(1.0);
        assert!(tube.process_sample(0.5).is_finite());
    }
}
