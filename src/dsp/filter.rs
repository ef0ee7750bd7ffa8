use std::f32::consts::TAU;

/*
One-Pole Low-Pass
=================

  y[n] = y[n-1] + a * (x[n] - y[n-1])

  a = 1 - exp(-2π · fc / fs)

The cheapest smoother there is: one multiply-add and one state value. The
coefficient depends on the sample rate, so it is computed when the rate is
set, never per sample.

| a      | behaviour                          |
| ------ | ---------------------------------- |
| 1.0    | no smoothing, output = input       |
| ~0.8   | gentle top-end rolloff at 44.1 kHz |
| → 0.0  | output frozen                      |
*/

pub struct OnePole {
    state: f32,
    coeff: f32,
}

impl OnePole {
    /// Pass-through until [`set_cutoff`](Self::set_cutoff) is called.
    pub fn new() -> Self {
        Self {
            state: 0.0,
            coeff: 1.0,
        }
    }

    pub fn lowpass(cutoff_hz: f32, sample_rate: f32) -> Self {
        let mut filter = Self::new();
        filter.set_cutoff(cutoff_hz, sample_rate);
        filter
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        self.coeff = if sample_rate > 0.0 && cutoff_hz > 0.0 {
            1.0 - (-TAU * cutoff_hz / sample_rate).exp()
        } else {
            1.0
        };
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32) -> f32 {
        self.state += self.coeff * (sample - self.state);
        self.state
    }

    /// Jump the state to `value` without filtering.
    #[inline]
    pub fn track(&mut self, value: f32) {
        self.state = value;
    }

    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    pub fn state(&self) -> f32 {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}

impl Default for OnePole {
    fn default() -> Self {
        Self::new()
    }
}
