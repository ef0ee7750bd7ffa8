//! Progressive soft-to-hard clipping.
//!
//! A single `drive` control sweeps the shaper from gentle tanh saturation to
//! a hard clipper with a shrinking ceiling.
//!
//! # How It Works
//!
//! Every sample is pushed through a pre-gain, shaped, then scaled back down:
//!
//!   s      = x * (1 + 9 * drive)          pre-gain, 1x .. 10x
//!   shaped = soft(s) or hard(s)           depends on which half drive is in
//!   out    = shaped / (1 + drive / 2)     makeup gain
//!
//! # The Two Halves
//!
//! Soft half (drive < 0.5):
//!   shaped = tanh(s * (1 + 2 * drive))
//!   - Smooth, warm saturation
//!   - Extra gain inside the tanh steepens the knee as drive rises
//!
//! Hard half (drive >= 0.5):
//!   threshold = 1 - 0.3 * (2 * drive - 1)          1.0 .. 0.7
//!   shaped    = clamp(s) past threshold, tanh(s) inside it
//!   - Flat-topped peaks, buzzy odd harmonics
//!   - Lower ceiling at higher drive = more of the wave is flattened
//!
//! # Drive Values
//!
//!   0.0  = tanh only, unity pre-gain
//!   0.25 = warm saturation
//!   0.5  = hard clipping starts at full scale
//!   1.0  = 10x pre-gain into a 0.7 ceiling

/// Drive at which the shaper switches from soft to hard clipping.
pub const HARD_REGION_START: f32 = 0.5;

/// Pre-gain applied at `drive` (1.0 at drive 0, 10.0 at drive 1).
#[inline]
pub fn pre_gain(drive: f32) -> f32 {
    1.0 + drive * 9.0
}

/// Output scale that offsets the loudness added by pre-gain and clipping.
#[inline]
pub fn makeup_gain(drive: f32) -> f32 {
    1.0 / (1.0 + drive * 0.5)
}

/// Clip ceiling in the hard half. Only meaningful for `drive >= 0.5`.
#[inline]
pub fn hard_threshold(drive: f32) -> f32 {
    let hard_amount = (drive - HARD_REGION_START) * 2.0;
    1.0 - hard_amount * 0.3
}

/// Shape one sample with the progressive clipper.
///
/// Pure function of `(sample, drive)`. Drive outside 0..1 is not clamped;
/// the result stays finite for any finite input because both halves end in
/// either `tanh` or a clamp.
///
/// Above drive ~2.17 the hard threshold is negative and the two clamp
/// branches swap: positive input comes out at the negative threshold and
/// strongly negative input at its magnitude, so the output sign inverts.
/// Hosts that expose the 0..1 range never reach it.
#[inline]
pub fn progressive_clip(sample: f32, drive: f32) -> f32 {
    let s = sample * pre_gain(drive);

    let clipped = if drive < HARD_REGION_START {
        let soft_amount = drive * 2.0;
        (s * (1.0 + soft_amount)).tanh()
    } else {
        let threshold = hard_threshold(drive);
        if s > threshold {
            threshold
        } else if s < -threshold {
            -threshold
        } else {
            s.tanh()
        }
    };

    clipped * makeup_gain(drive)
}

/// Apply progressive clipping to an entire buffer in place.
pub fn progressive_clip_buffer(buffer: &mut [f32], drive: f32) {
    for sample in buffer.iter_mut() {
        *sample = progressive_clip(*sample, drive);
    }
}
